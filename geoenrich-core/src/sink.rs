use crate::entities::EnrichedRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unable to serialize record: {0}")]
    Serialize(String),
}

/// Receives enriched records one by one in processing order.
pub trait RecordSink {
    /// Appends a record. `is_first` must be `true` for
    /// the very first record and only for it.
    fn append_record(&mut self, record: &EnrichedRecord, is_first: bool) -> Result<(), SinkError>;

    /// Completes the output. No records must be appended afterwards.
    fn close(&mut self) -> Result<(), SinkError>;
}
