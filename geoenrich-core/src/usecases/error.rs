use crate::sink::SinkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to write enriched event: {0}")]
    Sink(#[from] SinkError),
}
