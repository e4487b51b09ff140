use geoenrich_boundary::EnrichedEvent;
use geoenrich_core::{
    entities::EnrichedRecord,
    sink::{RecordSink, SinkError},
};
use itertools::Itertools;
use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

const ARRAY_START: &str = "[\n";
const ARRAY_END: &str = "\n]\n";
const SEPARATOR: &str = ",\n";
const INDENT: &str = "  ";

/// Streams records into a JSON array on disk.
///
/// Records are appended as soon as they arrive and previously
/// written bytes are never touched again. The array is only
/// terminated by [`RecordSink::close`], until then the file is
/// not valid JSON.
#[derive(Debug)]
pub struct IncrementalWriter {
    file: File,
    closed: bool,
}

impl IncrementalWriter {
    pub fn create(path: &Path) -> io::Result<Self> {
        let mut file = File::create(path)?;
        file.write_all(ARRAY_START.as_bytes())?;
        Ok(Self {
            file,
            closed: false,
        })
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "the JSON array has already been closed",
            ));
        }
        Ok(())
    }
}

fn format_element(record: &EnrichedRecord, is_first: bool) -> Result<String, SinkError> {
    let json = serde_json::to_string_pretty(&EnrichedEvent::from(record.clone()))
        .map_err(|err| SinkError::Serialize(err.to_string()))?;
    let indented = json
        .lines()
        .map(|line| {
            if line.is_empty() {
                line.to_owned()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .join("\n");
    let prefix = if is_first { "" } else { SEPARATOR };
    Ok(format!("{prefix}{indented}"))
}

impl RecordSink for IncrementalWriter {
    fn append_record(&mut self, record: &EnrichedRecord, is_first: bool) -> Result<(), SinkError> {
        self.ensure_open()?;
        let element = format_element(record, is_first)?;
        self.file.write_all(element.as_bytes())?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        self.ensure_open()?;
        self.file.write_all(ARRAY_END.as_bytes())?;
        self.file.flush()?;
        self.closed = true;
        Ok(())
    }
}
