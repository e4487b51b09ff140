//! Persistence of enriched events in a single JSON file.
//!
//! The file written by one run serves as the coordinate
//! cache of the next run.

use geoenrich_core::{cache::CoordinateSource, entities::Coordinate};
use std::{collections::HashMap, io, path::PathBuf};

mod cache;
mod writer;

pub use self::writer::IncrementalWriter;

/// The output file of an enrichment run.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Truncates the file and starts a new JSON array.
    ///
    /// Load the coordinates before, they are gone afterwards.
    pub fn create_writer(&self) -> io::Result<IncrementalWriter> {
        IncrementalWriter::create(&self.path)
    }
}

impl CoordinateSource for JsonFile {
    fn load_coordinates(&self) -> HashMap<String, Coordinate> {
        cache::load_coordinates(&self.path)
    }
}
