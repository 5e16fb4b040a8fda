use sc_core::{Error, OutputConfig, RecordStorage, Result};

pub mod backends;
pub mod roster;

pub use backends::*;
pub use roster::Roster;

/// Builds the storage backend named on the command line.
pub fn create_storage(kind: &str, output: &OutputConfig) -> Result<Box<dyn RecordStorage>> {
    match kind {
        "csv" => Ok(Box::new(CsvStorage::new(output.clone())?)),
        "memory" => Ok(Box::new(MemoryStorage::new())),
        other => Err(Error::Config(format!(
            "Unknown storage backend: {} (expected csv or memory)",
            other
        ))),
    }
}
