pub mod csv;
pub mod memory;

pub use self::csv::CsvStorage;
pub use memory::MemoryStorage;
