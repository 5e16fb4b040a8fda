use std::fs::{self, File};
use std::path::{Path, PathBuf};

use sc_core::{ArticleRecord, OutputConfig, RecordStorage, Result, TeamStat, VisitedPage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub const PAGE_COLUMNS: [&str; 2] = ["url", "headline"];
pub const RECORD_COLUMNS: [&str; 4] = ["url", "headline", "team", "score"];
pub const STAT_COLUMNS: [&str; 2] = ["team", "avg_game_difference"];

/// Comma-separated files, one per pipeline stage.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    config: OutputConfig,
}

impl CsvStorage {
    pub fn new(config: OutputConfig) -> Result<Self> {
        fs::create_dir_all(&config.dir)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }
}

/// Writes a header row followed by one row per item. The header is written
/// even when `rows` is empty.
pub fn write_table<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = ::csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Reads every row of a headed table, matching fields to columns by name.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = ::csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let rows = reader.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

impl CsvStorage {
    fn path(&self, file: &str) -> PathBuf {
        self.config.dir.join(file)
    }
}

impl RecordStorage for CsvStorage {
    fn write_pages(&mut self, pages: &[VisitedPage]) -> Result<()> {
        write_table(&self.path(&self.config.pages_file), &PAGE_COLUMNS, pages)
    }

    fn read_pages(&self) -> Result<Vec<VisitedPage>> {
        read_table(&self.path(&self.config.pages_file))
    }

    fn write_records(&mut self, records: &[ArticleRecord]) -> Result<()> {
        write_table(&self.path(&self.config.articles_file), &RECORD_COLUMNS, records)
    }

    fn read_records(&self) -> Result<Vec<ArticleRecord>> {
        read_table(&self.path(&self.config.articles_file))
    }

    fn write_stats(&mut self, stats: &[TeamStat]) -> Result<()> {
        write_table(&self.path(&self.config.stats_file), &STAT_COLUMNS, stats)
    }

    fn read_stats(&self) -> Result<Vec<TeamStat>> {
        read_table(&self.path(&self.config.stats_file))
    }
}
