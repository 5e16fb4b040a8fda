use sc_core::{ArticleRecord, RecordStorage, Result, TeamStat, VisitedPage};

/// Keeps every table in memory. Used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    pages: Vec<VisitedPage>,
    records: Vec<ArticleRecord>,
    stats: Vec<TeamStat>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStorage for MemoryStorage {
    fn write_pages(&mut self, pages: &[VisitedPage]) -> Result<()> {
        self.pages = pages.to_vec();
        Ok(())
    }

    fn read_pages(&self) -> Result<Vec<VisitedPage>> {
        Ok(self.pages.clone())
    }

    fn write_records(&mut self, records: &[ArticleRecord]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn read_records(&self) -> Result<Vec<ArticleRecord>> {
        Ok(self.records.clone())
    }

    fn write_stats(&mut self, stats: &[TeamStat]) -> Result<()> {
        self.stats = stats.to_vec();
        Ok(())
    }

    fn read_stats(&self) -> Result<Vec<TeamStat>> {
        Ok(self.stats.clone())
    }
}
