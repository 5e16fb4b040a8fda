use crate::types::{ArticleRecord, TeamStat, VisitedPage};
use crate::Result;

/// Tabular sink and source shared by the pipeline stages.
///
/// Each `write_*` replaces whatever the table held before.
pub trait RecordStorage: Send {
    fn write_pages(&mut self, pages: &[VisitedPage]) -> Result<()>;

    fn read_pages(&self) -> Result<Vec<VisitedPage>>;

    fn write_records(&mut self, records: &[ArticleRecord]) -> Result<()>;

    fn read_records(&self) -> Result<Vec<ArticleRecord>>;

    fn write_stats(&mut self, stats: &[TeamStat]) -> Result<()>;

    fn read_stats(&self) -> Result<Vec<TeamStat>>;
}
