pub mod aggregate;
pub mod chart;
pub mod frequency;
pub mod report;

pub use aggregate::aggregate;
pub use chart::{BarChart, ChartRenderer, Series, TextChart};
pub use frequency::{compare, team_frequencies, top_teams, TeamComparison, TeamFrequency};
pub use report::{RenderedChart, Report};
