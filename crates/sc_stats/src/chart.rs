use std::fmt::Write;

use sc_core::{Error, Result};

use crate::frequency::{TeamComparison, TeamFrequency};

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    /// Decimal places shown next to each bar.
    pub precision: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl BarChart {
    fn check(&self) -> Result<()> {
        match self.series.iter().find(|s| s.values.len() != self.categories.len()) {
            Some(series) => Err(Error::Config(format!(
                "Series {} has {} values for {} categories",
                series.name,
                series.values.len(),
                self.categories.len()
            ))),
            None => Ok(()),
        }
    }
}

pub trait ChartRenderer {
    fn render(&self, chart: &BarChart) -> Result<String>;

    /// File extension for rendered output.
    fn extension(&self) -> &str;
}

/// Horizontal bar charts drawn with block characters.
#[derive(Debug, Clone)]
pub struct TextChart {
    pub width: usize,
}

impl Default for TextChart {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl ChartRenderer for TextChart {
    fn render(&self, chart: &BarChart) -> Result<String> {
        chart.check()?;

        let max = chart
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max);
        let label_width = chart.categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let series_width = if chart.series.len() > 1 {
            chart.series.iter().map(|s| s.name.chars().count()).max().unwrap_or(0)
        } else {
            0
        };

        let mut out = String::new();
        writeln!(out, "{}", chart.title).ok();
        writeln!(out, "x: {} | y: {}", chart.x_label, chart.y_label).ok();
        writeln!(out).ok();

        for (i, category) in chart.categories.iter().enumerate() {
            for (j, series) in chart.series.iter().enumerate() {
                let label = if j == 0 { category.as_str() } else { "" };
                let value = series.values[i];
                let bar = "█".repeat(self.bar_len(value, max));
                if series_width > 0 {
                    writeln!(
                        out,
                        "{:<lw$}  {:<sw$} | {} {:.p$}",
                        label,
                        series.name,
                        bar,
                        value,
                        lw = label_width,
                        sw = series_width,
                        p = series.precision
                    )
                    .ok();
                } else {
                    writeln!(
                        out,
                        "{:<lw$} | {} {:.p$}",
                        label,
                        bar,
                        value,
                        lw = label_width,
                        p = series.precision
                    )
                    .ok();
                }
            }
        }
        Ok(out)
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

impl TextChart {
    fn bar_len(&self, value: f64, max: f64) -> usize {
        if max <= 0.0 || value <= 0.0 {
            return 0;
        }
        ((value / max) * self.width as f64).round() as usize
    }
}

/// Bar chart of the most written-about teams.
pub fn frequency_chart(top: &[TeamFrequency]) -> BarChart {
    BarChart {
        title: format!("Top {} Most Frequently Written Teams", top.len()),
        x_label: "Team name".to_string(),
        y_label: "Number of articles".to_string(),
        categories: top.iter().map(|f| f.team.clone()).collect(),
        series: vec![Series {
            name: "articles".to_string(),
            values: top.iter().map(|f| f.count as f64).collect(),
            precision: 0,
        }],
    }
}

/// Paired bars of normalized article frequency and average game difference.
pub fn comparison_chart(rows: &[TeamComparison]) -> BarChart {
    BarChart {
        title: "Comparing article frequency of each team vs their average game difference"
            .to_string(),
        x_label: "Team name".to_string(),
        y_label: "Normalized value".to_string(),
        categories: rows.iter().map(|r| r.team.clone()).collect(),
        series: vec![
            Series {
                name: "article_freq".to_string(),
                values: rows.iter().map(|r| r.article_freq).collect(),
                precision: 2,
            },
            Series {
                name: "avg_game_difference".to_string(),
                values: rows.iter().map(|r| r.avg_game_difference).collect(),
                precision: 2,
            },
        ],
    }
}
