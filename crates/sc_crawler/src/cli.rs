use clap::{Args, Subcommand};
use sc_core::Result;
use sc_stats::{ChartRenderer, RenderedChart};

use crate::manager::PipelineManager;

#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    #[command(subcommand)]
    pub command: PipelineCommands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineCommands {
    /// Run every stage: crawl, classify, aggregate, report
    #[default]
    Run,
    /// Crawl from the seed page and store url/headline pairs
    Crawl,
    /// Match stored pages against the team roster and extract scores
    Classify,
    /// Average game differences per team
    Aggregate,
    /// Render charts from stored articles and team stats
    Report,
}

impl PipelineCommands {
    pub fn needs_roster(&self) -> bool {
        matches!(self, PipelineCommands::Run | PipelineCommands::Classify)
    }
}

/// Runs the requested stage(s) and returns any charts to be written out.
pub async fn handle_command(
    args: PipelineArgs,
    manager: &mut PipelineManager,
    renderer: &dyn ChartRenderer,
) -> Result<Vec<RenderedChart>> {
    match args.command {
        PipelineCommands::Run => {
            let (summary, charts) = manager.run_all(renderer).await?;
            println!(
                "Visited {} pages ({} skipped), classified {} articles about {} teams",
                summary.crawl.visited, summary.crawl.faults, summary.articles, summary.teams
            );
            Ok(charts)
        }
        PipelineCommands::Crawl => {
            let summary = manager.crawl().await?;
            println!(
                "Visited {} pages ({} skipped, {} left in queue)",
                summary.visited, summary.faults, summary.pending
            );
            Ok(Vec::new())
        }
        PipelineCommands::Classify => {
            let records = manager.classify().await?;
            for record in &records {
                println!(
                    "{} {} - {}",
                    record.team.as_deref().unwrap_or("?"),
                    record.score,
                    record.headline
                );
            }
            Ok(Vec::new())
        }
        PipelineCommands::Aggregate => {
            for stat in manager.aggregate()? {
                println!("{}: {:.2}", stat.team, stat.avg_game_difference);
            }
            Ok(Vec::new())
        }
        PipelineCommands::Report => manager.report(renderer),
    }
}
