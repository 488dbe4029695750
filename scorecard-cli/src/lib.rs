//! Command-line interface for the vendor scorecard engine.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::File;
use clap::{Parser, Subcommand};
use std::io::Read;
use thiserror::Error;

use scorecard_core::{
    ScoreError, ScoringConfig, rank_vendors, sample_vendors, score_vendors,
};
use scorecard_report::{
    BAR_CHART_FILE_NAME, ReportError, SCATTER_CHART_FILE_NAME, SCORECARD_FILE_NAME,
    render_bar_chart, render_scatter_chart, render_table, write_chart, write_scorecard,
};

/// Run the scorecard CLI with the current process arguments.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args.into()),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "scorecard",
    about = "Score and rank the embedded vendor table",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score the vendor table and write the scorecard artefacts.
    Score(ScoreArgs),
}

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Default)]
#[command(about = "Score the embedded vendor table and write the artefacts")]
struct ScoreArgs {
    /// Path for the CSV scorecard (defaults to vendor_scorecard.csv).
    #[arg(long, value_name = "path")]
    output: Option<Utf8PathBuf>,
    /// Directory receiving the SVG charts (defaults to the working directory).
    #[arg(long, value_name = "dir")]
    charts_dir: Option<Utf8PathBuf>,
    /// Path to a JSON file overriding the default scoring configuration.
    #[arg(long, value_name = "path")]
    config: Option<Utf8PathBuf>,
}

/// Resolved artefact paths and configuration source for one scoring run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScorePlan {
    scorecard_path: Utf8PathBuf,
    bar_chart_path: Utf8PathBuf,
    scatter_chart_path: Utf8PathBuf,
    config_path: Option<Utf8PathBuf>,
}

impl From<ScoreArgs> for ScorePlan {
    fn from(args: ScoreArgs) -> Self {
        let charts_dir = args
            .charts_dir
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        Self {
            scorecard_path: args
                .output
                .unwrap_or_else(|| Utf8PathBuf::from(SCORECARD_FILE_NAME)),
            bar_chart_path: charts_dir.join(BAR_CHART_FILE_NAME),
            scatter_chart_path: charts_dir.join(SCATTER_CHART_FILE_NAME),
            config_path: args.config,
        }
    }
}

fn run_score(plan: ScorePlan) -> Result<(), CliError> {
    let config = plan
        .config_path
        .as_deref()
        .map_or_else(|| Ok(ScoringConfig::default()), read_config_file)?;
    let mut scored = score_vendors(&sample_vendors(), &config)?;
    rank_vendors(&mut scored);
    print!("{}", render_table(&scored));
    write_scorecard(&plan.scorecard_path, &scored)?;
    println!("\nSaved as {}", plan.scorecard_path);
    let bar = render_bar_chart(&scored)?;
    write_chart(&plan.bar_chart_path, &bar)?;
    let scatter = render_scatter_chart(&scored)?;
    write_chart(&plan.scatter_chart_path, &scatter)?;
    Ok(())
}

fn read_config_file(path: &Utf8Path) -> Result<ScoringConfig, CliError> {
    let open_error = |source| CliError::OpenConfig {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open_ambient(path, ambient_authority()).map_err(open_error)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(open_error)?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors emitted by the scorecard CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// A scoring configuration file could not be read.
    #[error("failed to read configuration {path}")]
    OpenConfig {
        /// Path of the configuration file that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A scoring configuration file held invalid JSON.
    #[error("failed to parse configuration {path}")]
    ParseConfig {
        /// Path of the configuration file that failed to parse.
        path: Utf8PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// Scoring rejected the vendor table or the configuration.
    #[error(transparent)]
    Score(#[from] ScoreError),
    /// An artefact could not be rendered or written.
    #[error(transparent)]
    Report(#[from] ReportError),
}
