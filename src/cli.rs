use clap::{Args, Parser, Subcommand, ValueEnum};
use proficiency::error::AssessError;
use proficiency::types::level::CefrLevel;
use proficiency::types::scoring::ScoringVariant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "proficiency",
    version,
    about = "Heuristic CEFR writing-proficiency scorer for student essays"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use this config file instead of ./proficiency.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one essay
    Assess(AssessCommand),
    /// List grammar findings only
    Lint(LintCommand),
    /// Print the level with its overview and suggestions
    Suggest(SuggestCommand),
    /// Score every submission in a directory
    Batch(BatchCommand),
    /// Show the CEFR score thresholds of a scoring variant
    Levels(LevelsCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum VariantArg {
    Calibrated,
    Legacy,
}

impl From<VariantArg> for ScoringVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Calibrated => ScoringVariant::Calibrated,
            VariantArg::Legacy => ScoringVariant::Legacy,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}

fn parse_level(value: &str) -> Result<CefrLevel, String> {
    value
        .parse::<CefrLevel>()
        .map_err(|e: AssessError| e.to_string())
}

#[derive(Args)]
pub struct AssessCommand {
    /// Essay file, or '-' for stdin
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
    /// Exit with code 2 when the assessed level is below this one
    #[arg(long, value_parser = parse_level)]
    pub expect: Option<CefrLevel>,
}

#[derive(Args)]
pub struct LintCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct SuggestCommand {
    pub path: PathBuf,
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}

#[derive(Args)]
pub struct LevelsCommand {
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}
