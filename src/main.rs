mod cli;

use clap::Parser;
use proficiency::error::Result;
use proficiency::types::config::AssessConfig;
use proficiency::{assess, batch, config, input, report, AssessmentResult, CefrLevel};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BELOW_TARGET: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Sarif => report::OutputFormat::Sarif,
    }
}

fn load_config(explicit: Option<&Path>) -> Result<AssessConfig> {
    let root = std::env::current_dir()?;
    Ok(config::load_config(&root, explicit)?.unwrap_or_default())
}

fn assess_source(
    path: &Path,
    cfg: &AssessConfig,
    variant: Option<cli::VariantArg>,
) -> Result<AssessmentResult> {
    let profile = cfg.profile(variant.map(Into::into));
    let raw = input::read_source(path)?;
    let text = input::prepare(&raw, &cfg.input_settings())?;
    info!(
        source = %path.display(),
        chars = text.chars().count(),
        variant = profile.variant.as_str(),
        "assessing text"
    );
    Ok(assess::assess_text(&text, &profile))
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let cfg = load_config(cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let result = assess_source(&cmd.path, &cfg, cmd.variant)?;
            let rendered = report::render(&result, output_format(cmd.format))?;
            println!("{rendered}");

            match cmd.expect {
                Some(target) if result.cefr_level < target => {
                    eprintln!(
                        "warning: assessed level {} is below expected {}",
                        result.cefr_level, target
                    );
                    Ok(exit_code::BELOW_TARGET)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Lint(cmd) => {
            let result = assess_source(&cmd.path, &cfg, None)?;
            if !result.has_grammar_errors() {
                println!("lint: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for error in &result.grammar_errors {
                println!(
                    "[{} severity {}] {}: {}",
                    error.level, error.severity, error.id, error.description
                );
                println!("  \"{}\"", error.excerpt);
            }
            Ok(exit_code::WARNINGS)
        }
        cli::Commands::Suggest(cmd) => {
            let result = assess_source(&cmd.path, &cfg, cmd.variant)?;
            println!("level: {} (score {})", result.cefr_level, result.score);
            println!("overview:");
            for line in &result.overview {
                println!("- {line}");
            }
            println!("suggestions:");
            for line in &result.suggestions {
                println!("- {line}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let profile = cfg.profile(cmd.variant.map(Into::into));
            let batch_report = batch::assess_directory(&cmd.dir, &profile, &cfg)?;
            let rendered = report::render_batch(&batch_report, output_format(cmd.format))?;
            println!("{rendered}");

            if batch_report.skipped.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!(
                    "warning: {} submission(s) skipped",
                    batch_report.skipped.len()
                );
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Levels(cmd) => {
            let profile = cfg.profile(cmd.variant.map(Into::into));
            println!("variant: {}", profile.variant.as_str());
            for level in CefrLevel::ALL.iter().rev() {
                println!("{} >= {}", level, profile.thresholds.lower_bound(*level));
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
