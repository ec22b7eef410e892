use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::logging::init_logging;
use crate::formatters::{Labels, Locale};
use crate::processor::{BatchSummary, process_directory};
use crate::utils::{display_file_name, get_export_dir, get_output_dir};

const SEPARATOR_WIDTH: usize = 50;

#[derive(Parser)]
#[command(name = "context-export-formatter")]
#[command(version = "0.1.0")]
#[command(about = "Format exported conversation context logs into readable text reports", long_about = None)]
pub struct Cli {
    /// Directory containing the exported *.json files [env: CONTEXT_EXPORT_DIR]
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory to write formatted_*.txt reports into [env: CONTEXT_EXPORT_OUTPUT_DIR]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Language of report headers
    #[arg(long, value_enum, default_value_t = Locale::En)]
    pub locale: Locale,

    /// Render files on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Only print the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    format_exports(&cli)
}

fn format_exports(cli: &Cli) -> Result<()> {
    let export_dir = match &cli.input_dir {
        Some(dir) => dir.clone(),
        None => get_export_dir()?,
    };
    let output_dir = match &cli.output_dir {
        Some(dir) => dir.clone(),
        None => get_output_dir(&export_dir),
    };
    let labels = Labels::for_locale(cli.locale);

    let summary = process_directory(&export_dir, &output_dir, labels, cli.parallel)?;
    if summary.is_empty() {
        println!("No JSON files found in {}", export_dir.display());
        return Ok(());
    }

    println!("Found {} JSON files, processing...", summary.total());
    println!("{}", "-".repeat(SEPARATOR_WIDTH));

    if !cli.quiet {
        print_outcomes(&summary);
    }

    println!("{}", "-".repeat(SEPARATOR_WIDTH));
    println!("Done! Succeeded: {}/{}", summary.succeeded(), summary.total());
    println!("Formatted files saved to: {}", output_dir.display());

    Ok(())
}

fn print_outcomes(summary: &BatchSummary) {
    for outcome in &summary.outcomes {
        match &outcome.result {
            Ok(output) => {
                println!("✓ {} -> {}", outcome.source_name(), display_file_name(output))
            }
            Err(e) => println!("✗ {}: {}", outcome.source_name(), e),
        }
    }
}
