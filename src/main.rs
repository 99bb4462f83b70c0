//! ARC to GEO CLI
//!
//! Converts an ARC into a GEO submission sheet.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use arc_to_geo::commands::{
    display_version, execute_convert, validate_args, validate_submission_file, ArcSource,
    ConvertArgs,
};
use arc_to_geo::utils::config::DEFAULT_ARC_COMMAND;

/// ARC to GEO - sample sheets from experiment graphs
#[derive(Parser, Debug)]
#[command(name = "arc-to-geo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an ARC into a GEO submission sheet
    Convert {
        /// Path to the ARC directory
        #[arg(short, long, conflicts_with = "input", required_unless_present = "input")]
        path: Option<PathBuf>,

        /// Previously exported ARC JSON file (skips the export tool)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Export tool executable
        #[arg(long, env = "ARC_COMMAND", default_value = DEFAULT_ARC_COMMAND)]
        arc_command: String,

        /// Study index
        #[arg(long, default_value = "0")]
        study: usize,

        /// Assay index within the study
        #[arg(long, default_value = "0")]
        assay: usize,

        /// Output path for the sheet
        #[arg(short, long, default_value = "geo.tsv")]
        output: PathBuf,

        /// Output path for a JSON copy of the submission (optional)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Sheet delimiter: a single ASCII character or "tab"
        #[arg(short, long, default_value = "tab", value_parser = parse_delimiter)]
        delimiter: u8,

        /// Print the sample table to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a submission JSON file
    Validate {
        /// Path to submission JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

/// Parse the delimiter argument
///
/// **Private** - clap value parser
fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let bytes = raw.as_bytes();
            if bytes.len() == 1 && bytes[0].is_ascii() {
                Ok(bytes[0])
            } else {
                Err(format!("delimiter must be one ASCII character, got '{}'", raw))
            }
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Convert {
            path,
            input,
            arc_command,
            study,
            assay,
            output,
            json,
            delimiter,
            summary,
        } => {
            let source = match (input, path) {
                (Some(file), _) => ArcSource::File(file),
                (None, Some(dir)) => ArcSource::Directory(dir),
                (None, None) => anyhow::bail!("Either --path or --input is required"),
            };

            let args = ConvertArgs {
                source,
                arc_command,
                study,
                assay,
                output_sheet: output,
                output_json: json,
                delimiter,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_convert(args)?;
        }

        Commands::Validate { file } => {
            validate_submission_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
