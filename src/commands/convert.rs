//! Convert command implementation.
//!
//! The convert command:
//! 1. Obtains the ARC JSON (export tool or file)
//! 2. Parses the document and selects the assay
//! 3. Indexes raw data files
//! 4. Aggregates lineage information per raw data file
//! 5. Projects the sample table
//! 6. Writes output files

use crate::aggregator::collect_raw_data_files;
use crate::commands::models::{ArcSource, ConvertArgs};
use crate::output::{write_sheet, write_submission, GeoSubmission};
use crate::parser::{parse_arc_document, select_assay, ArcDocument};
use crate::source::{read_arc_json, ArcExporter};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Source, assay selection and output options
///
/// # Returns
/// The submission that was written
///
/// # Errors
/// * Export tool or input file failures
/// * Malformed process graph
/// * No raw data files in the selected assay
/// * File write errors
pub fn execute_convert(args: ConvertArgs) -> Result<GeoSubmission> {
    let start_time = Instant::now();

    info!("Converting ARC to GEO submission");
    let document = load_document(&args)?;

    let assay = select_assay(&document, args.study, args.assay)
        .context("Failed to select assay")?;

    info!("Aggregating raw data files...");
    let raw_data_files = collect_raw_data_files(&assay.process_sequence);

    info!("Annotating samples...");
    let submission = GeoSubmission::build(&document, &raw_data_files)
        .context("Failed to build sample table")?;
    debug!(
        "Submission has {} columns and {} samples",
        submission.samples.header.len(),
        submission.samples.rows.len()
    );

    write_outputs(&args, &submission)?;

    if args.print_summary {
        print_sample_summary(&submission);
    }

    info!(
        "Conversion completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(submission)
}

/// Obtain and parse the ARC document
///
/// **Public** - also used by tests to exercise the source selection
pub fn load_document(args: &ConvertArgs) -> Result<ArcDocument> {
    let raw = match &args.source {
        ArcSource::Directory(path) => {
            info!("Retrieving arc.json");
            ArcExporter::new(path)
                .with_command(args.arc_command.as_str())
                .export()
                .with_context(|| format!("Failed to export ARC at {}", path.display()))?
        }
        ArcSource::File(path) => read_arc_json(path)
            .with_context(|| format!("Failed to read ARC JSON {}", path.display()))?,
    };

    parse_arc_document(&raw).context("Failed to parse ARC JSON")
}

/// Write the sheet and the optional JSON submission
///
/// **Private** - internal helper for execute_convert
fn write_outputs(args: &ConvertArgs, submission: &GeoSubmission) -> Result<()> {
    info!("Writing output files...");

    write_sheet(submission, &args.output_sheet, args.delimiter)
        .context("Failed to write sheet")?;
    info!("✓ Sheet written to: {}", args.output_sheet.display());

    if let Some(json_path) = &args.output_json {
        write_submission(submission, json_path).context("Failed to write submission JSON")?;
        info!("✓ Submission written to: {}", json_path.display());
    }

    Ok(())
}

/// Print the sample table to stdout
///
/// **Private** - internal helper for execute_convert
fn print_sample_summary(submission: &GeoSubmission) {
    println!();
    println!("  Title:   {}", submission.title);
    println!("  Samples: {}", submission.samples.rows.len());
    println!();
    println!("  {}", submission.samples.header.join(" | "));
    for row in &submission.samples.rows {
        println!("  {}", row.join(" | "));
    }
    println!();
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    match &args.source {
        ArcSource::Directory(path) => {
            if !path.is_dir() {
                anyhow::bail!("ARC path is not a directory: {}", path.display());
            }
            if args.arc_command.trim().is_empty() {
                anyhow::bail!("ARC command cannot be empty");
            }
        }
        ArcSource::File(path) => {
            if !path.is_file() {
                anyhow::bail!("Input file does not exist: {}", path.display());
            }
        }
    }

    if args.output_sheet.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output_json.as_ref() == Some(&args.output_sheet) {
        anyhow::bail!("Sheet and JSON outputs must be different files");
    }

    if matches!(args.delimiter, b'"' | b'\n' | b'\r') {
        anyhow::bail!("Delimiter cannot be a quote or line break");
    }

    Ok(())
}
