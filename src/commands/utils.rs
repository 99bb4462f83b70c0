use crate::output::read_submission;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a submission JSON file
pub fn validate_submission_file(file_path: PathBuf) -> Result<()> {
    println!("Validating submission: {}", file_path.display());

    let submission = read_submission(&file_path)
        .with_context(|| format!("Failed to read submission {}", file_path.display()))?;

    if submission.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported submission version {} (expected {})",
            submission.version,
            SCHEMA_VERSION
        );
    }

    let width = submission.samples.header.len();
    if let Some(idx) = submission.samples.rows.iter().position(|r| r.len() != width) {
        anyhow::bail!("Sample row {} does not match the header width {}", idx, width);
    }

    println!("✓ Valid submission JSON");
    println!("  Version: {}", submission.version);
    println!("  Title: {}", submission.title);
    println!("  Contributors: {}", submission.contributors.len());
    println!("  Columns: {}", width);
    println!("  Samples: {}", submission.samples.rows.len());
    println!("  Raw Files: {}", submission.raw_files.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("ARC to GEO v{}", env!("CARGO_PKG_VERSION"));
    println!("Submission Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Converts ARC experiment graphs into GEO submission sheets.");
}
