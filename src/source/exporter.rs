//! Runs the ARC command line tool to export an ARC as ISA JSON.

use crate::utils::config::{DEFAULT_ARC_ARGS, DEFAULT_ARC_COMMAND};
use crate::utils::error::SourceError;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Export tool invocation bound to one ARC directory
#[derive(Debug, Clone)]
pub struct ArcExporter {
    command: String,
    args: Vec<String>,
    arc_path: PathBuf,
}

impl ArcExporter {
    /// Exporter using the default `arc -v 0 export` invocation
    pub fn new(arc_path: impl Into<PathBuf>) -> Self {
        Self {
            command: DEFAULT_ARC_COMMAND.to_string(),
            args: DEFAULT_ARC_ARGS.iter().map(|a| a.to_string()).collect(),
            arc_path: arc_path.into(),
        }
    }

    /// Replace the executable (arguments are kept)
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn arc_path(&self) -> &Path {
        &self.arc_path
    }

    /// Run the export and parse its standard output as JSON
    ///
    /// Standard error of the tool is forwarded to the log.
    ///
    /// # Errors
    /// * `SourceError::SpawnFailed` - the tool could not be started
    /// * `SourceError::ExportFailed` - the tool exited unsuccessfully
    /// * `SourceError::InvalidJson` - standard output is not JSON
    pub fn export(&self) -> Result<serde_json::Value, SourceError> {
        info!(
            "Running '{} {}' in {}",
            self.command,
            self.args.join(" "),
            self.arc_path.display()
        );

        let output = Command::new(&self.command)
            .args(&self.args)
            .current_dir(&self.arc_path)
            .output()
            .map_err(|source| SourceError::SpawnFailed {
                command: self.command.clone(),
                source,
            })?;

        for line in String::from_utf8_lossy(&output.stderr).lines() {
            if !line.trim().is_empty() {
                warn!("{}: {}", self.command, line);
            }
        }

        if !output.status.success() {
            return Err(SourceError::ExportFailed {
                status: output.status.to_string(),
            });
        }

        debug!("Export produced {} bytes", output.stdout.len());
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
