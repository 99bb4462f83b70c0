use crate::utils::config::{DEFAULT_ARC_COMMAND, DEFAULT_SHEET_DELIMITER};
use std::path::PathBuf;

/// Where the ARC JSON document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArcSource {
    /// ARC directory; the document is produced by the export tool
    Directory(PathBuf),

    /// Previously exported JSON file
    File(PathBuf),
}

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Input document source
    pub source: ArcSource,

    /// Export tool executable (directory sources only)
    pub arc_command: String,

    /// Study index within the investigation
    pub study: usize,

    /// Assay index within the study
    pub assay: usize,

    /// Output path for the delimited sheet
    pub output_sheet: PathBuf,

    /// Output path for the JSON submission (optional)
    pub output_json: Option<PathBuf>,

    /// Field delimiter of the sheet
    pub delimiter: u8,

    /// Print the sample table to stdout
    pub print_summary: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            source: ArcSource::Directory(PathBuf::from(".")),
            arc_command: DEFAULT_ARC_COMMAND.to_string(),
            study: 0,
            assay: 0,
            output_sheet: PathBuf::from("geo.tsv"),
            output_json: None,
            delimiter: DEFAULT_SHEET_DELIMITER,
            print_summary: false,
        }
    }
}
