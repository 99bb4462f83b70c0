//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Material type tag marking a terminal artifact
pub const RAW_DATA_FILE_TYPE: &str = "Raw Data File";

/// Separator used when flattening a value set into one cell
pub const VALUE_DELIMITER: &str = ";";

// Column prefixes per category group
pub const PARAMETER_PREFIX: &str = "[P]";
pub const FACTOR_PREFIX: &str = "[F]";
pub const CHARACTERISTIC_PREFIX: &str = "[C]";

// Fixed labels of the GEO metadata sheet
pub const SAMPLE_NAME_COLUMN: &str = "Sample name";
pub const RAW_FILE_COLUMN: &str = "raw file";
pub const RAW_FILES_SECTION: &str = "RAW FILES";
pub const TITLE_KEY: &str = "title";
pub const SUMMARY_KEY: &str = "summary";
pub const CONTRIBUTOR_KEY: &str = "contributor";

/// Export tool invoked inside an ARC directory
pub const DEFAULT_ARC_COMMAND: &str = "arc";
pub const DEFAULT_ARC_ARGS: &[&str] = &["-v", "0", "export"];

/// Default sheet delimiter (tab-separated)
pub const DEFAULT_SHEET_DELIMITER: u8 = b'\t';
