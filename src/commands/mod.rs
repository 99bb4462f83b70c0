//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod convert;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use convert::{execute_convert, load_document, validate_args};
pub use models::{ArcSource, ConvertArgs};
pub use utils::{display_version, validate_submission_file};
