//! ARC to GEO
//!
//! Converts an ARC experiment description (an ISA process sequence) into a
//! GEO submission sheet with one annotated row per raw data file.
//!
//! The core is the lineage aggregation in [`aggregator`]: every raw data
//! file is traced back through the process graph to its originating
//! sample, collecting the parameters, factors and characteristics met on
//! every ancestor path.
//!
//! ```bash
//! arc-to-geo convert -p path/to/arc
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod source;
pub mod utils;
