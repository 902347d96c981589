//! Output of the collected records.
//!
//! # Submodules
//!
//! - [`json`]: pretty-printed JSON array of every record
//! - [`csv_file`]: one CSV row per record, with a header
//! - [`console`]: short human-readable preview on stdout
//!
//! # Output Files
//!
//! ```text
//! ./
//! ├── biotech_news.json
//! └── biotech_news.csv
//! ```

pub mod console;
pub mod csv_file;
pub mod json;
