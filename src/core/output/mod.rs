//! Output format writers.
//!
//! - [`write_json`] / [`to_json`] - the full [`ChatStats`](crate::core::ChatStats) document - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one enriched message per line - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - per-sender summary with `;` delimiter - requires `csv-output` feature
//! - [`write_text`] / [`to_text`] - human-readable report
//!
//! # Choosing a Format
//!
//! | Format | Contains | Use Case |
//! |--------|----------|----------|
//! | JSON | every statistic + insights | dashboards, APIs |
//! | JSONL | parsed messages with features | further processing |
//! | CSV | one row per sender | spreadsheets |
//! | Text | summary + insights | reading |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::output::{write_csv, write_json, write_jsonl, to_text};
//! use chatstats::config::OutputConfig;
//! use chatstats::Analyzer;
//!
//! let stats = Analyzer::new().analyze_file("chat.txt")?;
//!
//! write_json(&stats, "stats.json", &OutputConfig::new())?;
//! write_jsonl(&stats.messages, "messages.jsonl")?;
//! write_csv(&stats, "summary.csv")?;
//! println!("{}", to_text(&stats));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_text, write_text};
