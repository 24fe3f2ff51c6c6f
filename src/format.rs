//! Output format types for the chatstats library.
//!
//! Library-first format selection that doesn't depend on CLI frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::format::{OutputFormat, to_format_string};
//! use chatstats::config::OutputConfig;
//! use chatstats::analyze;
//!
//! let stats = analyze("[1/15/24, 10:00 AM] Alice: Hello!\n[1/15/24, 10:01 AM] Bob: Hi there!");
//!
//! let csv = to_format_string(&stats, OutputFormat::Csv, &OutputConfig::new())?;
//! assert!(csv.starts_with("Sender;"));
//!
//! let jsonl = to_format_string(&stats, OutputFormat::Jsonl, &OutputConfig::new())?;
//! assert_eq!(jsonl.lines().count(), 2);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use crate::core::models::ChatStats;
use crate::error::ChatStatsError;

/// Output format for analysis results.
///
/// - [`Json`](OutputFormat::Json) - the full statistics document (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - one enriched message per line
/// - [`Csv`](OutputFormat::Csv) - per-sender summary with semicolon delimiter
/// - [`Text`](OutputFormat::Text) - readable report with insights
///
/// # Example
///
/// ```rust
/// use chatstats::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Full [`ChatStats`] document
    #[default]
    Json,

    /// JSON Lines - one message object per line
    ///
    /// Also known as NDJSON.
    Jsonl,

    /// One row per participant, `;` delimited
    Csv,

    /// Plain-text report
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv", "text", "txt"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Csv,
            OutputFormat::Text,
        ]
    }

    /// Feature flag this format needs, if any.
    fn required_feature(self) -> Option<&'static str> {
        match self {
            OutputFormat::Json | OutputFormat::Jsonl => Some("json-output"),
            OutputFormat::Csv => Some("csv-output"),
            OutputFormat::Text => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: OutputFormat) -> ChatStatsError {
    ChatStatsError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            format.required_feature().unwrap_or("default")
        ),
    )
}

/// Writes analysis results to a file in the specified format.
///
/// JSONL writes `stats.messages`; the other formats write the statistics.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    stats: &ChatStats,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatStatsError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(stats, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(&stats.messages, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(stats, path),
        OutputFormat::Text => crate::core::output::write_text(stats, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders analysis results as a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    stats: &ChatStats,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatStatsError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(stats, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(&stats.messages),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(stats),
        OutputFormat::Text => Ok(crate::core::output::to_text(stats)),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
