//! Configuration types for the analyzer and output writers.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`AnalyzerConfig`] - thresholds used by the accumulator, segmenter and insight rules
//! - [`DateOrder`] - how ambiguous `a/b/yy` dates are read
//! - [`OutputConfig`] - writer options
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{AnalyzerConfig, DateOrder};
//!
//! let config = AnalyzerConfig::new()
//!     .with_response_ceiling_hours(3)
//!     .with_date_order(DateOrder::MonthFirst);
//!
//! assert_eq!(config.response_ceiling_ms(), 3 * 60 * 60 * 1000);
//! ```

use std::fmt;
#[cfg(feature = "json-output")]
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChatStatsError, Result};

const HOUR_SECS: u64 = 60 * 60;

/// How the two leading date components of an export line are interpreted.
///
/// WhatsApp writes dates in the phone's locale, so `5/12/23` is the 5th of
/// December in most of the world and the 12th of May in the US.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// Inspect the export and pick whichever order keeps every date valid.
    #[default]
    Auto,
    /// `D/M/Y`
    DayFirst,
    /// `M/D/Y`
    MonthFirst,
}

impl DateOrder {
    /// Returns all supported names (including aliases).
    pub fn all_names() -> &'static [&'static str] {
        &["auto", "dmy", "day-first", "mdy", "month-first"]
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::Auto => write!(f, "auto"),
            DateOrder::DayFirst => write!(f, "D/M/Y"),
            DateOrder::MonthFirst => write!(f, "M/D/Y"),
        }
    }
}

impl FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DateOrder::Auto),
            "dmy" | "day-first" | "day_first" => Ok(DateOrder::DayFirst),
            "mdy" | "month-first" | "month_first" => Ok(DateOrder::MonthFirst),
            _ => Err(format!(
                "Unknown date order: '{}'. Expected one of: {}",
                s,
                DateOrder::all_names().join(", ")
            )),
        }
    }
}

/// Thresholds for the statistics pass, conversation segmentation and insights.
///
/// All durations are stored in whole seconds so the struct round-trips
/// through JSON config files unchanged.
///
/// # Example
///
/// ```rust
/// use chatstats::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.conversation_gap_secs, 12 * 60 * 60);
/// assert_eq!(config.response_ceiling_secs, 6 * 60 * 60);
/// assert_eq!(config.top_topics, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Inactivity gap that ends a conversation and marks the next message
    /// as a conversation starter (default: 12h).
    pub conversation_gap_secs: u64,

    /// Replies at or above this delay count as response gaps instead of
    /// response times (default: 6h).
    pub response_ceiling_secs: u64,

    /// Gap after which a message counts as reconnecting after a long break
    /// (default: 24h).
    pub long_break_secs: u64,

    /// How many topics are kept in the ranked topic list (default: 15).
    pub top_topics: usize,

    /// Date component order (default: auto-detect).
    pub date_order: DateOrder,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            conversation_gap_secs: 12 * HOUR_SECS,
            response_ceiling_secs: 6 * HOUR_SECS,
            long_break_secs: 24 * HOUR_SECS,
            top_topics: 15,
            date_order: DateOrder::Auto,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversation inactivity gap in hours.
    #[must_use]
    pub fn with_conversation_gap_hours(mut self, hours: u64) -> Self {
        self.conversation_gap_secs = hours.saturating_mul(HOUR_SECS);
        self
    }

    /// Sets the response-time ceiling in hours.
    #[must_use]
    pub fn with_response_ceiling_hours(mut self, hours: u64) -> Self {
        self.response_ceiling_secs = hours.saturating_mul(HOUR_SECS);
        self
    }

    /// Sets the long-break threshold in hours.
    #[must_use]
    pub fn with_long_break_hours(mut self, hours: u64) -> Self {
        self.long_break_secs = hours.saturating_mul(HOUR_SECS);
        self
    }

    /// Sets how many topics are ranked.
    #[must_use]
    pub fn with_top_topics(mut self, limit: usize) -> Self {
        self.top_topics = limit;
        self
    }

    /// Sets the date component order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Conversation gap in milliseconds.
    pub fn conversation_gap_ms(&self) -> i64 {
        secs_to_ms(self.conversation_gap_secs)
    }

    /// Response ceiling in milliseconds.
    pub fn response_ceiling_ms(&self) -> i64 {
        secs_to_ms(self.response_ceiling_secs)
    }

    /// Long-break threshold in milliseconds.
    pub fn long_break_ms(&self) -> i64 {
        secs_to_ms(self.long_break_secs)
    }

    /// Checks that every duration threshold is positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("conversation_gap_secs", self.conversation_gap_secs),
            ("response_ceiling_secs", self.response_ceiling_secs),
            ("long_break_secs", self.long_break_secs),
        ] {
            if value == 0 {
                return Err(ChatStatsError::invalid_config(format!(
                    "{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }

    /// Parses a JSON config. Missing fields keep their defaults.
    #[cfg(feature = "json-output")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON config file.
    #[cfg(feature = "json-output")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

fn secs_to_ms(secs: u64) -> i64 {
    i64::try_from(secs.saturating_mul(1000)).unwrap_or(i64::MAX)
}

/// Options for the output writers.
///
/// # Example
///
/// ```rust
/// use chatstats::config::OutputConfig;
///
/// let config = OutputConfig::new().with_messages().compact();
/// assert!(config.include_messages);
/// assert!(!config.pretty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output (default: true)
    pub pretty: bool,

    /// Embed the parsed messages in the JSON statistics document (default: false)
    pub include_messages: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_messages: false,
        }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Embeds the parsed messages in JSON output.
    #[must_use]
    pub fn with_messages(mut self) -> Self {
        self.include_messages = true;
        self
    }

    /// Writes single-line JSON.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}
