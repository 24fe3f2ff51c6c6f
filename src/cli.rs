//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)
//!
//! ```rust
//! use clap::Parser;
//! use chatstats::cli::{Args, OutputFormat};
//!
//! let args = Args::parse_from(["chatstats", "chat.txt", "-f", "csv", "--date-order", "mdy"]);
//! assert_eq!(args.format, OutputFormat::Csv);
//! assert_eq!(args.output_path(), "chat_stats.csv");
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalyzerConfig, DateOrder, OutputConfig};
use crate::core::filter::FilterConfig;
use crate::error::Result;

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_stats.json";

/// Analyze a WhatsApp chat export: per-participant statistics,
/// conversation patterns and insights.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats \"WhatsApp Chat.txt\"
    chatstats chat.txt -f text -o report.txt
    chatstats chat.txt --after 2024-01-01 --before 2024-06-30
    chatstats chat.txt --date-order mdy --response-ceiling-hours 3
    chatstats chat.txt -f jsonl -o messages.jsonl")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// JSON file with analyzer thresholds
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// JSON file replacing some or all lexicon tables
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<String>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Date component order: auto, dmy or mdy
    #[arg(long, value_name = "ORDER")]
    pub date_order: Option<DateOrder>,

    /// Replies slower than this count as response gaps
    #[arg(long, value_name = "HOURS")]
    pub response_ceiling_hours: Option<u64>,

    /// Embed parsed messages in JSON output
    #[arg(long)]
    pub include_messages: bool,

    /// Write compact JSON
    #[arg(long)]
    pub compact: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Output path, with the extension switched to match `--format` when
    /// the default path is used.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let format: crate::format::OutputFormat = self.format.into();
        format!("chat_stats.{}", format.extension())
    }

    /// Builds the analyzer config: file first, then command-line overrides.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)?,
            None => AnalyzerConfig::new(),
        };
        if let Some(order) = self.date_order {
            config = config.with_date_order(order);
        }
        if let Some(hours) = self.response_ceiling_hours {
            config = config.with_response_ceiling_hours(hours);
        }
        config.validate()?;
        Ok(config)
    }

    /// Builds the date-window filter from `--after` / `--before`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(after) = &self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }

    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.include_messages {
            config = config.with_messages();
        }
        if self.compact {
            config = config.compact();
        }
        config
    }
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - full statistics document (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - one enriched message per line
/// - [`Csv`](OutputFormat::Csv) - one row per participant
/// - [`Text`](OutputFormat::Text) - readable report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Statistics as JSON (default)
    #[default]
    Json,

    /// JSON Lines - one message per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// Per-participant summary with semicolon delimiter
    Csv,

    /// Plain-text report with insights
    #[value(alias = "txt")]
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Text => crate::format::OutputFormat::Text,
        }
    }
}
