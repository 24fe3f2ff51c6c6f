//! # Chatstats
//!
//! A Rust library for turning WhatsApp chat exports into per-participant
//! statistics, conversation patterns and short natural-language insights.
//!
//! ## Overview
//!
//! The pipeline has five stages, each usable on its own:
//! - **Line parser** ([`parser`]) reads export text into [`Message`] records,
//!   folding continuation lines and dropping media and system lines
//! - **Tokenizer** ([`tokenizer`]) attaches words, emojis and a sentiment
//!   score to every message
//! - **Accumulator** ([`core::accumulator`]) folds the messages into
//!   [`ChatStats`] in one pass
//! - **Conversation segmenter** ([`core::conversation`]) splits the timeline
//!   at long silences
//! - **Insight generator** ([`core::insights`]) runs an ordered battery of
//!   rules over the finished statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! let export = "\
//! [5/12/2023, 9:30:12 AM] Alice: Good morning! How are you today? 😊
//! [5/12/2023, 9:31:45 AM] Bob: I'm doing well, thanks for asking! ☕
//! [5/12/2023, 9:32:20 AM] Alice: Want to grab lunch later?";
//!
//! let stats = Analyzer::new().analyze_str(export);
//!
//! assert_eq!(stats.participants, vec!["Alice", "Bob"]);
//! assert_eq!(stats.message_count["Alice"], 2);
//! assert_eq!(stats.question_count["Alice"], 2);
//! for insight in &stats.ai_insights {
//!     println!("{insight}");
//! }
//! ```
//!
//! ## Reading files and writing results
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::prelude::*;
//!
//! let analyzer = Analyzer::new()
//!     .with_filter(FilterConfig::new().with_date_from("2024-01-01")?);
//! let stats = analyzer.analyze_file("WhatsApp Chat.txt")?;
//!
//! write_to_format(&stats, "stats.json", OutputFormat::Json, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`analyzer`] - [`Analyzer`] pipeline facade and [`analyze`]
//! - [`parser`] - [`ChatParser`](parser::ChatParser) and [`render_export`](parser::render_export)
//! - [`parsing`] - header grammar and date-order detection
//! - [`tokenizer`], [`emoji`], [`sentiment`], [`lexicon`] - per-message features
//! - [`core`] - statistics, conversations, insights, filtering and writers
//! - [`config`] - [`AnalyzerConfig`](config::AnalyzerConfig), [`OutputConfig`](config::OutputConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - [`ChatStatsError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analyzer;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod emoji;
pub mod error;
pub mod format;
pub mod lexicon;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod sentiment;
pub mod tokenizer;

// Re-export the main types at the crate root for convenience
pub use analyzer::{Analyzer, analyze};
pub use core::models::ChatStats;
pub use error::{ChatStatsError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::analyzer::{Analyzer, analyze};
    pub use crate::error::{ChatStatsError, Result};

    pub use crate::config::{AnalyzerConfig, DateOrder, OutputConfig};
    pub use crate::lexicon::{Lexicon, Topic};
    pub use crate::parser::ChatParser;
    pub use crate::sentiment::{AfinnScorer, SentimentScorer};

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::insights::{DEFAULT_RULES, InsightContext, InsightRule};
    pub use crate::core::models::ChatStats;

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
