//! Core analytics for chatstats.
//!
//! This module contains:
//! - [`models`] - [`ChatStats`] and its nested records
//! - [`accumulator`] - the single-pass statistics fold
//! - [`conversation`] - inactivity-gap segmentation
//! - [`insights`] - the ordered insight rule battery
//! - [`filter`] - date-window scoping
//! - [`output`] - Format writers (JSON, JSONL, CSV, text)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{accumulate, conversation_patterns, generate_insights, DEFAULT_RULES};
//! use chatstats::config::AnalyzerConfig;
//! use chatstats::lexicon::Lexicon;
//! use chatstats::parser::ChatParser;
//!
//! let config = AnalyzerConfig::default();
//! let messages = ChatParser::new().parse_str("15/01/2024, 10:00 - Alice: hi\n15/01/2024, 10:05 - Bob: hey");
//!
//! let mut stats = accumulate(messages, Lexicon::builtin(), &config);
//! stats.conversation_patterns = conversation_patterns(&stats.messages, config.conversation_gap_ms());
//! stats.ai_insights = generate_insights(&stats, DEFAULT_RULES, &config);
//!
//! assert_eq!(stats.conversation_patterns.total_conversations, 1);
//! ```

pub mod accumulator;
pub mod conversation;
pub mod filter;
pub mod insights;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use accumulator::{Accumulator, accumulate};
pub use conversation::{Conversation, ConversationPatterns, conversation_patterns, segment};
pub use filter::{FilterConfig, apply_filters};
pub use insights::{DEFAULT_RULES, InsightContext, InsightRule, generate_insights};
pub use models::{
    ChatStats, EngagementStats, LengthEntry, PairResponseTime, ResponseGap, ResponseTimeEntry,
    TopicCount,
};

// Re-export Message from the crate root
pub use crate::Message;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
pub use output::{to_text, write_text};
