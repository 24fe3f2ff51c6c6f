//! Parsed chat message.
//!
//! A [`Message`] is one logical chat entry: the header line plus any
//! continuation lines folded into `content`, together with everything the
//! tokenizer derives from that content. Messages are built once by the
//! parser and never modified afterwards.
//!
//! # Examples
//!
//! ```
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 5, 12)
//!     .unwrap()
//!     .and_hms_opt(9, 30, 12)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Good morning!");
//!
//! assert_eq!(msg.sender, "Alice");
//! assert_eq!(msg.day_key(), "2023-05-12");
//! assert_eq!(msg.hour(), 9);
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One parsed message with its derived features.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | local date and time exactly as written in the export |
/// | `sender` | display name before the first `": "` |
/// | `content` | body, continuation lines joined with `\n` |
/// | `emojis` | emoji sequences in order of appearance |
/// | `words` | lowercase tokens, stopwords and phone numbers removed |
/// | `affectionate_words` | subset of `words` in the affection table |
/// | `profanity_words` | subset of `words` in the profanity table |
/// | `sentiment_score` | scorer output for the raw `content` |
///
/// Timestamps carry no time zone: day, hour and weekday buckets use the
/// calendar fields as parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub timestamp: NaiveDateTime,
    pub sender: String,
    pub content: String,
    #[serde(default)]
    pub emojis: Vec<String>,
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub affectionate_words: Vec<String>,
    #[serde(default)]
    pub profanity_words: Vec<String>,
    #[serde(default)]
    pub sentiment_score: f64,
}

impl Message {
    /// Creates a message with no derived features.
    ///
    /// Use [`Tokenizer::enrich`](crate::tokenizer::Tokenizer::enrich) to fill
    /// words, emojis and sentiment.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            content: content.into(),
            emojis: Vec::new(),
            words: Vec::new(),
            affectionate_words: Vec::new(),
            profanity_words: Vec::new(),
            sentiment_score: 0.0,
        }
    }

    /// `YYYY-MM-DD`
    pub fn day_key(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// `YYYY-MM`
    pub fn month_key(&self) -> String {
        self.timestamp.format("%Y-%m").to_string()
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Day of week with Sunday = 0.
    pub fn weekday(&self) -> u32 {
        self.timestamp.weekday().num_days_from_sunday()
    }

    /// Content length in characters.
    pub fn length(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_question(&self) -> bool {
        self.content.contains('?')
    }
}
