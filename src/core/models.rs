//! Statistics records produced by the analysis pipeline.
//!
//! [`ChatStats`] is the single output structure: per-sender maps, global
//! calendar buckets, event lists, ranked topics, conversation patterns and
//! the generated insights. Field names serialize in camelCase so the JSON
//! document matches what dashboards consume.
//!
//! Per-sender maps are keyed by display name and only ever contain senders
//! that sent at least one parsed message. Use [`ChatStats::participants`]
//! when order matters; it lists senders by first appearance.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::conversation::ConversationPatterns;

const DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Aggregate statistics for one chat export.
///
/// # Example
///
/// ```rust
/// use chatstats::analyze;
///
/// let stats = analyze("[1/15/24, 10:00 AM] Alice: Morning!\n[1/15/24, 10:02 AM] Bob: Hey");
/// assert_eq!(stats.participants, vec!["Alice", "Bob"]);
/// assert_eq!(stats.message_count["Bob"], 1);
/// assert_eq!(stats.total_messages(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStats {
    /// Senders in order of first appearance
    pub participants: Vec<String>,
    pub message_count: BTreeMap<String, usize>,
    pub word_count: BTreeMap<String, usize>,
    /// sender -> word -> occurrences
    pub top_words: BTreeMap<String, BTreeMap<String, usize>>,
    /// sender -> emoji -> occurrences
    pub top_emojis: BTreeMap<String, BTreeMap<String, usize>>,
    /// Raw scores in message order
    pub sentiment_scores: BTreeMap<String, Vec<f64>>,
    pub avg_sentiment_scores: BTreeMap<String, f64>,
    pub affectionate_words_count: BTreeMap<String, usize>,
    pub profanity_count: BTreeMap<String, usize>,
    /// Only senders with at least one question
    pub question_count: BTreeMap<String, usize>,
    /// Unique words / total words, in `[0, 1]`
    pub vocabulary_richness: BTreeMap<String, f64>,
    /// Only senders credited with at least one start
    pub conversation_starters: BTreeMap<String, usize>,
    /// Running mean reply delay in milliseconds
    pub average_response_time: BTreeMap<String, f64>,
    /// Number of replies behind each average
    pub response_rates: BTreeMap<String, usize>,
    pub response_times_by_sender_pair: Vec<PairResponseTime>,
    pub response_time_history: Vec<ResponseTimeEntry>,
    pub response_gaps: BTreeMap<String, Vec<ResponseGap>>,
    pub chattiness_by_hour: BTreeMap<String, BTreeMap<u32, usize>>,
    pub daily_activity: BTreeMap<String, BTreeMap<String, usize>>,
    /// sender -> weekday (0 = Sunday) -> count
    pub weekday_activity: BTreeMap<String, BTreeMap<u32, usize>>,
    /// Topic mentions per sender, in order of first mention
    pub topics_by_sender: BTreeMap<String, Vec<TopicCount>>,
    pub engagement_stats: BTreeMap<String, EngagementStats>,
    pub messages_by_day: BTreeMap<String, usize>,
    pub messages_by_hour: BTreeMap<u32, usize>,
    pub messages_by_weekday: BTreeMap<u32, usize>,
    pub messages_by_month: BTreeMap<String, usize>,
    pub daily_sentiment: BTreeMap<String, f64>,
    pub message_length_over_time: Vec<LengthEntry>,
    pub top_topics: Vec<TopicCount>,
    pub first_date: NaiveDateTime,
    pub last_date: NaiveDateTime,
    pub conversation_patterns: ConversationPatterns,
    pub ai_insights: Vec<String>,
    /// The analyzed messages. Not serialized; see
    /// [`OutputConfig::include_messages`](crate::config::OutputConfig::include_messages).
    #[serde(skip)]
    pub messages: Vec<Message>,
}

/// Mean reply delay for one ordered `(respondingTo, sender)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairResponseTime {
    pub responding_to: String,
    pub sender: String,
    /// Milliseconds
    pub average_time: f64,
    pub count: usize,
}

/// One reply under the response ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeEntry {
    /// `YYYY-MM-DD` of the reply
    pub date: String,
    pub sender: String,
    pub responding_to: String,
    /// Milliseconds
    pub time: i64,
}

/// One reply at or above the response ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseGap {
    pub date: String,
    pub responding_to: String,
    /// Milliseconds
    pub gap_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthEntry {
    pub date: String,
    pub sender: String,
    /// Characters
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

impl TopicCount {
    pub fn new(topic: impl Into<String>, count: usize) -> Self {
        Self {
            topic: topic.into(),
            count,
        }
    }
}

/// How regularly a sender shows up over the life of the chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementStats {
    pub total_messages: usize,
    /// Distinct calendar days with at least one message
    pub days_active: usize,
    /// `days_active / total span days`, 0 when the chat spans no full day
    pub active_ratio: f64,
    pub average_messages_per_active_day: f64,
}

impl ChatStats {
    /// Number of analyzed messages.
    pub fn total_messages(&self) -> usize {
        self.message_count.values().sum()
    }

    /// `true` if no message was analyzed.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Whole days between the first and last message, rounded up.
    pub fn total_span_days(&self) -> u64 {
        let span_ms = (self.last_date - self.first_date).num_milliseconds().max(0);
        (span_ms as f64 / DAY_MS).ceil() as u64
    }

    /// Mean message length in characters for `sender`.
    pub fn average_message_length(&self, sender: &str) -> Option<f64> {
        let count = *self.message_count.get(sender)?;
        let total: usize = self
            .message_length_over_time
            .iter()
            .filter(|entry| entry.sender == sender)
            .map(|entry| entry.length)
            .sum();
        Some(total as f64 / count.max(1) as f64)
    }

    /// Total emojis sent by `sender`.
    pub fn emoji_total(&self, sender: &str) -> usize {
        self.top_emojis
            .get(sender)
            .map(|table| table.values().sum())
            .unwrap_or(0)
    }
}
