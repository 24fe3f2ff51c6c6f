//! Conversation segmentation.
//!
//! A conversation is a maximal run of consecutive messages in which no
//! two neighbours are further apart than the inactivity gap. Segments
//! partition the message sequence exactly: message counts add up to the
//! input length and segments never overlap.
//!
//! ```rust
//! use chatstats::core::conversation::segment;
//! use chatstats::parser::ChatParser;
//!
//! let messages = ChatParser::new().parse_str("\
//! 15/01/2024, 09:00 - Alice: morning
//! 15/01/2024, 09:05 - Bob: hey
//! 16/01/2024, 20:00 - Bob: still there?");
//!
//! let conversations = segment(&messages, 12 * 60 * 60 * 1000);
//! assert_eq!(conversations.len(), 2);
//! assert_eq!(conversations[0].participants, vec!["Alice", "Bob"]);
//! assert_eq!(conversations[1].starter, "Bob");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::Message;

/// One segment of the chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub message_count: usize,
    /// Distinct senders in order of first message within the segment
    pub participants: Vec<String>,
    /// Sender of the first message
    pub starter: String,
}

impl Conversation {
    fn open(message: &Message) -> Self {
        Self {
            start: message.timestamp,
            end: message.timestamp,
            message_count: 1,
            participants: vec![message.sender.clone()],
            starter: message.sender.clone(),
        }
    }

    fn push(&mut self, message: &Message) {
        self.end = message.timestamp;
        self.message_count += 1;
        if !self.participants.contains(&message.sender) {
            self.participants.push(message.sender.clone());
        }
    }

    /// `end - start` in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    pub fn is_multi_participant(&self) -> bool {
        self.participants.len() > 1
    }
}

/// Aggregate view over all segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPatterns {
    pub total_conversations: usize,
    /// Mean messages per conversation
    pub average_length: f64,
    /// Mean duration in milliseconds
    pub average_duration: f64,
    /// Share of conversations with more than one sender
    pub multi_participant_ratio: f64,
    pub conversations: Vec<Conversation>,
}

impl ConversationPatterns {
    /// Summarises segments. Every mean and ratio is 0 when there are none.
    pub fn from_conversations(conversations: Vec<Conversation>) -> Self {
        let total = conversations.len();
        if total == 0 {
            return Self::default();
        }

        let messages: usize = conversations.iter().map(|c| c.message_count).sum();
        let duration: i64 = conversations.iter().map(Conversation::duration_ms).sum();
        let multi = conversations
            .iter()
            .filter(|c| c.is_multi_participant())
            .count();

        Self {
            total_conversations: total,
            average_length: messages as f64 / total as f64,
            average_duration: duration as f64 / total as f64,
            multi_participant_ratio: multi as f64 / total as f64,
            conversations,
        }
    }
}

/// Splits `messages` wherever consecutive timestamps are more than `gap_ms`
/// apart. The last segment is always closed, even with a single message.
pub fn segment(messages: &[Message], gap_ms: i64) -> Vec<Conversation> {
    let mut conversations = Vec::new();
    let mut current: Option<Conversation> = None;

    for message in messages {
        match current.as_mut() {
            Some(open) if (message.timestamp - open.end).num_milliseconds() <= gap_ms => {
                open.push(message);
            }
            Some(_) => conversations.extend(current.replace(Conversation::open(message))),
            None => current = Some(Conversation::open(message)),
        }
    }

    conversations.extend(current);
    conversations
}

/// Segments `messages` and summarises the result.
pub fn conversation_patterns(messages: &[Message], gap_ms: i64) -> ConversationPatterns {
    ConversationPatterns::from_conversations(segment(messages, gap_ms))
}
