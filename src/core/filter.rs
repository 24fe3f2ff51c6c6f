//! Scope an analysis to a date window.
//!
//! [`FilterConfig`] holds optional inclusive day bounds and
//! [`apply_filters`] drops messages outside them. Filtering runs on parsed
//! messages before accumulation, so every statistic (including conversation
//! starters and response times) only ever sees the window.
//!
//! # Example
//!
//! ```
//! use chatstats::core::filter::{FilterConfig, apply_filters};
//! use chatstats::parser::ChatParser;
//!
//! # fn main() -> chatstats::Result<()> {
//! let messages = ChatParser::new().parse_str("\
//! 01/01/2024, 12:00 - Alice: Old
//! 15/06/2024, 12:00 - Alice: New");
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content, "New");
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;

use crate::Message;
use crate::error::{ChatStatsError, Result};

/// Inclusive day bounds. Both default to open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep messages on or after this day.
    pub after: Option<NaiveDate>,

    /// Keep messages on or before this day.
    pub before: Option<NaiveDate>,
}

impl FilterConfig {
    /// Creates a filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first day to keep (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_day(date_str)?);
        Ok(self)
    }

    /// Sets the last day to keep (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_day(date_str)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_after(mut self, day: NaiveDate) -> Self {
        self.after = Some(day);
        self
    }

    #[must_use]
    pub fn with_before(mut self, day: NaiveDate) -> Self {
        self.before = Some(day);
        self
    }

    /// Returns `true` if any bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `message` falls inside the window.
    pub fn matches(&self, message: &Message) -> bool {
        let day = message.timestamp.date();
        self.after.is_none_or(|after| day >= after) && self.before.is_none_or(|before| day <= before)
    }
}

fn parse_day(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatStatsError::invalid_date(date_str))
}

/// Keeps the messages inside the window, in order.
///
/// Returns the input unchanged when no bound is set.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
