//! Line parser for WhatsApp TXT exports.
//!
//! [`ChatParser`] turns raw export text into an ordered `Vec<Message>`:
//!
//! - a timestamped `Sender: text` line starts a new message
//! - a line without a timestamp continues the previous message (joined with `\n`)
//! - blank lines, "media omitted" placeholders and timestamped lines without a
//!   sender (system notices) are dropped
//! - headers whose date or time is out of range are dropped
//!
//! Parsing never fails; garbage in gives an empty vector out.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::ChatParser;
//!
//! let text = "\
//! [5/12/2023, 9:30:12 AM] Alice: Good morning!
//! and a second line
//! [5/12/2023, 9:31:45 AM] Bob: Morning ☕
//! [5/12/2023, 9:32:00 AM] Bob: <Media omitted>";
//!
//! let messages = ChatParser::new().parse_str(text);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].content, "Good morning!\nand a second line");
//! assert_eq!(messages[1].emojis, vec!["☕"]);
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Message;
use crate::config::DateOrder;
use crate::error::{ChatStatsError, Result};
use crate::parsing::whatsapp::{
    detect_date_order, is_media_omitted, split_header, split_sender,
};
use crate::tokenizer::Tokenizer;

/// Parser for WhatsApp TXT exports.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    tokenizer: Tokenizer,
    date_order: DateOrder,
}

/// Line counts gathered while folding an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LineTally {
    media: usize,
    system: usize,
    invalid_date: usize,
    orphaned: usize,
}

impl ChatParser {
    /// Creates a parser with the built-in lexicon, default scorer and
    /// auto-detected date order.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    pub fn name(&self) -> &'static str {
        "WhatsApp"
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| ChatStatsError::utf8(path, e))?;
        Ok(self.parse_str(&text))
    }

    /// Parses export text already in memory.
    pub fn parse_str(&self, text: &str) -> Vec<Message> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let order = self.resolve_date_order(&lines);
        let (messages, tally) = fold_lines(&lines, order);

        debug!(
            messages = messages.len(),
            media = tally.media,
            system = tally.system,
            invalid_date = tally.invalid_date,
            orphaned = tally.orphaned,
            date_order = %order,
            "parsed export"
        );

        messages
            .into_iter()
            .map(|message| self.tokenizer.enrich(message))
            .collect()
    }

    fn resolve_date_order(&self, lines: &[&str]) -> DateOrder {
        match self.date_order {
            DateOrder::Auto => detect_date_order(
                lines
                    .iter()
                    .filter(|line| !is_media_omitted(line))
                    .filter_map(|line| split_header(line))
                    .map(|h| (h.first, h.second)),
            ),
            fixed => fixed,
        }
    }
}

/// Folds lines into bare messages (no derived features yet).
fn fold_lines(lines: &[&str], order: DateOrder) -> (Vec<Message>, LineTally) {
    let mut messages: Vec<Message> = Vec::new();
    let mut tally = LineTally::default();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if is_media_omitted(line) {
            tally.media += 1;
            continue;
        }

        let Some(header) = split_header(line) else {
            match messages.last_mut() {
                Some(last) => {
                    last.content.push('\n');
                    last.content.push_str(line);
                }
                None => tally.orphaned += 1,
            }
            continue;
        };

        let Some((sender, content)) = split_sender(header.rest) else {
            tally.system += 1;
            continue;
        };

        match header.timestamp(order) {
            Some(timestamp) => messages.push(Message::new(timestamp, sender, content)),
            None => tally.invalid_date += 1,
        }
    }

    (messages, tally)
}

/// Writes messages back out as a day-first, 24-hour export.
///
/// Parsing the result with [`DateOrder::DayFirst`] reproduces the same
/// messages, provided no content line looks like a header, is blank, or
/// contains a media placeholder.
///
/// ```rust
/// use chatstats::config::DateOrder;
/// use chatstats::parser::{ChatParser, render_export};
///
/// let parser = ChatParser::new().with_date_order(DateOrder::DayFirst);
/// let messages = parser.parse_str("13/05/2023, 08:15 - Alice: Hi\nthere");
/// let text = render_export(&messages);
/// assert_eq!(text, "[13/05/2023, 08:15:00] Alice: Hi\nthere\n");
/// assert_eq!(parser.parse_str(&text), messages);
/// ```
pub fn render_export(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&format!(
            "[{}] {}: {}\n",
            message.timestamp.format("%d/%m/%Y, %H:%M:%S"),
            message.sender,
            message.content
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const SAMPLE: &str = "\
[5/12/2023, 9:30:12 AM] Alice: Good morning! How are you today? 😊
[5/12/2023, 9:31:45 AM] Bob: I'm doing well, thanks for asking! ☕
[5/13/2023, 8:15:30 AM] Alice: Thanks for lunch yesterday";

    #[test]
    fn test_parse_month_first_detected() {
        let messages = ChatParser::new().parse_str(SAMPLE);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].timestamp.month(), 5);
        assert_eq!(messages[0].timestamp.day(), 12);
        assert_eq!(messages[2].timestamp.day(), 13);
        assert_eq!(messages[2].timestamp.hour(), 8);
    }

    #[test]
    fn test_forced_day_first_discards_invalid_month() {
        let messages = ChatParser::new()
            .with_date_order(DateOrder::DayFirst)
            .parse_str(SAMPLE);
        // 5/13 has no 13th month
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].timestamp.month(), 12);
    }

    #[test]
    fn test_continuation_lines_joined() {
        let text = "15/01/2024, 10:30 - Alice: first\nsecond line\n\nthird line\n15/01/2024, 10:31 - Bob: ok";
        let messages = ChatParser::new().parse_str(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "first\nsecond line\nthird line");
        assert_eq!(messages[0].words, vec!["first", "second", "line", "third", "line"]);
    }

    #[test]
    fn test_leading_continuation_dropped() {
        let messages = ChatParser::new().parse_str("orphan line\n15/01/2024, 10:30 - Alice: hi there");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hi there");
    }

    #[test]
    fn test_media_and_system_lines_dropped() {
        let text = "\
15/01/2024, 10:00 - Messages and calls are end-to-end encrypted.
15/01/2024, 10:01 - Alice: <Media omitted>
15/01/2024, 10:02 - Bob: image omitted
15/01/2024, 10:03 - Bob: real message";
        let messages = ChatParser::new().parse_str(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "Bob");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "15/01/2024, 10:30 - Alice: hello\r\nworld\r\n";
        let messages = ChatParser::new().parse_str(text);
        assert_eq!(messages[0].content, "hello\nworld");
    }

    #[test]
    fn test_two_digit_year_normalized() {
        let messages = ChatParser::new().parse_str("[15/1/99, 10:00] A: x");
        assert_eq!(messages[0].timestamp.year(), 2099);
    }

    #[test]
    fn test_garbage_yields_empty() {
        assert!(ChatParser::new().parse_str("").is_empty());
        assert!(ChatParser::new().parse_str("not\na\nchat").is_empty());
    }

    #[test]
    fn test_parse_file_and_utf8_error() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("chat.txt");
        std::fs::write(&good, SAMPLE).unwrap();
        assert_eq!(ChatParser::new().parse(&good).unwrap().len(), 3);

        let bad = dir.path().join("bad.txt");
        std::fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();
        let err = ChatParser::new().parse(&bad).unwrap_err();
        assert!(err.to_string().contains("bad.txt"));

        let missing = ChatParser::new().parse(&dir.path().join("nope.txt")).unwrap_err();
        assert!(missing.is_io());
    }

    #[test]
    fn test_render_export_round_trip() {
        let parser = ChatParser::new().with_date_order(DateOrder::DayFirst);
        let messages = parser.parse_str(SAMPLE.replace("5/13/", "5/11/").as_str());
        let rendered = render_export(&messages);
        assert_eq!(parser.parse_str(&rendered), messages);
    }
}
