//! WhatsApp TXT export line grammar.
//!
//! A message header looks like one of
//!
//! ```text
//! [5/12/2023, 9:30:12 AM] Alice: Good morning!
//! 12/05/23, 21:30 - Alice: Good morning!
//! 12/05/2023, 21:30 Alice: Good morning!
//! ```
//!
//! The date is `a/b/y` where `a`/`b` are day and month in locale order and
//! `y` has two to four digits. Time has optional seconds and an optional
//! AM/PM marker. Lines that do not start with a timestamp are continuation
//! lines; timestamped lines without `Sender: ` are system notices.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::config::DateOrder;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\x{200E}?\[?([0-9]{1,2})/([0-9]{1,2})/([0-9]{2,4}),? ([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?(?:[ \x{202F}]?([AaPp][Mm]))?\]?",
    )
    .expect("header pattern is valid")
});

static SENDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+): ").expect("sender pattern is valid"));

static MEDIA_OMITTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)media omitted|image omitted|video omitted").expect("media pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// The timestamp fields of a header line plus whatever follows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    /// First date component (day or month, depending on locale)
    pub first: u32,
    /// Second date component
    pub second: u32,
    /// Year, already normalized to four digits
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub seconds: u32,
    pub meridiem: Option<Meridiem>,
    /// Text after the timestamp, trimmed, with an Android ` - ` separator removed
    pub rest: &'a str,
}

impl Header<'_> {
    /// Builds the timestamp, or `None` if any component is out of range.
    pub fn timestamp(&self, order: DateOrder) -> Option<NaiveDateTime> {
        let (day, month) = match order {
            DateOrder::MonthFirst => (self.second, self.first),
            DateOrder::DayFirst | DateOrder::Auto => (self.first, self.second),
        };

        let hour = match self.meridiem {
            None => self.hour,
            Some(_) if self.hour == 0 || self.hour > 12 => return None,
            Some(Meridiem::Am) => self.hour % 12,
            Some(Meridiem::Pm) => self.hour % 12 + 12,
        };

        NaiveDate::from_ymd_opt(self.year, month, day)?.and_hms_opt(hour, self.minute, self.seconds)
    }
}

/// Splits a header line into its timestamp fields and the remainder.
///
/// Returns `None` for continuation lines.
pub fn split_header(line: &str) -> Option<Header<'_>> {
    let caps = HEADER.captures(line)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let mut year = i32::try_from(number(3)?).ok()?;
    if year < 100 {
        year += 2000;
    }

    let meridiem = caps.get(7).map(|m| {
        if m.as_str().eq_ignore_ascii_case("pm") {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    });

    let matched = caps.get(0)?.end();
    let rest = line[matched..].trim();
    let rest = rest.strip_prefix("- ").unwrap_or(rest);

    Some(Header {
        first: number(1)?,
        second: number(2)?,
        year,
        hour: number(4)?,
        minute: number(5)?,
        seconds: number(6).unwrap_or(0),
        meridiem,
        rest,
    })
}

/// Splits `Sender: content`. The sender is everything before the first
/// `": "` and may not itself contain a colon.
pub fn split_sender(rest: &str) -> Option<(&str, &str)> {
    let caps = SENDER.captures(rest)?;
    let whole = caps.get(0)?;
    let sender = caps.get(1)?.as_str().trim();
    if sender.is_empty() {
        return None;
    }
    Some((sender, &rest[whole.end()..]))
}

/// `true` for "media/image/video omitted" placeholder lines.
pub fn is_media_omitted(line: &str) -> bool {
    MEDIA_OMITTED.is_match(line)
}

/// Picks day-first or month-first from the date components of header lines.
///
/// Any first component above 12 can only be a day; any second component
/// above 12 can only be a day too. Without such evidence exports are read
/// day-first.
pub fn detect_date_order<I>(dates: I) -> DateOrder
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut second_is_day = false;
    for (first, second) in dates {
        if first > 12 {
            return DateOrder::DayFirst;
        }
        if second > 12 {
            second_is_day = true;
        }
    }
    if second_is_day {
        DateOrder::MonthFirst
    } else {
        DateOrder::DayFirst
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_split_header_bracketed_us() {
        let h = split_header("[5/12/2023, 9:30:12 AM] Alice: Good morning!").unwrap();
        assert_eq!((h.first, h.second, h.year), (5, 12, 2023));
        assert_eq!((h.hour, h.minute, h.seconds), (9, 30, 12));
        assert_eq!(h.meridiem, Some(Meridiem::Am));
        assert_eq!(h.rest, "Alice: Good morning!");
    }

    #[test]
    fn test_split_header_bare_android() {
        let h = split_header("15/01/24, 21:05 - Bob: hi").unwrap();
        assert_eq!((h.first, h.second, h.year), (15, 1, 2024));
        assert_eq!((h.hour, h.minute, h.seconds), (21, 5, 0));
        assert_eq!(h.meridiem, None);
        assert_eq!(h.rest, "Bob: hi");
    }

    #[test]
    fn test_split_header_narrow_space_and_lrm() {
        let h = split_header("\u{200E}[1/15/24, 10:30:45\u{202F}PM] Alice: x").unwrap();
        assert_eq!(h.meridiem, Some(Meridiem::Pm));
        assert_eq!(h.rest, "Alice: x");
    }

    #[test]
    fn test_split_header_rejects_continuation() {
        assert!(split_header("just some text").is_none());
        assert!(split_header("see you at 5/12").is_none());
        assert!(split_header("  [5/12/2023, 9:30 AM] indented").is_none());
    }

    #[test]
    fn test_timestamp_orders() {
        let h = split_header("[5/12/2023, 9:30:12 AM] Alice: x").unwrap();
        let us = h.timestamp(DateOrder::MonthFirst).unwrap();
        assert_eq!((us.month(), us.day()), (5, 12));
        let eu = h.timestamp(DateOrder::DayFirst).unwrap();
        assert_eq!((eu.month(), eu.day()), (12, 5));
    }

    #[test]
    fn test_timestamp_meridiem() {
        let noon = split_header("[1/1/24, 12:15 PM] A: x").unwrap();
        assert_eq!(noon.timestamp(DateOrder::DayFirst).unwrap().hour(), 12);
        let midnight = split_header("[1/1/24, 12:15 AM] A: x").unwrap();
        assert_eq!(midnight.timestamp(DateOrder::DayFirst).unwrap().hour(), 0);
        let evening = split_header("[1/1/24, 7:15 pm] A: x").unwrap();
        assert_eq!(evening.timestamp(DateOrder::DayFirst).unwrap().hour(), 19);
    }

    #[test]
    fn test_timestamp_invalid_components() {
        let bad_month = split_header("[5/13/2023, 9:30 AM] A: x").unwrap();
        assert!(bad_month.timestamp(DateOrder::DayFirst).is_none());
        let bad_hour = split_header("[1/1/24, 13:00 PM] A: x").unwrap();
        assert!(bad_hour.timestamp(DateOrder::DayFirst).is_none());
        let feb_30 = split_header("30/2/2024, 10:00 - A: x").unwrap();
        assert!(feb_30.timestamp(DateOrder::DayFirst).is_none());
    }

    #[test]
    fn test_split_sender() {
        assert_eq!(split_sender("Alice: hello: world"), Some(("Alice", "hello: world")));
        assert_eq!(split_sender("+91 98765 43210: hi"), Some(("+91 98765 43210", "hi")));
        assert_eq!(split_sender("Messages and calls are end-to-end encrypted."), None);
        assert_eq!(split_sender("Alice:no space"), None);
    }

    #[test]
    fn test_is_media_omitted() {
        assert!(is_media_omitted("[1/1/24, 10:00 AM] Alice: <Media omitted>"));
        assert!(is_media_omitted("image OMITTED"));
        assert!(is_media_omitted("video omitted"));
        assert!(!is_media_omitted("audio omitted"));
    }

    #[test]
    fn test_detect_date_order() {
        assert_eq!(detect_date_order([(5, 12), (5, 13)]), DateOrder::MonthFirst);
        assert_eq!(detect_date_order([(5, 13), (15, 1)]), DateOrder::DayFirst);
        assert_eq!(detect_date_order([(1, 2), (3, 4)]), DateOrder::DayFirst);
        assert_eq!(detect_date_order(std::iter::empty::<(u32, u32)>()), DateOrder::DayFirst);
    }
}
