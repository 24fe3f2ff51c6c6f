//! Integration tests for the full analysis pipeline on the bundled sample dialogue.

use chatstats::config::{AnalyzerConfig, DateOrder};
use chatstats::parser::render_export;
use chatstats::prelude::*;
use chrono::{Datelike, Timelike};

const SAMPLE: &str = include_str!("fixtures/sample_chat.txt");

fn sample_stats() -> ChatStats {
    Analyzer::new().analyze_str(SAMPLE)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_sample_parses_every_line() {
    let messages = ChatParser::new().parse_str(SAMPLE);
    assert_eq!(messages.len(), 28);
    assert!(messages.windows(2).all(|w| w[0].sender != w[1].sender));

    let first = &messages[0];
    assert_eq!(first.sender, "Alice");
    assert_eq!(first.content, "Good morning! How are you today? 😊");
    assert_eq!(first.emojis, vec!["😊"]);
    assert_eq!(first.timestamp.month(), 5);
    assert_eq!(first.timestamp.day(), 12);
    assert_eq!(first.timestamp.hour(), 9);

    // 12:50:22 PM stays at noon
    assert_eq!(messages[10].timestamp.hour(), 12);
}

#[test]
fn test_sample_month_first_is_detected() {
    let auto = ChatParser::new().parse_str(SAMPLE);
    let forced = ChatParser::new()
        .with_date_order(DateOrder::MonthFirst)
        .parse_str(SAMPLE);
    assert_eq!(auto, forced);
}

#[test]
fn test_sample_render_roundtrip() {
    let parser = ChatParser::new();
    let messages = parser.parse_str(SAMPLE);
    let rendered = render_export(&messages);
    let reparsed = parser
        .with_date_order(DateOrder::DayFirst)
        .parse_str(&rendered);
    assert_eq!(reparsed, messages);
}

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn test_sample_message_counts() {
    let stats = sample_stats();
    assert_eq!(stats.participants, vec!["Alice", "Bob"]);
    assert_eq!(stats.message_count["Alice"], 14);
    assert_eq!(stats.message_count["Bob"], 14);
    assert_eq!(stats.total_messages(), 28);
    assert_eq!(stats.question_count["Alice"], 8);
    assert_eq!(stats.question_count["Bob"], 8);
}

#[test]
fn test_sample_date_range() {
    let stats = sample_stats();
    assert_eq!(stats.first_date.day(), 12);
    assert_eq!(stats.last_date.day(), 14);
    assert_eq!(stats.total_span_days(), 3);
    assert_eq!(stats.messages_by_day.len(), 3);
    assert_eq!(stats.messages_by_day["2023-05-12"], 12);
    assert_eq!(stats.messages_by_day["2023-05-13"], 8);
    assert_eq!(stats.messages_by_day["2023-05-14"], 8);
    assert_eq!(stats.messages_by_month["2023-05"], 28);
}

#[test]
fn test_sample_response_times() {
    let stats = sample_stats();
    assert!(stats.average_response_time["Alice"] > 0.0);
    assert!(stats.average_response_time["Bob"] > 0.0);

    // The two overnight replies from Alice exceed the 6h ceiling.
    assert_eq!(stats.response_rates["Bob"], 14);
    assert_eq!(stats.response_rates["Alice"], 11);
    assert_eq!(stats.response_gaps["Alice"].len(), 2);
    assert!(!stats.response_gaps.contains_key("Bob"));
    assert_eq!(stats.response_time_history.len(), 25);
}

#[test]
fn test_sample_conversation_starters() {
    let stats = sample_stats();
    // First message plus the first message of each later day.
    assert_eq!(stats.conversation_starters["Alice"], 3);
    assert_eq!(stats.conversation_starters.get("Bob").copied().unwrap_or(0), 0);

    let patterns = &stats.conversation_patterns;
    assert_eq!(patterns.total_conversations, 3);
    assert!((patterns.multi_participant_ratio - 1.0).abs() < f64::EPSILON);
    assert_eq!(patterns.conversations[0].message_count, 12);
    assert_eq!(patterns.conversations[0].starter, "Alice");
}

#[test]
fn test_sample_emojis_and_topics() {
    let stats = sample_stats();
    assert_eq!(stats.emoji_total("Alice"), 7);
    assert_eq!(stats.emoji_total("Bob"), 3);
    assert_eq!(stats.top_emojis["Alice"]["❤️"], 2);
    assert!(stats.top_topics.iter().any(|t| t.topic == "Food"));
}

#[test]
fn test_sample_engagement() {
    let stats = sample_stats();
    let alice = &stats.engagement_stats["Alice"];
    assert_eq!(alice.total_messages, 14);
    assert_eq!(alice.days_active, 3);
    assert!((alice.active_ratio - 1.0).abs() < f64::EPSILON);
}

// ============================================================================
// Insights
// ============================================================================

#[test]
fn test_sample_insights() {
    let stats = sample_stats();
    let insights = &stats.ai_insights;
    assert_eq!(
        insights[0],
        "Alice is the most active participant, sending 14 messages (50.0% of all messages)."
    );
    assert!(insights.iter().any(|i| i.starts_with("Alice initiates most conversations (3 times")));
    assert!(
        insights
            .iter()
            .any(|i| i.starts_with("The chat breaks into 3 conversations averaging 9.3 messages"))
    );
    assert!(insights.iter().any(|i| i.contains("asks the most questions")));
}

#[test]
fn test_sample_insights_exact_order() {
    let expected = [
        "Alice is the most active participant, sending 14 messages (50.0% of all messages).",
        "Bob responds the quickest, with an average response time of 3 minutes.",
        "Alice takes longer to respond, averaging 19 minutes.",
        "Alice initiates most conversations (3 times, 100.0% of all conversation starts).",
        "Alice uses more positive language overall, with sentiment score of 2.57.",
        "Bob tends to use less positive language, with sentiment score of 1.79.",
        "Bob uses the most diverse vocabulary with 56 unique words (82.4% vocabulary richness).",
        "The most discussed topic is \"Food\" with 6 mentions.",
        "Alice appears to be a morning person, most active around 10:00.",
        "Bob appears to be a morning person, most active around 10:00.",
        "Over 3 days, an average of 9.3 messages were exchanged daily.",
        "Alice's response time has improved by 93% since the conversation began.",
        "Bob's response time has improved by 25% since the conversation began.",
        "Bob replies fastest to Alice, averaging 3 minutes over 14 replies.",
        "Alice asks the most questions (8 messages with a question mark).",
        "The chat breaks into 3 conversations averaging 9.3 messages and 1.4 hours each (100% with more than one participant).",
        "The chat is most active on Friday with 12 messages.",
    ];
    assert_eq!(sample_stats().ai_insights, expected);
}

#[test]
fn test_insights_are_deterministic() {
    assert_eq!(sample_stats().ai_insights, sample_stats().ai_insights);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_filter_window() {
    let filter = FilterConfig::new()
        .with_date_from("2023-05-13")
        .unwrap()
        .with_date_to("2023-05-13")
        .unwrap();
    let stats = Analyzer::new().with_filter(filter).analyze_str(SAMPLE);
    assert_eq!(stats.total_messages(), 8);
    assert_eq!(stats.first_date.day(), 13);
    assert_eq!(stats.conversation_starters["Alice"], 1);
}

#[test]
fn test_short_conversation_gap() {
    let config = AnalyzerConfig::new().with_conversation_gap_hours(1);
    let stats = Analyzer::new().with_config(config).analyze_str(SAMPLE);
    // 10:23 AM -> 12:50 PM on the first day now splits too.
    assert_eq!(stats.conversation_patterns.total_conversations, 4);
    assert_eq!(stats.conversation_starters["Alice"], 4);
}

#[test]
fn test_longer_response_ceiling_removes_gaps() {
    let config = AnalyzerConfig::new().with_response_ceiling_hours(48);
    let stats = Analyzer::new().with_config(config).analyze_str(SAMPLE);
    assert!(stats.response_gaps.is_empty());
    assert_eq!(stats.response_rates["Alice"], 13);
}

#[test]
fn test_analyze_file_matches_analyze_str() {
    let stats = Analyzer::new()
        .analyze_file("tests/fixtures/sample_chat.txt")
        .unwrap();
    assert_eq!(stats, sample_stats());
}
