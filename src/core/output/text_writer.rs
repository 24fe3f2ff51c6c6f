//! Plain-text report writer.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;

use crate::core::insights::readable_duration;
use crate::core::models::ChatStats;
use crate::error::Result;

/// Writes a human-readable report to a file.
pub fn write_text(stats: &ChatStats, output_path: &str) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(to_text(stats).as_bytes())?;
    Ok(())
}

/// Renders the report: period, per-sender lines, top topics, conversation
/// summary and insights.
///
/// ```rust
/// use chatstats::analyze;
/// use chatstats::core::output::to_text;
///
/// let report = to_text(&analyze("[1/15/24, 10:00 AM] Alice: hi\n[1/15/24, 10:01 AM] Bob: hey"));
/// assert!(report.contains("Messages: 2 from 2 participants"));
/// assert!(report.contains("- Alice is the most active participant"));
/// ```
pub fn to_text(stats: &ChatStats) -> String {
    let mut out = String::new();
    section(&mut out, "Chat statistics");

    if stats.is_empty() {
        out.push_str("No messages found.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "Period: {} to {} ({} days)",
        stats.first_date.format("%Y-%m-%d %H:%M"),
        stats.last_date.format("%Y-%m-%d %H:%M"),
        stats.total_span_days()
    );
    let _ = writeln!(
        out,
        "Messages: {} from {} participants",
        stats.total_messages(),
        stats.participants.len()
    );

    out.push('\n');
    section(&mut out, "Participants");
    for sender in &stats.participants {
        let messages = stats.message_count.get(sender).copied().unwrap_or(0);
        let words = stats.word_count.get(sender).copied().unwrap_or(0);
        let sentiment = stats.avg_sentiment_scores.get(sender).copied().unwrap_or(0.0);
        let _ = write!(
            out,
            "{sender}: {messages} messages, {words} words, {} emojis, sentiment {sentiment:.2}",
            stats.emoji_total(sender)
        );
        if let Some(ms) = stats.average_response_time.get(sender) {
            let _ = write!(out, ", replies in {}", readable_duration(*ms));
        }
        out.push('\n');
    }

    if !stats.top_topics.is_empty() {
        out.push('\n');
        section(&mut out, "Top topics");
        let topics: Vec<String> = stats
            .top_topics
            .iter()
            .map(|t| format!("{} ({})", t.topic, t.count))
            .collect();
        let _ = writeln!(out, "{}", topics.join(", "));
    }

    let patterns = &stats.conversation_patterns;
    if patterns.total_conversations > 0 {
        out.push('\n');
        section(&mut out, "Conversations");
        let _ = writeln!(
            out,
            "{} conversations, {:.1} messages and {} on average, {:.0}% with several participants",
            patterns.total_conversations,
            patterns.average_length,
            readable_duration(patterns.average_duration),
            patterns.multi_participant_ratio * 100.0
        );
    }

    if !stats.ai_insights.is_empty() {
        out.push('\n');
        section(&mut out, "Insights");
        for insight in &stats.ai_insights {
            let _ = writeln!(out, "- {insight}");
        }
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}\n{}", "=".repeat(title.chars().count()));
}
