//! CSV output writer.
//!
//! One row per participant with the headline numbers, in participant order.

use std::fs::File;
use std::io::Write;

use crate::core::models::ChatStats;
use crate::error::Result;

const HEADER: [&str; 11] = [
    "Sender",
    "Messages",
    "Words",
    "Emojis",
    "Questions",
    "AvgSentiment",
    "VocabularyRichness",
    "AvgResponseMs",
    "ConversationsStarted",
    "DaysActive",
    "AvgMessageLength",
];

/// Writes the per-sender summary to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sender`, `Messages`, `Words`, `Emojis`, `Questions`,
///   `AvgSentiment`, `VocabularyRichness`, `AvgResponseMs`,
///   `ConversationsStarted`, `DaysActive`, `AvgMessageLength`
/// - Ratios and averages use fixed decimals; missing values are empty
/// - Encoding: UTF-8
pub fn write_csv(stats: &ChatStats, output_path: &str) -> Result<()> {
    let csv = to_csv(stats)?;
    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Converts the per-sender summary to a CSV string.
pub fn to_csv(stats: &ChatStats) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for sender in &stats.participants {
        writer.write_record(build_record(stats, sender))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Build CSV record for a single sender.
fn build_record(stats: &ChatStats, sender: &str) -> Vec<String> {
    let count = |map: &std::collections::BTreeMap<String, usize>| {
        map.get(sender).copied().unwrap_or(0).to_string()
    };

    vec![
        sender.to_string(),
        count(&stats.message_count),
        count(&stats.word_count),
        stats.emoji_total(sender).to_string(),
        count(&stats.question_count),
        stats
            .avg_sentiment_scores
            .get(sender)
            .map(|v| format!("{v:.3}"))
            .unwrap_or_default(),
        stats
            .vocabulary_richness
            .get(sender)
            .map(|v| format!("{v:.3}"))
            .unwrap_or_default(),
        stats
            .average_response_time
            .get(sender)
            .map(|v| format!("{v:.0}"))
            .unwrap_or_default(),
        count(&stats.conversation_starters),
        stats
            .engagement_stats
            .get(sender)
            .map(|e| e.days_active.to_string())
            .unwrap_or_default(),
        stats
            .average_message_length(sender)
            .map(|v| format!("{v:.1}"))
            .unwrap_or_default(),
    ]
}
