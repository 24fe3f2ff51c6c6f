//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::Message;
use crate::config::OutputConfig;
use crate::core::models::ChatStats;
use crate::error::Result;

/// Statistics document with the analyzed messages attached.
#[derive(Serialize)]
struct StatsWithMessages<'a> {
    #[serde(flatten)]
    stats: &'a ChatStats,
    messages: &'a [Message],
}

/// Writes statistics to a JSON file.
///
/// # Format
/// ```json
/// {
///   "participants": ["Alice", "Bob"],
///   "messageCount": {"Alice": 14, "Bob": 14},
///   ...
///   "aiInsights": ["..."]
/// }
/// ```
pub fn write_json(stats: &ChatStats, output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(stats, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts statistics to a JSON string.
///
/// Same document as [`write_json`]. With
/// [`include_messages`](OutputConfig::include_messages) a `messages` array
/// is appended.
pub fn to_json(stats: &ChatStats, config: &OutputConfig) -> Result<String> {
    let json = match (config.include_messages, config.pretty) {
        (true, true) => serde_json::to_string_pretty(&StatsWithMessages {
            stats,
            messages: &stats.messages,
        })?,
        (true, false) => serde_json::to_string(&StatsWithMessages {
            stats,
            messages: &stats.messages,
        })?,
        (false, true) => serde_json::to_string_pretty(stats)?,
        (false, false) => serde_json::to_string(stats)?,
    };
    Ok(json)
}
