//! JSON Lines (JSONL) output writer.
//!
//! One enriched message per line: timestamp, sender, content and every
//! derived feature. Useful for feeding messages into other tools without
//! re-parsing the export.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Message;
use crate::error::Result;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2023-05-12T09:30:12","sender":"Alice","content":"Good morning!","emojis":[],"words":["good"],...}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        serde_json::to_writer(&mut writer, msg)?;
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string, one line per message.
pub fn to_jsonl(messages: &[Message]) -> Result<String> {
    let mut output = String::new();
    for msg in messages {
        output.push_str(&serde_json::to_string(msg)?);
        output.push('\n');
    }
    Ok(output)
}
