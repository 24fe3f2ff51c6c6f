//! Tests for output writers (JSON, JSONL, CSV, text)

use chatstats::config::OutputConfig;
use chatstats::core::output::{to_text, write_csv, write_json, write_jsonl, write_text};
use chatstats::format::{OutputFormat, to_format_string, write_to_format};
use chatstats::{ChatStats, Message, analyze};
use std::fs;
use tempfile::tempdir;

fn sample_stats() -> ChatStats {
    analyze(
        "\
15/01/2024, 10:30 - Alice: Hello; anyone up for pizza?
15/01/2024, 10:31 - Bob: Quotes \"inside\" text 😂
15/01/2024, 10:32 - Alice: Line 1
Line 2
16/01/2024, 09:00 - Bob: Morning ❤️",
    )
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_camel_case_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.json");
        write_json(&sample_stats(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        for key in [
            "participants",
            "messageCount",
            "wordCount",
            "topWords",
            "topEmojis",
            "sentimentScores",
            "avgSentimentScores",
            "vocabularyRichness",
            "conversationStarters",
            "averageResponseTime",
            "responseTimeHistory",
            "chattinessByHour",
            "messagesByDay",
            "messagesByHour",
            "messagesByWeekday",
            "messagesByMonth",
            "dailySentiment",
            "messageLengthOverTime",
            "topTopics",
            "firstDate",
            "lastDate",
            "conversationPatterns",
            "aiInsights",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json.get("messages").is_none());
        assert_eq!(json["messageCount"]["Alice"], 2);
        assert_eq!(json["topEmojis"]["Bob"]["😂"], 1);
    }

    #[test]
    fn test_write_json_with_messages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let config = OutputConfig::new().with_messages();
        write_json(&sample_stats(), path.to_str().unwrap(), &config).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2]["content"], "Line 1\nLine 2");
        assert_eq!(messages[0]["sender"], "Alice");
    }

    #[test]
    fn test_compact_json_is_one_line() {
        let stats = sample_stats();
        let compact = to_format_string(&stats, OutputFormat::Json, &OutputConfig::new().compact())
            .unwrap();
        let pretty = to_format_string(&stats, OutputFormat::Json, &OutputConfig::new()).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.len() > compact.len());

        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_stats_deserialize_back() {
        let stats = sample_stats();
        let json = to_format_string(&stats, OutputFormat::Json, &OutputConfig::new()).unwrap();
        let back: ChatStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.participants, stats.participants);
        assert_eq!(back.message_count, stats.message_count);
        assert_eq!(back.ai_insights, stats.ai_insights);
        assert!(back.messages.is_empty());
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_write_jsonl_one_message_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.jsonl");
        let stats = sample_stats();
        write_jsonl(&stats.messages, path.to_str().unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Message> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(parsed, stats.messages);
    }

    #[test]
    fn test_jsonl_carries_features() {
        let stats = sample_stats();
        let jsonl = to_format_string(&stats, OutputFormat::Jsonl, &OutputConfig::new()).unwrap();
        let first: serde_json::Value = serde_json::from_str(jsonl.lines().next().unwrap()).unwrap();
        assert_eq!(first["words"], serde_json::json!(["anyone", "pizza"]));
        assert!(first.get("sentimentScore").is_some());
        assert!(first.get("affectionateWords").is_some());
    }

    #[test]
    fn test_empty_jsonl() {
        let jsonl =
            to_format_string(&ChatStats::default(), OutputFormat::Jsonl, &OutputConfig::new())
                .unwrap();
        assert!(jsonl.is_empty());
    }
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_rows_per_sender() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_csv(&sample_stats(), path.to_str().unwrap()).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "Sender");
        assert_eq!(&headers[1], "Messages");
        assert_eq!(headers.len(), 11);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Alice");
        assert_eq!(&rows[0][1], "2");
        assert_eq!(&rows[1][0], "Bob");
        assert_eq!(&rows[1][3], "2");
    }

    #[test]
    fn test_csv_quotes_sender_with_delimiter() {
        let stats = analyze("15/01/2024, 10:00 - Team; Ops: deploy done");
        let csv = to_format_string(&stats, OutputFormat::Csv, &OutputConfig::new()).unwrap();
        assert!(csv.contains("\"Team; Ops\";1;"));
    }

    #[test]
    fn test_empty_csv_has_header_only() {
        let csv =
            to_format_string(&ChatStats::default(), OutputFormat::Csv, &OutputConfig::new())
                .unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}

// ============================================================================
// Text Writer Tests
// ============================================================================

mod text_writer_tests {
    use super::*;

    #[test]
    fn test_text_report_sections() {
        let report = to_text(&sample_stats());
        assert!(report.contains("Chat statistics"));
        assert!(report.contains("Messages: 4 from 2 participants"));
        assert!(report.contains("Participants\n============"));
        assert!(report.contains("Alice: 2 messages"));
        assert!(report.contains("Insights\n========"));
    }

    #[test]
    fn test_write_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let stats = sample_stats();
        write_text(&stats, path.to_str().unwrap()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), to_text(&stats));
    }
}

// ============================================================================
// Format Dispatch Tests
// ============================================================================

mod format_dispatch_tests {
    use super::*;

    #[test]
    fn test_write_to_format_each_format() {
        let dir = tempdir().unwrap();
        let stats = sample_stats();
        for format in OutputFormat::all() {
            let path = dir.path().join(format!("out.{}", format.extension()));
            write_to_format(&stats, path.to_str().unwrap(), *format, &OutputConfig::new())
                .unwrap();
            let content = fs::read_to_string(&path).unwrap();
            assert!(!content.is_empty(), "{format} output is empty");
        }
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_to_format(
            &sample_stats(),
            path.to_str().unwrap(),
            OutputFormat::Json,
            &OutputConfig::new(),
        )
        .unwrap_err();
        assert!(err.is_io());
    }
}
