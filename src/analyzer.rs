//! End-to-end analysis pipeline.
//!
//! [`Analyzer`] wires the stages together: raw text is parsed into
//! messages, scoped by the date filter, folded into [`ChatStats`], segmented
//! into conversations and finally run through the insight rules. Each stage
//! only reads what the previous one handed over.
//!
//! # Example
//!
//! ```rust
//! use chatstats::Analyzer;
//! use chatstats::config::AnalyzerConfig;
//!
//! let analyzer = Analyzer::new()
//!     .with_config(AnalyzerConfig::new().with_response_ceiling_hours(3));
//!
//! let stats = analyzer.analyze_str("\
//! [5/12/2023, 9:30:12 AM] Alice: Good morning! How are you today? 😊
//! [5/12/2023, 9:31:45 AM] Bob: I'm doing well, thanks for asking! ☕");
//!
//! assert_eq!(stats.participants, vec!["Alice", "Bob"]);
//! assert_eq!(stats.response_rates["Bob"], 1);
//! assert!(!stats.ai_insights.is_empty());
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::Message;
use crate::config::AnalyzerConfig;
use crate::core::accumulator::accumulate;
use crate::core::conversation::conversation_patterns;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::insights::{DEFAULT_RULES, InsightRule, generate_insights};
use crate::core::models::ChatStats;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::parser::ChatParser;
use crate::sentiment::{AfinnScorer, SentimentScorer};
use crate::tokenizer::Tokenizer;

/// Configurable parse-and-analyze pipeline.
#[derive(Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    lexicon: Arc<Lexicon>,
    scorer: Arc<dyn SentimentScorer>,
    filter: FilterConfig,
    rules: Vec<InsightRule>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("filter", &self.filter)
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            lexicon: Arc::new(Lexicon::default()),
            scorer: Arc::new(AfinnScorer::default()),
            filter: FilterConfig::default(),
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

impl Analyzer {
    /// Creates an analyzer with default thresholds, the built-in lexicon,
    /// the AFINN scorer and every insight rule.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the lexical tables.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Arc::new(lexicon);
        self
    }

    /// Replaces the sentiment scorer. Any `Fn(&str) -> f64` works.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl SentimentScorer + 'static) -> Self {
        self.scorer = Arc::new(scorer);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Replaces the insight rule battery.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<InsightRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Appends one rule after the existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: InsightRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// The line parser this analyzer uses.
    pub fn parser(&self) -> ChatParser {
        ChatParser::new()
            .with_tokenizer(Tokenizer::new(
                Arc::clone(&self.lexicon),
                Arc::clone(&self.scorer),
            ))
            .with_date_order(self.config.date_order)
    }

    /// Parses and filters `text` without computing statistics.
    pub fn parse_str(&self, text: &str) -> Vec<Message> {
        apply_filters(self.parser().parse_str(text), &self.filter)
    }

    /// Runs the full pipeline over export text. Never fails.
    pub fn analyze_str(&self, text: &str) -> ChatStats {
        self.analyze_messages(self.parse_str(text))
    }

    /// Reads and analyzes an export file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid UTF-8.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<ChatStats> {
        let messages = self.parser().parse(path.as_ref())?;
        Ok(self.analyze_messages(apply_filters(messages, &self.filter)))
    }

    /// Analyzes already-parsed messages, in the order given.
    pub fn analyze_messages(&self, messages: Vec<Message>) -> ChatStats {
        let mut stats = accumulate(messages, &self.lexicon, &self.config);
        stats.conversation_patterns =
            conversation_patterns(&stats.messages, self.config.conversation_gap_ms());
        stats.ai_insights = generate_insights(&stats, &self.rules, &self.config);

        info!(
            messages = stats.messages.len(),
            participants = stats.participants.len(),
            conversations = stats.conversation_patterns.total_conversations,
            insights = stats.ai_insights.len(),
            "analysis complete"
        );
        stats
    }
}

/// Analyzes `text` with default settings.
///
/// ```rust
/// let stats = chatstats::analyze("");
/// assert!(stats.is_empty());
/// assert!(stats.ai_insights.is_empty());
/// ```
pub fn analyze(text: &str) -> ChatStats {
    Analyzer::new().analyze_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::insights::InsightContext;
    use crate::lexicon::Topic;

    const CHAT: &str = "\
15/01/2024, 09:00 - Alice: Pizza tonight?
15/01/2024, 09:02 - Bob: Only if you finish the project
16/01/2024, 21:00 - Bob: Deadline moved!";

    #[test]
    fn test_pipeline_fills_every_stage() {
        let stats = Analyzer::new().analyze_str(CHAT);
        assert_eq!(stats.total_messages(), 3);
        assert_eq!(stats.messages.len(), 3);
        assert_eq!(stats.conversation_patterns.total_conversations, 2);
        assert_eq!(stats.conversation_starters["Alice"], 1);
        assert_eq!(stats.conversation_starters["Bob"], 1);
        assert!(stats.ai_insights[0].starts_with("Bob is the most active participant"));
    }

    #[test]
    fn test_filter_applies_before_accumulation() {
        let filter = FilterConfig::new().with_date_from("2024-01-16").unwrap();
        let stats = Analyzer::new().with_filter(filter).analyze_str(CHAT);
        assert_eq!(stats.participants, vec!["Bob"]);
        assert_eq!(stats.conversation_starters["Bob"], 1);
    }

    #[test]
    fn test_custom_scorer_and_lexicon() {
        let lexicon = Lexicon::default().with_topics(vec![Topic::new("Dinner", ["pizza"])]);
        let stats = Analyzer::new()
            .with_lexicon(lexicon)
            .with_scorer(|_: &str| 1.0)
            .analyze_str(CHAT);
        assert_eq!(stats.top_topics.len(), 1);
        assert_eq!(stats.top_topics[0].topic, "Dinner");
        assert_eq!(stats.avg_sentiment_scores["Alice"], 1.0);
    }

    #[test]
    fn test_custom_rules() {
        fn count_rule(ctx: &InsightContext<'_>) -> Vec<String> {
            vec![format!("{} messages", ctx.stats.total_messages())]
        }
        let stats = Analyzer::new()
            .with_rules(Vec::new())
            .with_rule(InsightRule::new("count", count_rule))
            .analyze_str(CHAT);
        assert_eq!(stats.ai_insights, vec!["3 messages"]);
    }

    #[test]
    fn test_analyze_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        std::fs::write(&path, CHAT).unwrap();

        let stats = Analyzer::new().analyze_file(&path).unwrap();
        assert_eq!(stats.total_messages(), 3);
        assert!(Analyzer::new().analyze_file(dir.path().join("missing.txt")).is_err());
    }
}
