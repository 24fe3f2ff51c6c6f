//! Lexical classifiers used by the tokenizer and topic detection.
//!
//! A [`Lexicon`] bundles four lookup tables:
//!
//! | Table | Used for |
//! |-------|----------|
//! | stopwords | dropped during word extraction |
//! | affectionate | per-message affectionate subset |
//! | profanity | per-message profanity subset |
//! | topics | named keyword clusters for topic detection |
//!
//! The built-in tables ship as data files embedded at compile time and are
//! parsed once on first use. A custom lexicon (for another language, say)
//! can replace any subset of them:
//!
//! ```rust
//! use chatstats::lexicon::{Lexicon, Topic};
//!
//! let lexicon = Lexicon::builtin()
//!     .clone()
//!     .with_topics(vec![Topic::new("Pets", ["dog", "cat"])]);
//!
//! assert_eq!(lexicon.topics_for(&["cat".to_string()]), vec!["Pets"]);
//! assert!(lexicon.is_stopword("the"));
//! ```
//!
//! Matching is exact and case-sensitive against the lowercase tokens the
//! tokenizer emits. Multi-word entries are kept as written, so they never
//! match a single token.

use std::collections::{HashMap, HashSet};
#[cfg(feature = "json-output")]
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

#[cfg(feature = "json-output")]
use crate::error::{ChatStatsError, Result};

const STOPWORDS: &str = include_str!("data/stopwords.txt");
const AFFECTIONATE: &str = include_str!("data/affectionate.txt");
const PROFANITY: &str = include_str!("data/profanity.txt");
const TOPICS: &str = include_str!("data/topics.txt");

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::new(
        parse_word_list(STOPWORDS),
        parse_word_list(AFFECTIONATE),
        parse_word_list(PROFANITY),
        parse_topic_table(TOPICS),
    )
});

/// A named keyword cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Topic {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Stopword, affection, profanity and topic tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    affectionate: HashSet<String>,
    profanity: HashSet<String>,
    topics: Vec<Topic>,
    /// keyword -> indices into `topics`, ascending
    keyword_index: HashMap<String, Vec<usize>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Lexicon {
    /// Creates a lexicon from explicit tables.
    pub fn new(
        stopwords: HashSet<String>,
        affectionate: HashSet<String>,
        profanity: HashSet<String>,
        topics: Vec<Topic>,
    ) -> Self {
        let mut lexicon = Self {
            stopwords,
            affectionate,
            profanity,
            topics: Vec::new(),
            keyword_index: HashMap::new(),
        };
        lexicon.set_topics(topics);
        lexicon
    }

    /// The embedded default tables.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Replaces the stopword table.
    #[must_use]
    pub fn with_stopwords<I: IntoIterator<Item = String>>(mut self, words: I) -> Self {
        self.stopwords = words.into_iter().collect();
        self
    }

    /// Replaces the affectionate-word table.
    #[must_use]
    pub fn with_affectionate<I: IntoIterator<Item = String>>(mut self, words: I) -> Self {
        self.affectionate = words.into_iter().collect();
        self
    }

    /// Replaces the profanity table.
    #[must_use]
    pub fn with_profanity<I: IntoIterator<Item = String>>(mut self, words: I) -> Self {
        self.profanity = words.into_iter().collect();
        self
    }

    /// Replaces the topic table.
    #[must_use]
    pub fn with_topics(mut self, topics: Vec<Topic>) -> Self {
        self.set_topics(topics);
        self
    }

    fn set_topics(&mut self, topics: Vec<Topic>) {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, topic) in topics.iter().enumerate() {
            for keyword in &topic.keywords {
                let slots = index.entry(keyword.clone()).or_default();
                if slots.last() != Some(&i) {
                    slots.push(i);
                }
            }
        }
        self.topics = topics;
        self.keyword_index = index;
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn is_affectionate(&self, word: &str) -> bool {
        self.affectionate.contains(word)
    }

    pub fn is_profane(&self, word: &str) -> bool {
        self.profanity.contains(word)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Distinct topics matched by `words`.
    ///
    /// Order is the order of first match: words left to right, and for each
    /// word the topics in table order. A topic appears at most once.
    pub fn topics_for(&self, words: &[String]) -> Vec<&str> {
        let mut matched: Vec<usize> = Vec::new();
        for word in words {
            if let Some(slots) = self.keyword_index.get(word.as_str()) {
                for &slot in slots {
                    if !matched.contains(&slot) {
                        matched.push(slot);
                    }
                }
            }
        }
        matched
            .into_iter()
            .map(|slot| self.topics[slot].name.as_str())
            .collect()
    }

    /// Loads a lexicon from JSON. Any table left out keeps the built-in one.
    ///
    /// ```json
    /// {
    ///   "stopwords": ["der", "die", "das"],
    ///   "topics": [{"name": "Arbeit", "keywords": ["büro", "chef"]}]
    /// }
    /// ```
    #[cfg(feature = "json-output")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        file.into_lexicon()
    }

    /// Loads a JSON lexicon file.
    #[cfg(feature = "json-output")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// On-disk shape of a custom lexicon.
#[cfg(feature = "json-output")]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LexiconFile {
    stopwords: Option<Vec<String>>,
    affectionate: Option<Vec<String>>,
    profanity: Option<Vec<String>>,
    topics: Option<Vec<Topic>>,
}

#[cfg(feature = "json-output")]
impl LexiconFile {
    fn into_lexicon(self) -> Result<Lexicon> {
        let mut lexicon = Lexicon::builtin().clone();
        if let Some(words) = self.stopwords {
            lexicon = lexicon.with_stopwords(words);
        }
        if let Some(words) = self.affectionate {
            lexicon = lexicon.with_affectionate(words);
        }
        if let Some(words) = self.profanity {
            lexicon = lexicon.with_profanity(words);
        }
        if let Some(topics) = self.topics {
            if let Some(topic) = topics.iter().find(|t| t.name.trim().is_empty()) {
                return Err(ChatStatsError::invalid_format(
                    "lexicon",
                    format!("topic with keywords {:?} has an empty name", topic.keywords),
                ));
            }
            lexicon = lexicon.with_topics(topics);
        }
        Ok(lexicon)
    }
}

/// One entry per line; blank lines and `#` comments are ignored.
pub fn parse_word_list(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// `Topic name = keyword, keyword, ...` per line.
///
/// Lines without `=` are skipped.
pub fn parse_topic_table(text: &str) -> Vec<Topic> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (name, keywords) = line.split_once('=')?;
            let keywords = keywords
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty());
            Some(Topic::new(name.trim(), keywords))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_loaded() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.is_stopword("the"));
        assert!(lexicon.is_stopword("yaar"));
        assert!(!lexicon.is_stopword("pasta"));
        assert!(lexicon.is_affectionate("love"));
        assert!(lexicon.is_affectionate("miss"));
        assert!(lexicon.is_profane("fuck"));
        assert_eq!(lexicon.topics().len(), 30);
        assert_eq!(lexicon.topics()[0].name, "Work");
    }

    #[test]
    fn test_multi_word_entries_kept_verbatim() {
        let lexicon = Lexicon::builtin();
        let work = &lexicon.topics()[0];
        assert!(work.keywords.iter().any(|k| k == "office gaya"));
        // a single token can never equal a phrase
        assert!(lexicon.topics_for(&["office".into(), "gaya".into()]) == vec!["Work"]);
    }

    #[test]
    fn test_topics_for_distinct_in_first_match_order() {
        let lexicon = Lexicon::builtin().clone().with_topics(vec![
            Topic::new("Food", ["pizza", "lunch"]),
            Topic::new("Work", ["office", "lunch"]),
        ]);

        let words: Vec<String> = ["office", "pizza", "lunch", "office"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(lexicon.topics_for(&words), vec!["Work", "Food"]);
    }

    #[test]
    fn test_topics_for_exact_match_only() {
        let lexicon =
            Lexicon::builtin().clone().with_topics(vec![Topic::new("Food", ["eat"])]);
        assert!(lexicon.topics_for(&["eating".into(), "great".into()]).is_empty());
    }

    #[test]
    fn test_parse_word_list_skips_comments() {
        let set = parse_word_list("# header\nalpha\n\n  beta  \nalpha\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("beta"));
    }

    #[test]
    fn test_parse_topic_table() {
        let topics = parse_topic_table("A = x, y\nbroken line\nB & C = z,\n");
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0], Topic::new("A", ["x", "y"]));
        assert_eq!(topics[1], Topic::new("B & C", ["z"]));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_partial_override() {
        let lexicon = Lexicon::from_json_str(
            r#"{"stopwords": ["der"], "topics": [{"name": "Arbeit", "keywords": ["chef"]}]}"#,
        )
        .unwrap();
        assert!(lexicon.is_stopword("der"));
        assert!(!lexicon.is_stopword("the"));
        assert!(lexicon.is_affectionate("love"));
        assert_eq!(lexicon.topics_for(&["chef".into()]), vec!["Arbeit"]);
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_rejects_unnamed_topic() {
        let err =
            Lexicon::from_json_str(r#"{"topics": [{"name": " ", "keywords": ["x"]}]}"#).unwrap_err();
        assert!(err.is_invalid_format());
    }
}
