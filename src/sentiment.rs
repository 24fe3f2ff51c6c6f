//! Pluggable sentiment scoring.
//!
//! The analyzer only needs a signed number per message; how it is produced
//! is up to the [`SentimentScorer`]. The default [`AfinnScorer`] sums word
//! valences from an AFINN-style list and flips a word's valence when the
//! token before it is a negator ("not good" scores -3).
//!
//! Any `Fn(&str) -> f64` is a scorer too:
//!
//! ```rust
//! use chatstats::sentiment::SentimentScorer;
//!
//! let shouty = |text: &str| text.matches('!').count() as f64;
//! assert_eq!(shouty.score("wow!!"), 2.0);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

const AFINN: &str = include_str!("lexicon/data/afinn.txt");

const NEGATORS: &[&str] = &[
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "not", "non", "wont", "won't", "isnt",
    "isn't",
];

static BUILTIN: LazyLock<AfinnScorer> =
    LazyLock::new(|| AfinnScorer::new(parse_valences(AFINN)));

/// Turns text into a signed sentiment score. Must be total and deterministic.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Word-valence scorer with single-token negation.
#[derive(Debug, Clone)]
pub struct AfinnScorer {
    valences: HashMap<String, i32>,
    negators: HashSet<String>,
}

impl Default for AfinnScorer {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl AfinnScorer {
    pub fn new(valences: HashMap<String, i32>) -> Self {
        Self {
            valences,
            negators: NEGATORS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Adds or overrides word valences.
    #[must_use]
    pub fn with_valences<I: IntoIterator<Item = (String, i32)>>(mut self, extra: I) -> Self {
        self.valences.extend(extra);
        self
    }

    pub fn valence(&self, word: &str) -> Option<i32> {
        self.valences.get(word).copied()
    }
}

impl SentimentScorer for AfinnScorer {
    fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let cleaned: String = lowered
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '\'' || *c == '-')
            .collect();

        let mut total = 0;
        let mut previous: Option<&str> = None;
        for token in cleaned.split_whitespace() {
            if let Some(valence) = self.valences.get(token) {
                let negated = previous.is_some_and(|p| self.negators.contains(p));
                total += if negated { -valence } else { *valence };
            }
            previous = Some(token);
        }
        f64::from(total)
    }
}

/// `word<TAB>valence` per line; `#` comments and malformed lines are skipped.
pub fn parse_valences(text: &str) -> HashMap<String, i32> {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| {
            let (word, value) = line.split_once('\t')?;
            Some((word.trim().to_string(), value.trim().parse().ok()?))
        })
        .collect()
}
