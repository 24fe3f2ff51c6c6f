//! Per-message feature extraction.
//!
//! [`Tokenizer`] turns message content into the derived fields of a
//! [`Message`]: emojis, filtered words, the affectionate and profane subsets
//! of those words, and a sentiment score for the raw text.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::Message;
use crate::emoji::extract_emojis;
use crate::lexicon::Lexicon;
use crate::sentiment::{AfinnScorer, SentimentScorer};

/// Indian mobile numbers (optional +91 / 0 prefix) and generic grouped
/// 7-10 digit numbers.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:\+91[-\s]?|0)?[6-9][0-9]{9}\b|(?:\(?[0-9]{3}\)?[-\s]?)?[0-9]{3}[-\s]?[0-9]{4}",
    )
    .expect("phone pattern is valid")
});

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("non-word pattern is valid"));

/// Features extracted from one message body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Features {
    pub emojis: Vec<String>,
    pub words: Vec<String>,
    pub affectionate_words: Vec<String>,
    pub profanity_words: Vec<String>,
    pub sentiment_score: f64,
}

/// Extracts [`Features`] using a lexicon and a sentiment scorer.
#[derive(Clone)]
pub struct Tokenizer {
    lexicon: Arc<Lexicon>,
    scorer: Arc<dyn SentimentScorer>,
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("topics", &self.lexicon.topics().len())
            .finish_non_exhaustive()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::default()), Arc::new(AfinnScorer::default()))
    }
}

impl Tokenizer {
    pub fn new(lexicon: Arc<Lexicon>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { lexicon, scorer }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Lowercase tokens with phone numbers and punctuation removed, tokens of
    /// one character and stopwords dropped.
    ///
    /// ```rust
    /// use chatstats::tokenizer::Tokenizer;
    ///
    /// let words = Tokenizer::default().words("Call 9876543210 about the Italian pasta!!");
    /// assert_eq!(words, vec!["call", "italian", "pasta"]);
    /// ```
    pub fn words(&self, content: &str) -> Vec<String> {
        let lowered = content.to_lowercase();
        let without_phones = PHONE.replace_all(&lowered, " ");
        let letters_only = NON_WORD.replace_all(&without_phones, " ");
        letters_only
            .split_whitespace()
            .filter(|word| word.chars().count() > 1 && !self.lexicon.is_stopword(word))
            .map(str::to_string)
            .collect()
    }

    pub fn extract(&self, content: &str) -> Features {
        let words = self.words(content);
        let affectionate_words = words
            .iter()
            .filter(|w| self.lexicon.is_affectionate(w))
            .cloned()
            .collect();
        let profanity_words = words
            .iter()
            .filter(|w| self.lexicon.is_profane(w))
            .cloned()
            .collect();

        Features {
            emojis: extract_emojis(content),
            words,
            affectionate_words,
            profanity_words,
            sentiment_score: self.scorer.score(content),
        }
    }

    /// Fills the derived fields of `message` from its content.
    pub fn enrich(&self, mut message: Message) -> Message {
        let features = self.extract(&message.content);
        message.emojis = features.emojis;
        message.words = features.words;
        message.affectionate_words = features.affectionate_words;
        message.profanity_words = features.profanity_words;
        message.sentiment_score = features.sentiment_score;
        message
    }
}
