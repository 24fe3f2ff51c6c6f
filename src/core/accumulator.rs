//! Single-pass statistics accumulation.
//!
//! [`accumulate`] folds the message sequence into a [`ChatStats`]. The fold
//! state is an [`Accumulator`] value carrying the partially built stats plus
//! the little running state the order-dependent metrics need: the previous
//! message (for conversation starters and response times) and the lists
//! that are reduced to averages once the pass is over.
//!
//! The pass is strictly sequential. Starter credit and response times
//! depend on the immediately preceding message, so the input must already
//! be in export order.

use std::collections::BTreeMap;

use chrono::Local;

use crate::Message;
use crate::config::AnalyzerConfig;
use crate::core::models::{
    ChatStats, EngagementStats, LengthEntry, PairResponseTime, ResponseGap, ResponseTimeEntry,
    TopicCount,
};
use crate::lexicon::Lexicon;

/// Builds statistics for `messages` in one forward pass.
///
/// The returned stats own `messages`. Conversation patterns and insights are
/// left empty; [`Analyzer`](crate::analyzer::Analyzer) fills them in.
///
/// An empty input yields empty maps with `first_date == last_date == now`.
pub fn accumulate(messages: Vec<Message>, lexicon: &Lexicon, config: &AnalyzerConfig) -> ChatStats {
    let mut stats = messages
        .iter()
        .fold(Accumulator::new(lexicon, config), Accumulator::step)
        .finish();
    stats.messages = messages;
    stats
}

/// Fold state for [`accumulate`].
#[derive(Debug)]
pub struct Accumulator<'a> {
    lexicon: &'a Lexicon,
    gap_ms: i64,
    ceiling_ms: i64,
    top_topics: usize,
    stats: ChatStats,
    previous: Option<&'a Message>,
    daily_scores: BTreeMap<String, Vec<f64>>,
    /// Reply delays per `(respondingTo, sender)`, first occurrence first
    pair_times: Vec<(String, String, Vec<i64>)>,
    /// Global topic counters, first match first
    topic_counts: Vec<TopicCount>,
}

impl<'a> Accumulator<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &AnalyzerConfig) -> Self {
        Self {
            lexicon,
            gap_ms: config.conversation_gap_ms(),
            ceiling_ms: config.response_ceiling_ms(),
            top_topics: config.top_topics,
            stats: ChatStats::default(),
            previous: None,
            daily_scores: BTreeMap::new(),
            pair_times: Vec::new(),
            topic_counts: Vec::new(),
        }
    }

    /// Folds one message in.
    #[must_use]
    pub fn step(mut self, message: &'a Message) -> Self {
        self.count(message);
        self.bucket(message);
        self.track_timing(message);
        self.track_topics(message);
        self.previous = Some(message);
        self
    }

    fn count(&mut self, message: &Message) {
        let stats = &mut self.stats;
        let sender = &message.sender;

        if !stats.message_count.contains_key(sender) {
            stats.participants.push(sender.clone());
        }
        *stats.message_count.entry(sender.clone()).or_default() += 1;
        *stats.word_count.entry(sender.clone()).or_default() += message.words.len();

        let words = stats.top_words.entry(sender.clone()).or_default();
        for word in &message.words {
            *words.entry(word.clone()).or_default() += 1;
        }
        let emojis = stats.top_emojis.entry(sender.clone()).or_default();
        for emoji in &message.emojis {
            *emojis.entry(emoji.clone()).or_default() += 1;
        }

        stats
            .sentiment_scores
            .entry(sender.clone())
            .or_default()
            .push(message.sentiment_score);
        *stats
            .affectionate_words_count
            .entry(sender.clone())
            .or_default() += message.affectionate_words.len();
        *stats.profanity_count.entry(sender.clone()).or_default() += message.profanity_words.len();

        if message.is_question() {
            *stats.question_count.entry(sender.clone()).or_default() += 1;
        }
    }

    fn bucket(&mut self, message: &Message) {
        let stats = &mut self.stats;
        let sender = &message.sender;
        let day = message.day_key();

        *stats.messages_by_day.entry(day.clone()).or_default() += 1;
        *stats.messages_by_hour.entry(message.hour()).or_default() += 1;
        *stats.messages_by_weekday.entry(message.weekday()).or_default() += 1;
        *stats.messages_by_month.entry(message.month_key()).or_default() += 1;

        *stats
            .chattiness_by_hour
            .entry(sender.clone())
            .or_default()
            .entry(message.hour())
            .or_default() += 1;
        *stats
            .daily_activity
            .entry(sender.clone())
            .or_default()
            .entry(day.clone())
            .or_default() += 1;
        *stats
            .weekday_activity
            .entry(sender.clone())
            .or_default()
            .entry(message.weekday())
            .or_default() += 1;

        stats.message_length_over_time.push(LengthEntry {
            date: day.clone(),
            sender: sender.clone(),
            length: message.length(),
        });

        self.daily_scores
            .entry(day)
            .or_default()
            .push(message.sentiment_score);

        if self.previous.is_none() {
            stats.first_date = message.timestamp;
            stats.last_date = message.timestamp;
        } else {
            stats.first_date = stats.first_date.min(message.timestamp);
            stats.last_date = stats.last_date.max(message.timestamp);
        }
    }

    fn track_timing(&mut self, message: &Message) {
        let Some(previous) = self.previous else {
            *self
                .stats
                .conversation_starters
                .entry(message.sender.clone())
                .or_default() += 1;
            return;
        };

        let delta = (message.timestamp - previous.timestamp).num_milliseconds();

        if delta > self.gap_ms {
            *self
                .stats
                .conversation_starters
                .entry(message.sender.clone())
                .or_default() += 1;
        }

        if previous.sender == message.sender || delta <= 0 {
            return;
        }

        if delta < self.ceiling_ms {
            self.record_response(previous, message, delta);
        } else {
            self.stats
                .response_gaps
                .entry(message.sender.clone())
                .or_default()
                .push(ResponseGap {
                    date: message.day_key(),
                    responding_to: previous.sender.clone(),
                    gap_time: delta,
                });
        }
    }

    fn record_response(&mut self, previous: &Message, message: &Message, delta: i64) {
        let stats = &mut self.stats;
        let sender = &message.sender;

        stats.response_time_history.push(ResponseTimeEntry {
            date: message.day_key(),
            sender: sender.clone(),
            responding_to: previous.sender.clone(),
            time: delta,
        });

        let weight = stats.response_rates.entry(sender.clone()).or_default();
        let average = stats.average_response_time.entry(sender.clone()).or_default();
        *average = (*average * *weight as f64 + delta as f64) / (*weight + 1) as f64;
        *weight += 1;

        match self
            .pair_times
            .iter_mut()
            .find(|(to, from, _)| *to == previous.sender && from == sender)
        {
            Some((_, _, times)) => times.push(delta),
            None => self
                .pair_times
                .push((previous.sender.clone(), sender.clone(), vec![delta])),
        }
    }

    fn track_topics(&mut self, message: &Message) {
        let lexicon = self.lexicon;
        let topics = lexicon.topics_for(&message.words);
        if topics.is_empty() {
            return;
        }

        let by_sender = self
            .stats
            .topics_by_sender
            .entry(message.sender.clone())
            .or_default();
        for topic in topics {
            bump(&mut self.topic_counts, topic);
            bump(by_sender, topic);
        }
    }

    /// Runs the post-pass reductions and returns the stats.
    pub fn finish(mut self) -> ChatStats {
        if self.stats.participants.is_empty() {
            let now = Local::now().naive_local();
            self.stats.first_date = now;
            self.stats.last_date = now;
            return self.stats;
        }

        let stats = &mut self.stats;

        for (sender, scores) in &stats.sentiment_scores {
            stats
                .avg_sentiment_scores
                .insert(sender.clone(), mean(scores));
        }

        for (sender, words) in &stats.top_words {
            let total = stats.word_count.get(sender).copied().unwrap_or(0).max(1);
            stats
                .vocabulary_richness
                .insert(sender.clone(), words.len() as f64 / total as f64);
        }

        stats.daily_sentiment = self
            .daily_scores
            .iter()
            .map(|(day, scores)| (day.clone(), mean(scores)))
            .collect();

        stats.response_times_by_sender_pair = self
            .pair_times
            .into_iter()
            .map(|(responding_to, sender, times)| PairResponseTime {
                responding_to,
                sender,
                average_time: times.iter().sum::<i64>() as f64 / times.len() as f64,
                count: times.len(),
            })
            .collect();

        let span_days = stats.total_span_days();
        for (sender, days) in &stats.daily_activity {
            let total_messages = stats.message_count.get(sender).copied().unwrap_or(0);
            let days_active = days.len();
            let active_ratio = if span_days == 0 {
                0.0
            } else {
                (days_active as f64 / span_days as f64).min(1.0)
            };
            stats.engagement_stats.insert(
                sender.clone(),
                EngagementStats {
                    total_messages,
                    days_active,
                    active_ratio,
                    average_messages_per_active_day: total_messages as f64
                        / days_active.max(1) as f64,
                },
            );
        }

        let mut ranked = self.topic_counts;
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(self.top_topics);
        stats.top_topics = ranked;

        self.stats
    }
}

fn bump(counts: &mut Vec<TopicCount>, topic: &str) {
    match counts.iter_mut().find(|entry| entry.topic == topic) {
        Some(entry) => entry.count += 1,
        None => counts.push(TopicCount::new(topic, 1)),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
