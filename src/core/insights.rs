//! Heuristic insight generation.
//!
//! Insights are produced by a fixed, ordered battery of [`InsightRule`]s.
//! Each rule reads the finished [`ChatStats`] and returns zero or more
//! sentences; a rule whose data is missing or below its threshold simply
//! returns nothing. Output order is rule order, then the order a rule emits
//! its sentences in (usually participant order).
//!
//! Rankings break ties by participant order: the sender who appeared first
//! in the chat wins.
//!
//! # Example
//!
//! ```rust
//! use chatstats::analyze;
//! use chatstats::core::insights::{generate_insights, DEFAULT_RULES};
//! use chatstats::config::AnalyzerConfig;
//!
//! let stats = analyze("[1/15/24, 10:00 AM] Alice: hi\n[1/15/24, 10:01 AM] Bob: hey");
//! assert_eq!(
//!     stats.ai_insights[0],
//!     "Alice is the most active participant, sending 1 messages (50.0% of all messages)."
//! );
//! assert_eq!(generate_insights(&stats, DEFAULT_RULES, &AnalyzerConfig::default()), stats.ai_insights);
//! ```

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::config::AnalyzerConfig;
use crate::core::models::ChatStats;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// What a rule gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    pub stats: &'a ChatStats,
    pub config: &'a AnalyzerConfig,
}

/// One named, independent insight rule.
#[derive(Debug, Clone, Copy)]
pub struct InsightRule {
    pub name: &'static str,
    pub evaluate: fn(&InsightContext<'_>) -> Vec<String>,
}

impl InsightRule {
    pub const fn new(name: &'static str, evaluate: fn(&InsightContext<'_>) -> Vec<String>) -> Self {
        Self { name, evaluate }
    }
}

/// The built-in battery, in emission order.
pub const DEFAULT_RULES: &[InsightRule] = &[
    InsightRule::new("most_active", most_active),
    InsightRule::new("response_speed", response_speed),
    InsightRule::new("conversation_starters", conversation_starters),
    InsightRule::new("sentiment", sentiment),
    InsightRule::new("expressiveness", expressiveness),
    InsightRule::new("vocabulary", vocabulary),
    InsightRule::new("message_length", message_length),
    InsightRule::new("emoji_usage", emoji_usage),
    InsightRule::new("topics", topics),
    InsightRule::new("peak_hours", peak_hours),
    InsightRule::new("weekdays", weekdays),
    InsightRule::new("one_sided", one_sided),
    InsightRule::new("message_frequency", message_frequency),
    InsightRule::new("response_trend", response_trend),
    InsightRule::new("fastest_pair", fastest_pair),
    InsightRule::new("questions", questions),
    InsightRule::new("engagement", engagement),
    InsightRule::new("conversation_summary", conversation_summary),
    InsightRule::new("response_gaps", response_gaps),
    InsightRule::new("favorite_emoji", favorite_emoji),
    InsightRule::new("busiest_weekday", busiest_weekday),
];

/// Runs `rules` in order over `stats`.
pub fn generate_insights(
    stats: &ChatStats,
    rules: &[InsightRule],
    config: &AnalyzerConfig,
) -> Vec<String> {
    let ctx = InsightContext { stats, config };
    let mut insights = Vec::new();
    for rule in rules {
        let emitted = (rule.evaluate)(&ctx);
        trace!(rule = rule.name, emitted = emitted.len(), "insight rule evaluated");
        insights.extend(emitted);
    }
    insights
}

/// Formats milliseconds as "N seconds", "N minutes" or "N.N hours".
///
/// ```rust
/// use chatstats::core::insights::readable_duration;
///
/// assert_eq!(readable_duration(45_000.0), "45 seconds");
/// assert_eq!(readable_duration(150_000.0), "3 minutes");
/// assert_eq!(readable_duration(5_400_000.0), "1.5 hours");
/// ```
pub fn readable_duration(ms: f64) -> String {
    if ms < 60_000.0 {
        format!("{} seconds", (ms / 1000.0).round())
    } else if ms < 3_600_000.0 {
        format!("{} minutes", (ms / 60_000.0).round())
    } else {
        format!("{:.1} hours", ms / 3_600_000.0)
    }
}

// ============================================================================
// Ranking helpers
// ============================================================================

/// First entry with the largest value.
fn highest<K, T: PartialOrd + Copy>(entries: impl IntoIterator<Item = (K, T)>) -> Option<(K, T)> {
    entries.into_iter().fold(None, |best, (key, value)| match best {
        Some((_, top)) if value <= top => best,
        _ => Some((key, value)),
    })
}

/// First entry with the smallest value.
fn lowest<K, T: PartialOrd + Copy>(entries: impl IntoIterator<Item = (K, T)>) -> Option<(K, T)> {
    entries.into_iter().fold(None, |best, (key, value)| match best {
        Some((_, bottom)) if value >= bottom => best,
        _ => Some((key, value)),
    })
}

/// `map` values in participant order.
fn by_participant<'a, T: Copy>(
    stats: &'a ChatStats,
    map: &'a BTreeMap<String, T>,
) -> impl Iterator<Item = (&'a str, T)> + 'a {
    stats
        .participants
        .iter()
        .filter_map(move |name| map.get(name).map(|value| (name.as_str(), *value)))
}

fn percent(part: usize, whole: usize) -> f64 {
    part as f64 / whole.max(1) as f64 * 100.0
}

fn month_name(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

fn hours(secs: u64) -> u64 {
    secs / 3600
}

// ============================================================================
// Rules
// ============================================================================

fn most_active(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let total = stats.total_messages();
    highest(by_participant(stats, &stats.message_count))
        .map(|(name, count)| {
            format!(
                "{name} is the most active participant, sending {count} messages ({:.1}% of all messages).",
                percent(count, total)
            )
        })
        .into_iter()
        .collect()
}

fn response_speed(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    let quickest = lowest(by_participant(stats, &stats.average_response_time));
    let slowest = highest(by_participant(stats, &stats.average_response_time));

    if let Some((name, ms)) = quickest {
        out.push(format!(
            "{name} responds the quickest, with an average response time of {}.",
            readable_duration(ms)
        ));
    }
    if let (Some((fast, _)), Some((slow, ms))) = (quickest, slowest) {
        if slow != fast {
            out.push(format!(
                "{slow} takes longer to respond, averaging {}.",
                readable_duration(ms)
            ));
        }
    }
    out
}

fn conversation_starters(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    let total: usize = stats.conversation_starters.values().sum();
    let Some((name, count)) = highest(by_participant(stats, &stats.conversation_starters)) else {
        return out;
    };
    out.push(format!(
        "{name} initiates most conversations ({count} times, {:.1}% of all conversation starts).",
        percent(count, total)
    ));

    let long_break = ctx.config.long_break_ms();
    let mut reconnects: BTreeMap<String, usize> = BTreeMap::new();
    for pair in stats.messages.windows(2) {
        if (pair[1].timestamp - pair[0].timestamp).num_milliseconds() > long_break {
            *reconnects.entry(pair[1].sender.clone()).or_default() += 1;
        }
    }
    if let Some((name, count)) = highest(by_participant(stats, &reconnects)) {
        if count > 3 {
            out.push(format!(
                "{name} often reconnects after long breaks ({count} times after {}+ hour gaps).",
                hours(ctx.config.long_break_secs)
            ));
        }
    }
    out
}

fn sentiment(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    let happiest = highest(by_participant(stats, &stats.avg_sentiment_scores));
    let least = lowest(by_participant(stats, &stats.avg_sentiment_scores));
    let Some((happy_name, happy_score)) = happiest else {
        return out;
    };

    if happy_score > 0.2 {
        out.push(format!(
            "{happy_name} uses more positive language overall, with sentiment score of {happy_score:.2}."
        ));
    } else {
        let tone = if happy_score > 0.0 { "positive" } else { "negative" };
        out.push(format!(
            "The conversation has a neutral to slightly {tone} tone overall."
        ));
    }

    if let Some((name, score)) = least {
        if name != happy_name && score.abs() > 0.2 {
            let tone = if score < 0.0 { "more negative" } else { "less positive" };
            out.push(format!(
                "{name} tends to use {tone} language, with sentiment score of {score:.2}."
            ));
        }
    }

    if stats.messages.len() > 20 {
        out.extend(sentiment_trend(stats));
    }
    out
}

/// Compares each sender's first and last monthly sentiment average.
fn sentiment_trend(stats: &ChatStats) -> Vec<String> {
    let mut monthly: BTreeMap<&str, BTreeMap<NaiveDate, (f64, usize)>> = BTreeMap::new();
    for message in &stats.messages {
        let Some(month) = NaiveDate::from_ymd_opt(
            message.timestamp.year(),
            message.timestamp.month(),
            1,
        ) else {
            continue;
        };
        let slot = monthly
            .entry(message.sender.as_str())
            .or_default()
            .entry(month)
            .or_default();
        slot.0 += message.sentiment_score;
        slot.1 += 1;
    }

    let all_months: Vec<NaiveDate> = monthly
        .values()
        .flat_map(|months| months.keys().copied())
        .collect();
    if all_months.iter().min() == all_months.iter().max() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for sender in &stats.participants {
        let Some(months) = monthly.get(sender.as_str()) else {
            continue;
        };
        let (Some((&first, &(first_sum, first_n))), Some((&last, &(last_sum, last_n)))) =
            (months.first_key_value(), months.last_key_value())
        else {
            continue;
        };
        if first == last {
            continue;
        }
        let before = first_sum / first_n as f64;
        let after = last_sum / last_n as f64;
        if (after - before).abs() > 0.5 {
            if after > before {
                out.push(format!(
                    "{sender}'s messages have become more positive over time, from {} to {}.",
                    month_name(first),
                    month_name(last)
                ));
            } else {
                out.push(format!(
                    "{sender}'s messages were more positive in {} than in {}.",
                    month_name(first),
                    month_name(last)
                ));
            }
        }
    }
    out
}

fn expressiveness(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();

    if let Some((name, count)) = highest(by_participant(stats, &stats.affectionate_words_count)) {
        if count > 5 {
            let words = stats.word_count.get(name).copied().unwrap_or(0);
            out.push(format!(
                "{name} expresses affection more frequently, using {count} affectionate terms ({:.2}% of their words).",
                percent(count, words)
            ));
        }
    }

    if let Some((name, count)) = highest(by_participant(stats, &stats.profanity_count)) {
        if count > 5 {
            let messages = stats.message_count.get(name).copied().unwrap_or(0);
            out.push(format!(
                "{name} uses more casual language with {count} instances of profanity ({:.2}% of their messages).",
                percent(count, messages)
            ));
        }
    }
    out
}

fn vocabulary(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    let most = highest(by_participant(stats, &stats.vocabulary_richness));
    let least = lowest(by_participant(stats, &stats.vocabulary_richness));
    let Some((rich_name, rich)) = most else {
        return out;
    };

    if rich > 0.3 {
        let unique = stats.top_words.get(rich_name).map_or(0, BTreeMap::len);
        out.push(format!(
            "{rich_name} uses the most diverse vocabulary with {unique} unique words ({:.1}% vocabulary richness).",
            rich * 100.0
        ));
    }
    if let Some((name, value)) = least {
        if name != rich_name && rich - value > 0.1 {
            out.push(format!(
                "{name} tends to use a more focused vocabulary ({:.1}% vocabulary richness).",
                value * 100.0
            ));
        }
    }
    out
}

fn message_length(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    let averages: Vec<(&str, f64)> = stats
        .participants
        .iter()
        .filter_map(|name| {
            stats
                .average_message_length(name)
                .map(|avg| (name.as_str(), avg))
        })
        .collect();

    if let (Some((long, long_avg)), Some((short, short_avg))) =
        (highest(averages.iter().copied()), lowest(averages.iter().copied()))
    {
        if long != short {
            if long_avg > 50.0 && long_avg / short_avg > 1.5 {
                out.push(format!(
                    "{long} typically sends longer messages (avg {} chars), while {short} is more concise (avg {} chars).",
                    long_avg.round(),
                    short_avg.round()
                ));
            }
        } else if long_avg > 80.0 {
            out.push(format!(
                "{long} tends to write detailed messages, averaging {} characters.",
                long_avg.round()
            ));
        } else if short_avg < 25.0 {
            out.push(format!(
                "{short} typically sends brief messages, averaging just {} characters.",
                short_avg.round()
            ));
        }
    }

    if stats.message_length_over_time.len() > 20 {
        out.extend(length_trend(stats));
    }
    out
}

/// Change from each sender's first to last monthly mean length.
fn length_trend(stats: &ChatStats) -> Vec<String> {
    let mut monthly: BTreeMap<&str, BTreeMap<&str, (usize, usize)>> = BTreeMap::new();
    for entry in &stats.message_length_over_time {
        let month = entry.date.get(..7).unwrap_or(&entry.date);
        let slot = monthly
            .entry(entry.sender.as_str())
            .or_default()
            .entry(month)
            .or_default();
        slot.0 += entry.length;
        slot.1 += 1;
    }

    let mut out = Vec::new();
    for sender in &stats.participants {
        let Some(months) = monthly.get(sender.as_str()) else {
            continue;
        };
        if months.len() <= 2 {
            continue;
        }
        let (Some((_, &(first_sum, first_n))), Some((_, &(last_sum, last_n)))) =
            (months.first_key_value(), months.last_key_value())
        else {
            continue;
        };
        let before = first_sum as f64 / first_n as f64;
        let after = last_sum as f64 / last_n as f64;
        if before <= 0.0 {
            continue;
        }
        let change = (after - before) / before * 100.0;
        if change > 30.0 {
            out.push(format!(
                "{sender}'s messages have grown {change:.0}% longer since the conversation began."
            ));
        } else if change < -30.0 {
            out.push(format!(
                "{sender}'s messages have become {:.0}% shorter since the conversation began.",
                change.abs()
            ));
        }
    }
    out
}

fn emoji_usage(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    let totals: Vec<(&str, usize)> = stats
        .participants
        .iter()
        .map(|name| (name.as_str(), stats.emoji_total(name)))
        .collect();
    let per_message: Vec<(&str, f64)> = totals
        .iter()
        .map(|&(name, total)| {
            let messages = stats.message_count.get(name).copied().unwrap_or(0);
            (name, total as f64 / messages.max(1) as f64)
        })
        .collect();

    let lover = highest(totals.iter().copied()).filter(|&(_, total)| total > 0);
    let intensive = highest(per_message.iter().copied()).filter(|&(_, ratio)| ratio > 0.0);

    if let Some((name, total)) = lover {
        if total > 10 {
            out.push(format!(
                "{name} uses emojis the most frequently, with a total of {total} emojis."
            ));
            if let Some(table) = stats.top_emojis.get(name) {
                let mut favourites: Vec<(&String, &usize)> = table.iter().collect();
                favourites.sort_by(|a, b| b.1.cmp(a.1));
                let top: Vec<&str> = favourites
                    .iter()
                    .take(3)
                    .map(|(emoji, _)| emoji.as_str())
                    .collect();
                out.push(format!("{name}'s favorite emojis are: {}", top.join(", ")));
            }
        }
    }

    if let Some((name, ratio)) = intensive {
        if lover.map(|(lover, _)| lover) != Some(name) && ratio > 1.5 {
            out.push(format!(
                "{name} uses the most emojis per message ({ratio:.1} on average)."
            ));
        }
    }
    out
}

fn topics(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    let Some(top) = stats.top_topics.first() else {
        return out;
    };
    out.push(format!(
        "The most discussed topic is \"{}\" with {} mentions.",
        top.topic, top.count
    ));

    let mention_count = |sender: &str, topic: &str| {
        stats
            .topics_by_sender
            .get(sender)
            .and_then(|counts| counts.iter().find(|c| c.topic == topic))
            .map_or(0, |c| c.count)
    };

    for sender in &stats.participants {
        let Some(counts) = stats.topics_by_sender.get(sender) else {
            continue;
        };
        let Some((topic, count)) =
            highest(counts.iter().map(|c| (c.topic.as_str(), c.count)))
        else {
            continue;
        };
        let distinctive = stats
            .participants
            .iter()
            .filter(|other| *other != sender)
            .all(|other| (mention_count(other.as_str(), topic) as f64) < count as f64 * 0.7);
        if distinctive && count > 5 {
            out.push(format!(
                "{sender} shows particular interest in \"{topic}\" with {count} mentions."
            ));
        }
    }
    out
}

fn peak_hours(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    for sender in &stats.participants {
        let Some(hours) = stats.chattiness_by_hour.get(sender) else {
            continue;
        };
        let Some((hour, _)) = highest(hours.iter().map(|(&hour, &count)| (hour, count))) else {
            continue;
        };
        let line = match hour {
            5..=11 => format!("{sender} appears to be a morning person, most active around {hour}:00."),
            12..=16 => format!("{sender} is most active during afternoon hours, peaking around {hour}:00."),
            17..=21 => format!("{sender} tends to be most active in the evening, around {hour}:00."),
            _ => format!("{sender} appears to be a night owl, most active around {hour}:00."),
        };
        out.push(line);
    }
    out
}

fn weekdays(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    for sender in &stats.participants {
        let Some(days) = stats.weekday_activity.get(sender) else {
            continue;
        };
        let counts = (0..7u32).map(|day| (WEEKDAYS[day as usize], days.get(&day).copied().unwrap_or(0)));
        let most = highest(counts.clone()).filter(|&(_, count)| count > 0);
        let least = lowest(counts.filter(|&(_, count)| count > 0));
        if let (Some((busy, max)), Some((quiet, min))) = (most, least) {
            if max as f64 > min as f64 * 1.5 {
                out.push(format!(
                    "{sender} is most active on {busy}s and least active on {quiet}s."
                ));
            }
        }
    }
    out
}

fn one_sided(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let counts: Vec<(&str, usize)> = by_participant(stats, &stats.message_count).collect();
    if counts.len() < 2 {
        return Vec::new();
    }

    let n = counts.len() as f64;
    let mean = counts.iter().map(|&(_, c)| c as f64).sum::<f64>() / n;
    let variance = counts
        .iter()
        .map(|&(_, c)| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    if mean <= 0.0 || variance.sqrt() / mean <= 0.5 {
        return Vec::new();
    }

    let (Some((top, most)), Some((bottom, least))) =
        (highest(counts.iter().copied()), lowest(counts.iter().copied()))
    else {
        return Vec::new();
    };
    if most >= least * 2 {
        vec![format!(
            "The conversation appears somewhat one-sided, with {top} sending {:.1}× more messages than {bottom}.",
            most as f64 / least.max(1) as f64
        )]
    } else {
        Vec::new()
    }
}

fn message_frequency(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let total = stats.total_messages();
    if total <= 10 {
        return Vec::new();
    }
    let days = stats.total_span_days();
    let per_day = total as f64 / days.max(1) as f64;
    let line = if days > 30 {
        format!(
            "Over {:.1} months, an average of {per_day:.1} messages were exchanged daily.",
            days as f64 / 30.0
        )
    } else {
        format!("Over {days} days, an average of {per_day:.1} messages were exchanged daily.")
    };
    vec![line]
}

/// First half vs second half of each sender's recorded response times.
fn response_trend(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    if stats.response_time_history.len() <= 10 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for sender in &stats.participants {
        let times: Vec<f64> = stats
            .response_time_history
            .iter()
            .filter(|entry| &entry.sender == sender)
            .map(|entry| entry.time as f64)
            .collect();
        if times.len() < 2 {
            continue;
        }
        let (early, late) = times.split_at(times.len() / 2);
        let before = early.iter().sum::<f64>() / early.len() as f64;
        let after = late.iter().sum::<f64>() / late.len() as f64;
        if before <= 0.0 {
            continue;
        }
        let change = (after - before).abs() / before * 100.0;
        if change > 15.0 {
            let direction = if after < before { "improved" } else { "slowed" };
            out.push(format!(
                "{sender}'s response time has {direction} by {change:.0}% since the conversation began."
            ));
        }
    }
    out
}

fn fastest_pair(ctx: &InsightContext<'_>) -> Vec<String> {
    let pairs = &ctx.stats.response_times_by_sender_pair;
    let best = lowest(
        pairs
            .iter()
            .filter(|pair| pair.count >= 3)
            .map(|pair| (pair, pair.average_time)),
    );
    best.map(|(pair, _)| {
        format!(
            "{} replies fastest to {}, averaging {} over {} replies.",
            pair.sender,
            pair.responding_to,
            readable_duration(pair.average_time),
            pair.count
        )
    })
    .into_iter()
    .collect()
}

fn questions(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    highest(by_participant(stats, &stats.question_count))
        .filter(|&(_, count)| count > 5)
        .map(|(name, count)| format!("{name} asks the most questions ({count} messages with a question mark)."))
        .into_iter()
        .collect()
}

fn engagement(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    if stats.total_span_days() < 7 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for (name, engagement) in by_participant(stats, &stats.engagement_stats) {
        if engagement.active_ratio > 0.7 {
            out.push(format!(
                "{name} shows up consistently, active on {:.0}% of days ({} days).",
                engagement.active_ratio * 100.0,
                engagement.days_active
            ));
        } else if engagement.active_ratio < 0.3 && engagement.total_messages > 50 {
            out.push(format!(
                "{name} chats in bursts, active on only {:.0}% of days but averaging {:.1} messages when present.",
                engagement.active_ratio * 100.0,
                engagement.average_messages_per_active_day
            ));
        }
    }
    out
}

fn conversation_summary(ctx: &InsightContext<'_>) -> Vec<String> {
    let patterns = &ctx.stats.conversation_patterns;
    if patterns.total_conversations == 0 {
        return Vec::new();
    }
    vec![format!(
        "The chat breaks into {} conversations averaging {:.1} messages and {} each ({:.0}% with more than one participant).",
        patterns.total_conversations,
        patterns.average_length,
        readable_duration(patterns.average_duration),
        patterns.multi_participant_ratio * 100.0
    )]
}

fn response_gaps(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let gaps = stats
        .participants
        .iter()
        .filter_map(|name| stats.response_gaps.get(name).map(|g| (name.as_str(), g.len())));
    highest(gaps)
        .filter(|&(_, count)| count > 5)
        .map(|(name, count)| {
            let total: i64 = stats
                .response_gaps
                .get(name)
                .map_or(0, |gaps| gaps.iter().map(|gap| gap.gap_time).sum());
            format!(
                "{name} most often replies after long silences ({count} replies after {}+ hours, averaging {}).",
                hours(ctx.config.response_ceiling_secs),
                readable_duration(total as f64 / count as f64)
            )
        })
        .into_iter()
        .collect()
}

fn favorite_emoji(ctx: &InsightContext<'_>) -> Vec<String> {
    let stats = ctx.stats;
    let mut out = Vec::new();
    for sender in &stats.participants {
        let Some(table) = stats.top_emojis.get(sender) else {
            continue;
        };
        if let Some((emoji, count)) = highest(table.iter().map(|(e, &c)| (e.as_str(), c))) {
            if count > 5 {
                out.push(format!("{sender}'s favorite emoji is {emoji} (used {count} times)."));
            }
        }
    }
    out
}

fn busiest_weekday(ctx: &InsightContext<'_>) -> Vec<String> {
    let by_day = &ctx.stats.messages_by_weekday;
    let counts = (0..7u32).map(|day| (WEEKDAYS[day as usize], by_day.get(&day).copied().unwrap_or(0)));
    highest(counts)
        .filter(|&(_, count)| count > 0)
        .map(|(day, count)| format!("The chat is most active on {day} with {count} messages."))
        .into_iter()
        .collect()
}
