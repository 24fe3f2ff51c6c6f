//! Synthetic WhatsApp export generator for benchmarking chatstats.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [ios|android]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt ios

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol",
    "Иван",
    "村上",
    "Dad 🔥",
    "+1 555 010 9999",
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "😍", "🥰", "😘", "🤔", "🙄", "😱", "🔥", "👍", "❤️", "💔", "🎉", "☕",
    "🏳️‍🌈", "🇺🇸", "👨‍👩‍👧‍👦", "🤷‍♀️", "👋🏽",
];

const OPENERS: &[&str] = &[
    "Good morning",
    "Hey",
    "So",
    "Honestly",
    "Quick update",
    "lol",
    "Wait",
    "Ok",
];

const PHRASES: &[&str] = &[
    "want to grab pizza for dinner",
    "the project deadline moved to friday",
    "I finished the movie last night",
    "my flight got delayed again",
    "the gym was packed today",
    "love you, see you soon",
    "work is killing me this week",
    "the doctor said it's nothing serious",
    "we should plan the beach trip",
    "did you pay the rent",
    "this song is amazing",
    "the weather is awful, so much rain",
    "thanks, that was really helpful",
    "damn, I missed the bus",
    "call me when you're free",
];

const SYSTEM_LINES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.",
    "Alice changed the group description",
    "Bob added Carol",
];

const MEDIA: &[&str] = &["<Media omitted>", "image omitted", "video omitted", "sticker omitted"];

#[derive(Clone, Copy)]
enum Style {
    Ios,
    Android,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);
    let style = match args.get(3).map_or("android", String::as_str) {
        "ios" => Style::Ios,
        "android" => Style::Android,
        other => {
            eprintln!("Unknown style: {}. Use 'ios' or 'android'", other);
            std::process::exit(1);
        }
    };

    println!("🧪 Chat Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    if let Err(e) = generate(count, output, style) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(count: usize, output: &str, style: Style) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;
    let mut clock = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default();

    let system = header(clock, style, None) + SYSTEM_LINES[0] + "\n";
    writer.write_all(system.as_bytes())?;

    let mut sender = SENDERS[0];
    for i in 0..count {
        clock = advance(&mut rng, clock);
        // Replies usually switch speaker.
        if rng.gen_bool(0.7) {
            sender = SENDERS[rng.gen_range(0..SENDERS.len())];
        }

        let line = if rng.gen_bool(0.02) {
            header(clock, style, Some(sender)) + MEDIA.choose(&mut rng).copied().unwrap_or_default()
        } else if rng.gen_bool(0.005) {
            header(clock, style, None) + SYSTEM_LINES.choose(&mut rng).copied().unwrap_or_default()
        } else {
            header(clock, style, Some(sender)) + &message(&mut rng)
        };

        bytes_written += line.len() + 1;
        writeln!(writer, "{}", line)?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

/// Mostly quick replies, with the occasional lunch break or quiet day.
fn advance(rng: &mut impl Rng, clock: NaiveDateTime) -> NaiveDateTime {
    let step = match rng.gen_range(0..100) {
        0..=79 => Duration::seconds(rng.gen_range(5..600)),
        80..=94 => Duration::minutes(rng.gen_range(10..240)),
        95..=98 => Duration::hours(rng.gen_range(4..20)),
        _ => Duration::days(rng.gen_range(1..4)),
    };
    clock + step
}

fn header(at: NaiveDateTime, style: Style, sender: Option<&str>) -> String {
    let stamp = match style {
        Style::Ios => at.format("[%-d/%-m/%Y, %-I:%M:%S %p] ").to_string(),
        Style::Android => at.format("%d/%m/%Y, %H:%M - ").to_string(),
    };
    match sender {
        Some(name) => format!("{stamp}{name}: "),
        None => stamp,
    }
}

fn message(rng: &mut impl Rng) -> String {
    let mut text = String::new();
    if rng.gen_bool(0.3) {
        text.push_str(OPENERS.choose(rng).copied().unwrap_or_default());
        text.push_str(", ");
    }
    text.push_str(PHRASES.choose(rng).copied().unwrap_or_default());
    if rng.gen_bool(0.2) {
        text.push('?');
    }
    for _ in 0..rng.gen_range(0..3) {
        text.push(' ');
        text.push_str(EMOJIS.choose(rng).copied().unwrap_or_default());
    }
    if rng.gen_bool(0.03) {
        // Continuation line
        text.push('\n');
        text.push_str(PHRASES.choose(rng).copied().unwrap_or_default());
    }
    text
}
