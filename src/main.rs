//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstats::cli::Args;
use chatstats::format::{OutputFormat, write_to_format};
use chatstats::lexicon::Lexicon;
use chatstats::{Analyzer, ChatStatsError};

/// Prints to stdout unless `--quiet` was given.
macro_rules! say {
    ($args:expr) => {
        if !$args.quiet {
            println!();
        }
    };
    ($args:expr, $($fmt:tt)+) => {
        if !$args.quiet {
            println!($($fmt)+);
        }
    };
}

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for the report.
fn init_logging(args: &Args) {
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatStatsError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();

    say!(args, "📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    say!(args, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    say!(args, "📂 Input:   {}", args.input);
    say!(args, "💾 Output:  {}", output_path);
    say!(args, "📄 Format:  {}", format);

    let config = args.analyzer_config()?;
    let filter = args.filter_config()?;
    if let Some(after) = &args.after {
        say!(args, "📅 After:   {}", after);
    }
    if let Some(before) = &args.before {
        say!(args, "📅 Before:  {}", before);
    }

    let mut analyzer = Analyzer::new().with_config(config).with_filter(filter);
    if let Some(path) = &args.lexicon {
        say!(args, "📚 Lexicon: {}", path);
        analyzer = analyzer.with_lexicon(Lexicon::from_file(path)?);
    }
    say!(args);

    say!(args, "⏳ Analyzing...");
    let analyze_start = Instant::now();
    let stats = analyzer.analyze_file(&args.input)?;
    say!(
        args,
        "   Found {} messages from {} participants ({:.2}s)",
        stats.total_messages(),
        stats.participants.len(),
        analyze_start.elapsed().as_secs_f64()
    );

    say!(args, "💾 Writing {}...", format);
    let write_start = Instant::now();
    write_to_format(&stats, &output_path, format, &args.output_config())?;
    say!(
        args,
        "   Written in {:.2}s",
        write_start.elapsed().as_secs_f64()
    );

    say!(args);
    say!(args, "✅ Done! Output saved to {}", output_path);

    if stats.is_empty() {
        say!(args, "⚠️  No messages found in {}", args.input);
        return Ok(());
    }

    say!(args);
    say!(args, "📈 Summary:");
    say!(
        args,
        "   Period:    {} to {} ({} days)",
        stats.first_date.format("%Y-%m-%d"),
        stats.last_date.format("%Y-%m-%d"),
        stats.total_span_days()
    );
    for sender in &stats.participants {
        say!(
            args,
            "   {}: {} messages, {} words",
            sender,
            stats.message_count.get(sender).copied().unwrap_or(0),
            stats.word_count.get(sender).copied().unwrap_or(0)
        );
    }
    say!(
        args,
        "   Conversations: {}",
        stats.conversation_patterns.total_conversations
    );

    if !stats.ai_insights.is_empty() {
        say!(args);
        say!(args, "💡 Insights:");
        for insight in &stats.ai_insights {
            say!(args, "   • {}", insight);
        }
    }

    let total_time = total_start.elapsed();
    say!(args);
    say!(args, "⚡ Performance:");
    say!(args, "   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = stats.total_messages() as f64 / total_time.as_secs_f64().max(f64::EPSILON);
    say!(args, "   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}
