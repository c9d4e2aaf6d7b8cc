//! # chatlens CLI
//!
//! Terminal report over an exported chat log: parses the export and prints
//! the headline totals, activity breakdowns, and frequency rankings.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::cli::{Args, ExportFormat};
use chatlens::config::{ParserConfig, TimestampGrammar};
use chatlens::error::{ChatlensError, Result};
use chatlens::output::{write_csv, write_json};
use chatlens::parser::LogParser;
use chatlens::record::MessageRecord;
use chatlens::stats::{
    ActivityHeatmap, Selection, StopwordList, Summary, busiest_users, emoji_counts,
    monthly_timeline, most_common_words, month_activity, participants, weekday_activity,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = <Args as ClapParser>::parse();

    let grammar: TimestampGrammar = args
        .grammar
        .parse()
        .map_err(|_| ChatlensError::unknown_grammar(&args.grammar))?;

    println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.input);
    println!("🕐 Grammar:  {}", grammar);

    let raw = fs::read_to_string(&args.input)?;

    let parser = LogParser::with_config(ParserConfig::new().with_grammar(grammar));
    let parse_start = Instant::now();
    let report = parser.parse_report(&raw);
    let parse_time = parse_start.elapsed();

    for warning in &report.warnings {
        eprintln!("⚠️  Warning: {}", warning);
    }
    if report.dropped_timestamps > 0 {
        eprintln!(
            "⚠️  Warning: skipped {} entries with unparseable timestamps",
            report.dropped_timestamps
        );
    }

    let records = report.records;
    println!(
        "   Parsed {} entries ({:.2}s)",
        records.len(),
        parse_time.as_secs_f64()
    );
    println!();

    if records.is_empty() {
        println!("No messages found. Check the timestamp grammar (--grammar).");
        return Ok(());
    }

    let users = participants(&records);
    let selection = match args.user.as_deref() {
        Some(name) => {
            if !users.iter().any(|u| u == name) {
                eprintln!("⚠️  Warning: '{}' never appears in this chat", name);
            }
            Selection::User(name)
        }
        None => Selection::Overall,
    };

    let stopwords = match args.stopwords.as_deref() {
        Some(path) => StopwordList::load(path)?,
        None => StopwordList::new(),
    };

    print_summary(&records, selection, &users);
    print_timeline(&records, selection);
    print_activity(&records, selection);
    if args.heatmap {
        print_heatmap(&records, selection);
    }
    if selection == Selection::Overall {
        print_busiest(&records);
    }
    print_words(&records, selection, &stopwords, args.top);
    print_emoji(&records, selection, args.top);

    if let Some(path) = args.export.as_deref() {
        export_records(&records, path, args.format)?;
    }

    Ok(())
}

fn print_summary(records: &[MessageRecord], selection: Selection<'_>, users: &[String]) {
    let summary = Summary::compute(records, selection);

    println!("📊 Top statistics");
    if let Selection::User(name) = selection {
        println!("   Participant:    {}", name);
    } else {
        println!("   Participants:   {}", users.len());
    }
    println!("   Messages:       {}", summary.messages);
    println!("   Words:          {}", summary.words);
    println!("   Media shared:   {}", summary.media_messages);
    println!("   Links shared:   {}", summary.links);
    println!();
}

fn print_timeline(records: &[MessageRecord], selection: Selection<'_>) {
    let timeline = monthly_timeline(records, selection);
    if timeline.is_empty() {
        return;
    }

    println!("📅 Monthly timeline");
    for month in &timeline {
        println!("   {:<16} {}", month.label, month.messages);
    }
    println!();
}

fn print_activity(records: &[MessageRecord], selection: Selection<'_>) {
    let by_weekday = weekday_activity(records, selection);
    let by_month = month_activity(records, selection);

    println!("🗓  Activity");
    if let Some((day, count)) = by_weekday.first() {
        println!("   Busiest day:    {} ({} messages)", day, count);
    }
    if let Some((month, count)) = by_month.first() {
        println!("   Busiest month:  {} ({} messages)", month, count);
    }
    println!();
}

fn print_heatmap(records: &[MessageRecord], selection: Selection<'_>) {
    use chrono::Weekday;

    let heatmap = ActivityHeatmap::compute(records, selection);
    let weekdays = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    println!("🔥 Weekly activity heatmap (rows: weekday, columns: hour)");
    print!("   {:<10}", "");
    for hour in 0..24 {
        print!("{:>4}", hour);
    }
    println!();

    for (label, weekday) in ActivityHeatmap::weekday_labels().iter().zip(weekdays) {
        print!("   {:<10}", label);
        for &count in heatmap.row(weekday) {
            print!("{:>4}", count);
        }
        println!();
    }
    println!();
}

fn print_busiest(records: &[MessageRecord]) {
    let ranked = busiest_users(records, 5);
    if ranked.is_empty() {
        return;
    }

    println!("👥 Busiest participants");
    for share in &ranked {
        println!(
            "   {:<20} {:>6} messages ({:.2}%)",
            share.name, share.messages, share.percent
        );
    }
    println!();
}

fn print_words(
    records: &[MessageRecord],
    selection: Selection<'_>,
    stopwords: &StopwordList,
    top: usize,
) {
    let words = most_common_words(records, selection, stopwords, top);
    if words.is_empty() {
        return;
    }

    println!("📝 Most common words");
    for (word, count) in &words {
        println!("   {:<20} {}", word, count);
    }
    println!();
}

fn print_emoji(records: &[MessageRecord], selection: Selection<'_>, top: usize) {
    let mut emoji = emoji_counts(records, selection);
    emoji.truncate(top);
    if emoji.is_empty() {
        return;
    }

    println!("😀 Emoji");
    for (c, count) in &emoji {
        println!("   {}  {}", c, count);
    }
    println!();
}

fn export_records(records: &[MessageRecord], path: &str, format: ExportFormat) -> Result<()> {
    let write_start = Instant::now();
    match format {
        ExportFormat::Csv => write_csv(records, path)?,
        ExportFormat::Json => write_json(records, path)?,
    }
    println!(
        "💾 Exported {} records to {} ({:.2}s)",
        records.len(),
        path,
        write_start.elapsed().as_secs_f64()
    );
    Ok(())
}
