//! # Chatlens
//!
//! A Rust library for turning exported chat logs into structured records and
//! computing descriptive statistics over them.
//!
//! ## Overview
//!
//! Chat apps export conversations as loosely delimited text: mixed timestamp
//! locales, multi-line messages, and system notifications with no author.
//! Chatlens parses that text into typed [`MessageRecord`]s and provides the
//! grouping and counting layers a dashboard needs: message totals, timelines,
//! activity heatmaps, word and emoji frequencies.
//!
//! The parser is deliberately lenient. Real exports are noisy, so entries
//! with unparseable timestamps are dropped and count mismatches are truncated
//! with a warning; no text input ever makes the parse fail.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let log = "1/2/23, 10:00 am - Alice: hello\n\
//!            1/2/23, 10:05 am - Alice added Bob\n";
//!
//! let records = LogParser::new().parse(log);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender, "Alice");
//! assert_eq!(records[1].sender, GROUP_NOTIFICATION);
//!
//! let summary = Summary::compute(&records, Selection::Overall);
//! assert_eq!(summary.messages, 2);
//! ```
//!
//! ## Choosing a timestamp grammar
//!
//! Export formats drift between app versions and locales, so the timestamp
//! grammar is configuration rather than a constant:
//!
//! ```rust
//! use chatlens::config::{ParserConfig, TimestampGrammar};
//! use chatlens::parser::LogParser;
//!
//! let parser = LogParser::with_config(
//!     ParserConfig::new().with_grammar(TimestampGrammar::MonthFirst12h),
//! );
//! let records = parser.parse("2/25/23, 4:05 pm - Alice: hi");
//! assert_eq!(records[0].month, "February");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`LogParser`], [`ParseReport`](parser::ParseReport)
//! - [`record`] — [`MessageRecord`], derived calendar fields
//! - [`config`] — [`ParserConfig`](config::ParserConfig),
//!   [`TimestampGrammar`](config::TimestampGrammar)
//! - [`stats`] — summaries, timelines, activity maps, frequencies
//! - [`output`] — feature-gated CSV/JSON record export
//! - [`cli`] — CLI types (requires the `cli` feature)
//! - [`error`] — [`ChatlensError`], [`Result`]

pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod record;
pub mod stats;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use parser::LogParser;
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core parser and record types
    pub use crate::parser::{LogParser, ParseReport, ParseWarning};
    pub use crate::record::{GROUP_NOTIFICATION, MessageRecord};

    // Configuration
    pub use crate::config::{ParserConfig, TimestampGrammar};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Statistics
    pub use crate::stats::{
        ActivityHeatmap, DailyCount, MonthlyCount, Selection, StopwordList, Summary, UserShare,
        busiest_users, daily_timeline, emoji_counts, month_activity, monthly_timeline,
        most_common_words, participants, weekday_activity,
    };

    // Output writers
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
