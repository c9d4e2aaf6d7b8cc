//! Chat log parser.
//!
//! [`LogParser`] turns a raw exported chat log into an ordered sequence of
//! [`MessageRecord`]s. Exports are noisy: timestamp formats drift between app
//! versions, messages span multiple lines, and system notifications carry no
//! sender. The parser is therefore lenient end to end. It never returns an
//! error for any text input; entries it cannot make sense of are dropped and
//! surfaced through [`ParseReport`] counters instead.
//!
//! # How parsing works
//!
//! 1. Every substring matching the configured timestamp grammar is located in
//!    one scan. The text between consecutive timestamps becomes that entry's
//!    segment; anything before the first timestamp is discarded.
//! 2. Each token is normalized (narrow no-break spaces replaced with ordinary
//!    spaces) and parsed with chrono. Tokens that fail to parse drop their
//!    segment and nothing else.
//! 3. Each surviving segment is split into sender and body on the first
//!    `": "` at the start of the segment. Segments without that prefix are
//!    system events and get the
//!    [`GROUP_NOTIFICATION`](crate::record::GROUP_NOTIFICATION) sentinel.
//!
//! # Example
//!
//! ```
//! use chatlens::parser::LogParser;
//! use chatlens::record::GROUP_NOTIFICATION;
//!
//! let log = "1/2/23, 10:00 am - Alice: hello\n1/2/23, 10:05 am - Alice added Bob\n";
//! let records = LogParser::new().parse(log);
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender, "Alice");
//! assert_eq!(records[0].body, "hello");
//! assert_eq!(records[1].sender, GROUP_NOTIFICATION);
//! ```

use chrono::NaiveDateTime;
use regex::Regex;
use thiserror::Error;

use crate::config::ParserConfig;
use crate::record::MessageRecord;

/// Splits a segment into sender and body.
///
/// The sender is the shortest prefix ending at the first `": "`, anchored at
/// the start of the segment, and may not itself contain a colon. A colon that
/// is not followed by whitespace (a URL scheme, a clock time in the body)
/// does not count as a sender separator.
const SENDER_PATTERN: &str = r"(?s)^([^:\r\n]+?):\s(.*)";

/// Non-fatal anomalies observed during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseWarning {
    /// Timestamp and segment counts disagreed; both lists were truncated to
    /// the shorter length and parsing continued.
    #[error(
        "timestamp/segment count mismatch: {timestamps} timestamps vs {segments} segments, kept {kept}"
    )]
    LengthMismatch {
        /// Number of timestamp tokens found.
        timestamps: usize,
        /// Number of message segments found.
        segments: usize,
        /// Number of pairs kept after truncation.
        kept: usize,
    },
}

/// Outcome of a parse: the records plus per-parse diagnostics.
///
/// The diagnostics never affect the records themselves; they exist so callers
/// can report how much of a noisy export survived.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Parsed records, in source order.
    pub records: Vec<MessageRecord>,

    /// Entries skipped because their timestamp token failed to parse.
    pub dropped_timestamps: usize,

    /// Non-fatal anomalies observed during the parse.
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    /// Returns `true` if nothing was dropped or truncated.
    pub fn is_clean(&self) -> bool {
        self.dropped_timestamps == 0 && self.warnings.is_empty()
    }
}

/// Parser for exported chat logs.
///
/// The parser holds its compiled patterns, so construct it once and reuse it
/// across inputs. Parsing is a pure function of the input text: the same blob
/// always yields the same record sequence.
///
/// # Example
///
/// ```
/// use chatlens::config::{ParserConfig, TimestampGrammar};
/// use chatlens::parser::LogParser;
///
/// let parser = LogParser::with_config(
///     ParserConfig::new().with_grammar(TimestampGrammar::MonthFirst12h),
/// );
/// let report = parser.parse_report("2/25/23, 4:05 pm - Alice: hi");
/// assert_eq!(report.records.len(), 1);
/// assert!(report.is_clean());
/// ```
pub struct LogParser {
    config: ParserConfig,
    token_re: Regex,
    sender_re: Regex,
}

impl LogParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with a custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            token_re: Regex::new(config.grammar.token_pattern()).unwrap(),
            sender_re: Regex::new(SENDER_PATTERN).unwrap(),
            config,
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a raw export into records, discarding diagnostics.
    ///
    /// Never fails: empty input, input without a single valid timestamp, or
    /// arbitrarily malformed text all yield a (possibly empty) sequence.
    pub fn parse(&self, raw: &str) -> Vec<MessageRecord> {
        self.parse_report(raw).records
    }

    /// Parses a raw export and returns records plus diagnostics.
    pub fn parse_report(&self, raw: &str) -> ParseReport {
        let (timestamps, segments) = self.tokenize(raw);
        self.assemble(timestamps, segments)
    }

    /// Splits the raw text at timestamp token boundaries.
    ///
    /// Returns the token texts and the segments following each token. The
    /// text before the first token is not part of any entry and is dropped.
    fn tokenize<'a>(&self, raw: &'a str) -> (Vec<&'a str>, Vec<&'a str>) {
        let matches: Vec<regex::Match<'a>> = self.token_re.find_iter(raw).collect();

        let mut timestamps = Vec::with_capacity(matches.len());
        let mut segments = Vec::with_capacity(matches.len());

        for (i, m) in matches.iter().enumerate() {
            let segment_end = matches.get(i + 1).map_or(raw.len(), |next| next.start());
            timestamps.push(m.as_str());
            segments.push(&raw[m.end()..segment_end]);
        }

        (timestamps, segments)
    }

    /// Pairs timestamps with segments and builds records.
    ///
    /// Unequal list lengths are reconciled by truncating to the shorter one,
    /// recorded as a warning. Tokens chrono rejects drop their pair.
    fn assemble(&self, mut timestamps: Vec<&str>, mut segments: Vec<&str>) -> ParseReport {
        let mut report = ParseReport::default();

        if timestamps.len() != segments.len() {
            let kept = timestamps.len().min(segments.len());
            report.warnings.push(ParseWarning::LengthMismatch {
                timestamps: timestamps.len(),
                segments: segments.len(),
                kept,
            });
            timestamps.truncate(kept);
            segments.truncate(kept);
        }

        let format = self.config.grammar.chrono_format();
        report.records.reserve(timestamps.len());

        for (token, segment) in timestamps.into_iter().zip(segments) {
            let normalized = normalize_token(token);
            match NaiveDateTime::parse_from_str(&normalized, format) {
                Ok(timestamp) => report.records.push(self.split_segment(timestamp, segment)),
                Err(_) => report.dropped_timestamps += 1,
            }
        }

        report
    }

    /// Splits one segment into sender and body.
    ///
    /// The leading ` - ` separator some exports place between the timestamp
    /// and the entry is stripped before matching. Bodies keep embedded
    /// newlines; only the trailing record separator is trimmed.
    fn split_segment(&self, timestamp: NaiveDateTime, segment: &str) -> MessageRecord {
        let trimmed = segment.trim_start();
        let trimmed = match trimmed.strip_prefix('-') {
            Some(rest) => rest.trim_start(),
            None => trimmed,
        };

        match self.sender_re.captures(trimmed) {
            Some(caps) => MessageRecord::new(
                timestamp,
                caps[1].trim(),
                caps[2].trim_end(),
            ),
            None => MessageRecord::notification(timestamp, trimmed.trim_end()),
        }
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces the no-break space variants some export locales place before the
/// am/pm marker with an ordinary space, so chrono can parse the token.
fn normalize_token(token: &str) -> String {
    token.replace(['\u{202f}', '\u{a0}'], " ")
}
