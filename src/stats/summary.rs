//! Headline totals and participant rankings.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{MEDIA_PLACEHOLDER, Selection, selected};
use crate::record::MessageRecord;

/// Matches one shared link inside a message body.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());

/// Headline totals for a chat or a single participant.
///
/// # Example
///
/// ```
/// use chatlens::parser::LogParser;
/// use chatlens::stats::{Selection, Summary};
///
/// let records = LogParser::new().parse(
///     "1/2/23, 10:00 am - Alice: hello there\n1/2/23, 10:01 am - Bob: hi",
/// );
/// let summary = Summary::compute(&records, Selection::Overall);
///
/// assert_eq!(summary.messages, 2);
/// assert_eq!(summary.words, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records in the selection.
    pub messages: usize,

    /// Number of whitespace-separated words across all bodies.
    pub words: usize,

    /// Number of media placeholder messages.
    pub media_messages: usize,

    /// Number of links shared.
    pub links: usize,
}

impl Summary {
    /// Computes the totals for one selection.
    pub fn compute(records: &[MessageRecord], selection: Selection<'_>) -> Self {
        let mut summary = Self::default();

        for record in selected(records, selection) {
            summary.messages += 1;
            summary.words += record.body.split_whitespace().count();
            if record.body == MEDIA_PLACEHOLDER {
                summary.media_messages += 1;
            }
            summary.links += URL_RE.find_iter(&record.body).count();
        }

        summary
    }
}

/// Sorted unique participant names, excluding the system event sentinel.
///
/// This is the list a caller would offer as selectable analysis targets.
pub fn participants(records: &[MessageRecord]) -> Vec<String> {
    let names: BTreeSet<&str> = records
        .iter()
        .filter(|r| !r.is_group_notification())
        .map(|r| r.sender.as_str())
        .collect();

    names.into_iter().map(String::from).collect()
}

/// One sender's share of the chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    /// Sender name.
    pub name: String,

    /// Number of messages from this sender.
    pub messages: usize,

    /// Percentage of all messages, rounded to two decimals.
    pub percent: f64,
}

/// Ranks senders by message count, most active first.
///
/// Ties are broken alphabetically so the ranking is deterministic. At most
/// `limit` entries are returned.
pub fn busiest_users(records: &[MessageRecord], limit: usize) -> Vec<UserShare> {
    let total = records.len();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.sender.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(name, messages)| UserShare {
            name: name.to_string(),
            messages,
            percent: round2(messages as f64 / total as f64 * 100.0),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
