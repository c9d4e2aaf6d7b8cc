//! Word and emoji frequency analysis.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::{MEDIA_PLACEHOLDER, Selection, selected};
use crate::error::Result;
use crate::record::MessageRecord;

/// A set of words excluded from frequency analysis.
///
/// The list is plain configuration: callers build it from whatever source
/// they like and pass it in. Matching is exact and lowercase.
///
/// # Example
///
/// ```
/// use chatlens::stats::StopwordList;
///
/// let stopwords = StopwordList::from_text("the a an\nand or");
/// assert!(stopwords.contains("the"));
/// assert!(stopwords.contains("AND"));
/// assert!(!stopwords.contains("hello"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    /// Creates an empty list; nothing is filtered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from whitespace-separated words.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text
                .split_whitespace()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    /// Reads a whitespace-separated word list from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Returns `true` if `word` is in the list (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopwordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

/// Most frequent words in the selection, most common first.
///
/// System event records and media placeholders are excluded, words are
/// lowercased, and anything in `stopwords` is dropped. At most `limit`
/// entries are returned; ties are broken alphabetically.
///
/// # Example
///
/// ```
/// use chatlens::parser::LogParser;
/// use chatlens::stats::{Selection, StopwordList, most_common_words};
///
/// let records = LogParser::new().parse(
///     "1/2/23, 10:00 am - Alice: the cat sat\n1/2/23, 10:01 am - Bob: the cat ran",
/// );
/// let stopwords = StopwordList::from_text("the");
/// let words = most_common_words(&records, Selection::Overall, &stopwords, 10);
///
/// assert_eq!(words[0], ("cat".to_string(), 2));
/// ```
pub fn most_common_words(
    records: &[MessageRecord],
    selection: Selection<'_>,
    stopwords: &StopwordList,
    limit: usize,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in selected(records, selection) {
        if record.is_group_notification() || record.body == MEDIA_PLACEHOLDER {
            continue;
        }
        for word in record.body.split_whitespace() {
            let word = word.to_lowercase();
            if stopwords.contains(&word) {
                continue;
            }
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Per-character emoji frequencies in the selection, most common first.
///
/// Counts individual scalar values; joined sequences (family emoji, flags)
/// count once per component.
pub fn emoji_counts(records: &[MessageRecord], selection: Selection<'_>) -> Vec<(char, usize)> {
    let mut counts: HashMap<char, usize> = HashMap::new();

    for record in selected(records, selection) {
        for c in record.body.chars().filter(|&c| is_emoji(c)) {
            *counts.entry(c).or_default() += 1;
        }
    }

    let mut ranked: Vec<(char, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Returns `true` for scalar values in the common emoji blocks.
fn is_emoji(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1F1E6..=0x1F1FF   // regional indicators
            | 0x1F300..=0x1F5FF // symbols and pictographs
            | 0x1F600..=0x1F64F // emoticons
            | 0x1F680..=0x1F6FF // transport and map
            | 0x1F900..=0x1F9FF // supplemental symbols
            | 0x1FA70..=0x1FAFF // extended pictographs
            | 0x2600..=0x26FF   // miscellaneous symbols
            | 0x2700..=0x27BF   // dingbats
            | 0x2B50            // star
            | 0x2B55            // hollow circle
    )
}
