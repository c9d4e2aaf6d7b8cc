//! Descriptive statistics over parsed records.
//!
//! Everything in this module is simple grouping and counting over
//! [`MessageRecord`](crate::record::MessageRecord) slices. Each function takes
//! a [`Selection`] so the same computation can run for the whole chat or for
//! a single participant, and anything configurable (stopword lists, result
//! limits) is passed in explicitly rather than read from shared state.
//!
//! - [`summary`] — message, word, media, and link totals; participant lists
//! - [`timeline`] — message counts per month and per day
//! - [`activity`] — weekday and month activity, hour-by-weekday heatmap
//! - [`frequency`] — most common words and emoji

pub mod activity;
pub mod frequency;
pub mod summary;
pub mod timeline;

pub use activity::{ActivityHeatmap, month_activity, weekday_activity};
pub use frequency::{StopwordList, emoji_counts, most_common_words};
pub use summary::{Summary, UserShare, busiest_users, participants};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};

use crate::record::MessageRecord;

/// Placeholder body used by exports for messages whose attachment was not
/// included in the export.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Scope of a statistics computation: the whole chat or one participant.
///
/// # Example
///
/// ```
/// use chatlens::stats::Selection;
///
/// let overall = Selection::Overall;
/// let alice = Selection::User("Alice");
/// assert_ne!(overall, alice);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<'a> {
    /// Include every record.
    #[default]
    Overall,

    /// Include only records from this sender.
    User(&'a str),
}

impl Selection<'_> {
    /// Returns `true` if the record falls inside this selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Selection::Overall => true,
            Selection::User(name) => record.sender == *name,
        }
    }
}

/// Iterates the records inside a selection.
pub(crate) fn selected<'r>(
    records: &'r [MessageRecord],
    selection: Selection<'r>,
) -> impl Iterator<Item = &'r MessageRecord> {
    records.iter().filter(move |r| selection.matches(r))
}
