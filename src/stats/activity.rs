//! Activity patterns: which weekdays, months, and hours a chat is alive in.

use std::collections::HashMap;

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use super::{Selection, selected};
use crate::record::{MessageRecord, period_label, weekday_name};

/// Message counts per weekday name, most active first.
///
/// Ties are broken alphabetically so the ordering is deterministic.
pub fn weekday_activity(
    records: &[MessageRecord],
    selection: Selection<'_>,
) -> Vec<(String, usize)> {
    ranked_counts(selected(records, selection).map(|r| r.day_name.as_str()))
}

/// Message counts per month name, most active first.
pub fn month_activity(
    records: &[MessageRecord],
    selection: Selection<'_>,
) -> Vec<(String, usize)> {
    ranked_counts(selected(records, selection).map(|r| r.month.as_str()))
}

fn ranked_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect()
}

/// Message counts bucketed by weekday and hour-wide period.
///
/// Rows are the seven weekdays starting at Monday; columns are the 24 hour
/// buckets `"00-01"` through `"23-00"`.
///
/// # Example
///
/// ```
/// use chatlens::parser::LogParser;
/// use chatlens::stats::{ActivityHeatmap, Selection};
/// use chrono::Weekday;
///
/// // 1 Feb 2023 is a Wednesday.
/// let records = LogParser::new().parse("1/2/23, 10:00 am - Alice: hi");
/// let heatmap = ActivityHeatmap::compute(&records, Selection::Overall);
///
/// assert_eq!(heatmap.count(Weekday::Wed, 10), 1);
/// assert_eq!(heatmap.count(Weekday::Thu, 10), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHeatmap {
    counts: [[usize; 24]; 7],
}

impl ActivityHeatmap {
    /// Builds the heatmap for one selection.
    pub fn compute(records: &[MessageRecord], selection: Selection<'_>) -> Self {
        let mut counts = [[0usize; 24]; 7];
        for record in selected(records, selection) {
            let row = record.timestamp.weekday().num_days_from_monday() as usize;
            counts[row][(record.hour % 24) as usize] += 1;
        }
        Self { counts }
    }

    /// Returns the count for one weekday and hour of day.
    pub fn count(&self, weekday: Weekday, hour: u32) -> usize {
        self.counts[weekday.num_days_from_monday() as usize][(hour % 24) as usize]
    }

    /// Returns one weekday's 24 hour buckets, midnight first.
    pub fn row(&self, weekday: Weekday) -> &[usize; 24] {
        &self.counts[weekday.num_days_from_monday() as usize]
    }

    /// Total number of messages in the heatmap.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Row labels, Monday first.
    pub fn weekday_labels() -> [&'static str; 7] {
        [
            weekday_name(Weekday::Mon),
            weekday_name(Weekday::Tue),
            weekday_name(Weekday::Wed),
            weekday_name(Weekday::Thu),
            weekday_name(Weekday::Fri),
            weekday_name(Weekday::Sat),
            weekday_name(Weekday::Sun),
        ]
    }

    /// Column labels, `"00-01"` through `"23-00"`.
    pub fn period_labels() -> Vec<String> {
        (0..24).map(period_label).collect()
    }
}
