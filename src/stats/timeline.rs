//! Message counts over calendar time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Selection, selected};
use crate::record::{MessageRecord, month_name};

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// Calendar year.
    pub year: i32,

    /// Month number, 1 to 12.
    pub month_num: u32,

    /// Full English month name.
    pub month: String,

    /// Number of messages in this month.
    pub messages: usize,

    /// Axis label, e.g. `"February-2023"`.
    pub label: String,
}

/// Message count for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// Calendar date.
    pub date: NaiveDate,

    /// Number of messages on this date.
    pub messages: usize,
}

/// Message counts per month, in chronological order.
///
/// # Example
///
/// ```
/// use chatlens::parser::LogParser;
/// use chatlens::stats::{Selection, monthly_timeline};
///
/// let records = LogParser::new().parse(
///     "1/2/23, 10:00 am - Alice: hi\n5/3/23, 9:00 am - Bob: hello",
/// );
/// let timeline = monthly_timeline(&records, Selection::Overall);
///
/// assert_eq!(timeline.len(), 2);
/// assert_eq!(timeline[0].label, "February-2023");
/// assert_eq!(timeline[1].label, "March-2023");
/// ```
pub fn monthly_timeline(
    records: &[MessageRecord],
    selection: Selection<'_>,
) -> Vec<MonthlyCount> {
    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in selected(records, selection) {
        *counts.entry((record.year, record.month_num)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((year, month_num), messages)| {
            let month = month_name(month_num).to_string();
            let label = format!("{}-{}", month, year);
            MonthlyCount {
                year,
                month_num,
                month,
                messages,
                label,
            }
        })
        .collect()
}

/// Message counts per calendar date, in chronological order.
pub fn daily_timeline(records: &[MessageRecord], selection: Selection<'_>) -> Vec<DailyCount> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in selected(records, selection) {
        *counts.entry(record.date).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LogParser;

    fn fixture() -> Vec<MessageRecord> {
        LogParser::new().parse(
            "1/2/23, 10:00 am - Alice: one\n\
             15/2/23, 11:00 am - Bob: two\n\
             15/2/23, 11:30 am - Alice: three\n\
             3/4/23, 9:00 am - Alice: four\n\
             7/1/24, 8:00 pm - Bob: five\n",
        )
    }

    #[test]
    fn test_monthly_timeline_chronological() {
        let records = fixture();
        let timeline = monthly_timeline(&records, Selection::Overall);

        let labels: Vec<&str> = timeline.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["February-2023", "April-2023", "January-2024"]);

        assert_eq!(timeline[0].messages, 3);
        assert_eq!(timeline[0].year, 2023);
        assert_eq!(timeline[0].month_num, 2);
        assert_eq!(timeline[1].messages, 1);
        assert_eq!(timeline[2].messages, 1);
    }

    #[test]
    fn test_monthly_timeline_year_boundary_ordering() {
        // December 2023 sorts before January 2024.
        let records = LogParser::new().parse(
            "7/1/24, 10:00 am - Alice: new year\n25/12/23, 10:00 am - Bob: holidays\n",
        );
        let timeline = monthly_timeline(&records, Selection::Overall);
        assert_eq!(timeline[0].label, "December-2023");
        assert_eq!(timeline[1].label, "January-2024");
    }

    #[test]
    fn test_monthly_timeline_for_user() {
        let records = fixture();
        let timeline = monthly_timeline(&records, Selection::User("Bob"));

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].label, "February-2023");
        assert_eq!(timeline[0].messages, 1);
    }

    #[test]
    fn test_daily_timeline() {
        let records = fixture();
        let timeline = daily_timeline(&records, Selection::Overall);

        assert_eq!(timeline.len(), 4);
        assert_eq!(
            timeline[0].date,
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
        );
        assert_eq!(timeline[1].messages, 2);
    }

    #[test]
    fn test_empty_selection_gives_empty_timeline() {
        let records = fixture();
        assert!(monthly_timeline(&records, Selection::User("Nobody")).is_empty());
        assert!(daily_timeline(&[], Selection::Overall).is_empty());
    }
}
