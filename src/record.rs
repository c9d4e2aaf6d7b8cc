//! Structured representation of a single chat log entry.
//!
//! This module provides [`MessageRecord`], the typed output of the log parser.
//! Each record pairs a parsed timestamp with a sender and message body, plus a
//! set of calendar fields derived once at construction time. The derived
//! fields exist so that aggregation code can group records by date, weekday,
//! month, or hour bucket without touching chrono again.
//!
//! # Examples
//!
//! ```
//! use chatlens::record::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 30, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, "Alice", "see you tomorrow");
//!
//! assert_eq!(record.year, 2023);
//! assert_eq!(record.month, "February");
//! assert_eq!(record.day_name, "Wednesday");
//! assert_eq!(record.period, "23-00");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Sentinel sender used for system events with no human author
/// (joins, leaves, subject changes, encryption notices).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// One parsed chat entry.
///
/// Records are constructed in a single pass over the raw export and are not
/// modified afterwards. The calendar fields (`date` through `period`) are
/// cached projections of `timestamp`; they are never set independently.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | Parsed date and time of the entry |
/// | `sender` | Author name, or [`GROUP_NOTIFICATION`] for system events |
/// | `body` | Message text, with the `sender: ` prefix stripped |
/// | `date` | Calendar date of `timestamp` |
/// | `year`, `month_num`, `day` | Numeric date components |
/// | `month`, `day_name` | Full English month and weekday names |
/// | `hour`, `minute` | Time components |
/// | `period` | Hour-wide bucket label, e.g. `"14-15"` or `"23-00"` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the entry was written, as recorded in the export.
    pub timestamp: NaiveDateTime,

    /// Author of the entry, or [`GROUP_NOTIFICATION`].
    pub sender: String,

    /// Message text. May contain embedded newlines for multi-line messages.
    pub body: String,

    /// Calendar date of `timestamp`.
    pub date: NaiveDate,

    /// Calendar year.
    pub year: i32,

    /// Month number, 1 to 12.
    pub month_num: u32,

    /// Full English month name, e.g. `"January"`.
    pub month: String,

    /// Day of month, 1 to 31.
    pub day: u32,

    /// Full English weekday name, e.g. `"Monday"`.
    pub day_name: String,

    /// Hour of day, 0 to 23.
    pub hour: u32,

    /// Minute of hour, 0 to 59.
    pub minute: u32,

    /// Hour bucket label, wrapping at midnight (`"23-00"`).
    pub period: String,
}

impl MessageRecord {
    /// Creates a record and computes all derived calendar fields.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let hour = timestamp.hour();
        Self {
            date: timestamp.date(),
            year: timestamp.year(),
            month_num: timestamp.month(),
            month: month_name(timestamp.month()).to_string(),
            day: timestamp.day(),
            day_name: weekday_name(timestamp.weekday()).to_string(),
            hour,
            minute: timestamp.minute(),
            period: period_label(hour),
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Creates a system event record with the [`GROUP_NOTIFICATION`] sender.
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, body)
    }

    /// Returns `true` if this record is a system event rather than a message
    /// written by a participant.
    pub fn is_group_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }
}

/// Formats the hour-wide bucket label for an hour of day.
///
/// The upper bound wraps at midnight, so hour 23 maps to `"23-00"`.
///
/// ```
/// use chatlens::record::period_label;
///
/// assert_eq!(period_label(5), "05-06");
/// assert_eq!(period_label(23), "23-00");
/// ```
pub fn period_label(hour: u32) -> String {
    let hour = hour % 24;
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// Full English month name for a 1-based month number.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => panic!("month number out of range: {month}"),
    }
}

/// Full English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
