//! Parser configuration types.
//!
//! Chat export apps change their timestamp format between versions and
//! locales, so the grammar the parser tokenizes with is configurable rather
//! than hard-coded. [`TimestampGrammar`] selects the token shape and the
//! matching chrono parse format; [`ParserConfig`] carries the grammar into
//! [`LogParser`](crate::parser::LogParser).
//!
//! # Example
//!
//! ```
//! use chatlens::config::{ParserConfig, TimestampGrammar};
//! use chatlens::parser::LogParser;
//!
//! let config = ParserConfig::new().with_grammar(TimestampGrammar::MonthFirst12h);
//! let parser = LogParser::with_config(config);
//! let records = parser.parse("2/25/23, 4:05 pm - Alice: hi");
//! assert_eq!(records[0].month, "February");
//! ```

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp grammar variants seen across export locales and app versions.
///
/// Every variant uses `/`-separated dates with a two-digit year followed by
/// `, ` and a clock time; they differ in date component order and in whether
/// the clock is 12-hour with an am/pm marker or plain 24-hour.
///
/// # Example
///
/// ```
/// use chatlens::config::TimestampGrammar;
/// use std::str::FromStr;
///
/// let grammar = TimestampGrammar::from_str("month-first-12h").unwrap();
/// assert_eq!(grammar, TimestampGrammar::MonthFirst12h);
///
/// // Aliases are supported
/// let grammar = TimestampGrammar::from_str("mdy").unwrap();
/// assert_eq!(grammar, TimestampGrammar::MonthFirst12h);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TimestampGrammar {
    /// `D/M/YY, H:MM am|pm`, e.g. `25/2/23, 4:05 pm`
    #[default]
    #[serde(rename = "day-first-12h", alias = "dmy")]
    DayFirst12h,

    /// `M/D/YY, H:MM am|pm`, e.g. `2/25/23, 4:05 pm`
    #[serde(rename = "month-first-12h", alias = "mdy")]
    MonthFirst12h,

    /// `D/M/YY, H:MM`, e.g. `25/2/23, 16:05`
    #[serde(rename = "day-first-24h", alias = "dmy-24h")]
    DayFirst24h,

    /// `M/D/YY, H:MM`, e.g. `2/25/23, 16:05`
    #[serde(rename = "month-first-24h", alias = "mdy-24h")]
    MonthFirst24h,
}

impl TimestampGrammar {
    /// Returns the regex pattern matching one timestamp token of this grammar.
    ///
    /// `\s` covers the narrow no-break space some exports place before the
    /// am/pm marker; tokens are normalized before date parsing.
    pub fn token_pattern(self) -> &'static str {
        match self {
            TimestampGrammar::DayFirst12h | TimestampGrammar::MonthFirst12h => {
                r"\d{1,2}/\d{1,2}/\d{2},\s\d{1,2}:\d{1,2}\s[APap][Mm]"
            }
            TimestampGrammar::DayFirst24h | TimestampGrammar::MonthFirst24h => {
                r"\d{1,2}/\d{1,2}/\d{2},\s\d{1,2}:\d{1,2}"
            }
        }
    }

    /// Returns the chrono format string for parsing a normalized token.
    ///
    /// chrono accepts unpadded numeric fields and matches the am/pm marker
    /// case-insensitively, so one format per grammar is enough.
    pub fn chrono_format(self) -> &'static str {
        match self {
            TimestampGrammar::DayFirst12h => "%d/%m/%y, %I:%M %p",
            TimestampGrammar::MonthFirst12h => "%m/%d/%y, %I:%M %p",
            TimestampGrammar::DayFirst24h => "%d/%m/%y, %H:%M",
            TimestampGrammar::MonthFirst24h => "%m/%d/%y, %H:%M",
        }
    }

    /// Renders a timestamp as one token of this grammar.
    ///
    /// Useful for generating test fixtures and benchmark data.
    pub fn render(self, ts: NaiveDateTime) -> String {
        use chrono::Datelike;

        let year = ts.year().rem_euclid(100);
        let (first, second) = match self {
            TimestampGrammar::DayFirst12h | TimestampGrammar::DayFirst24h => {
                (ts.day(), ts.month())
            }
            TimestampGrammar::MonthFirst12h | TimestampGrammar::MonthFirst24h => {
                (ts.month(), ts.day())
            }
        };

        match self {
            TimestampGrammar::DayFirst12h | TimestampGrammar::MonthFirst12h => {
                let (is_pm, hour12) = ts.hour12();
                let marker = if is_pm { "pm" } else { "am" };
                format!(
                    "{}/{}/{:02}, {}:{:02} {}",
                    first,
                    second,
                    year,
                    hour12,
                    ts.minute(),
                    marker
                )
            }
            TimestampGrammar::DayFirst24h | TimestampGrammar::MonthFirst24h => {
                format!(
                    "{}/{}/{:02}, {}:{:02}",
                    first,
                    second,
                    year,
                    ts.hour(),
                    ts.minute()
                )
            }
        }
    }

    /// Returns all grammar names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "day-first-12h",
            "dmy",
            "month-first-12h",
            "mdy",
            "day-first-24h",
            "dmy-24h",
            "month-first-24h",
            "mdy-24h",
        ]
    }

    /// Returns all grammar variants.
    pub fn all() -> &'static [TimestampGrammar] {
        &[
            TimestampGrammar::DayFirst12h,
            TimestampGrammar::MonthFirst12h,
            TimestampGrammar::DayFirst24h,
            TimestampGrammar::MonthFirst24h,
        ]
    }
}

impl std::fmt::Display for TimestampGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampGrammar::DayFirst12h => write!(f, "day-first-12h"),
            TimestampGrammar::MonthFirst12h => write!(f, "month-first-12h"),
            TimestampGrammar::DayFirst24h => write!(f, "day-first-24h"),
            TimestampGrammar::MonthFirst24h => write!(f, "month-first-24h"),
        }
    }
}

impl std::str::FromStr for TimestampGrammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day-first-12h" | "dmy" => Ok(TimestampGrammar::DayFirst12h),
            "month-first-12h" | "mdy" => Ok(TimestampGrammar::MonthFirst12h),
            "day-first-24h" | "dmy-24h" => Ok(TimestampGrammar::DayFirst24h),
            "month-first-24h" | "mdy-24h" => Ok(TimestampGrammar::MonthFirst24h),
            _ => Err(format!(
                "Unknown timestamp grammar: '{}'. Expected one of: {}",
                s,
                TimestampGrammar::all_names().join(", ")
            )),
        }
    }
}

/// Configuration for [`LogParser`](crate::parser::LogParser).
///
/// # Example
///
/// ```
/// use chatlens::config::{ParserConfig, TimestampGrammar};
///
/// let config = ParserConfig::new().with_grammar(TimestampGrammar::DayFirst24h);
/// assert_eq!(config.grammar, TimestampGrammar::DayFirst24h);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Timestamp grammar used for tokenizing the export.
    pub grammar: TimestampGrammar,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timestamp grammar.
    #[must_use]
    pub fn with_grammar(mut self, grammar: TimestampGrammar) -> Self {
        self.grammar = grammar;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_grammar() {
        assert_eq!(
            ParserConfig::default().grammar,
            TimestampGrammar::DayFirst12h
        );
    }

    #[test]
    fn test_grammar_from_str() {
        assert_eq!(
            "day-first-12h".parse::<TimestampGrammar>().unwrap(),
            TimestampGrammar::DayFirst12h
        );
        assert_eq!(
            "mdy".parse::<TimestampGrammar>().unwrap(),
            TimestampGrammar::MonthFirst12h
        );
        assert_eq!(
            "DMY-24H".parse::<TimestampGrammar>().unwrap(),
            TimestampGrammar::DayFirst24h
        );
        assert!("iso".parse::<TimestampGrammar>().is_err());
    }

    #[test]
    fn test_grammar_display_round_trip() {
        for &grammar in TimestampGrammar::all() {
            let name = grammar.to_string();
            assert_eq!(name.parse::<TimestampGrammar>().unwrap(), grammar);
        }
    }

    #[test]
    fn test_render_12h() {
        let ts = NaiveDate::from_ymd_opt(2023, 2, 25)
            .unwrap()
            .and_hms_opt(16, 5, 0)
            .unwrap();

        assert_eq!(TimestampGrammar::DayFirst12h.render(ts), "25/2/23, 4:05 pm");
        assert_eq!(
            TimestampGrammar::MonthFirst12h.render(ts),
            "2/25/23, 4:05 pm"
        );
    }

    #[test]
    fn test_render_24h() {
        let ts = NaiveDate::from_ymd_opt(2023, 2, 25)
            .unwrap()
            .and_hms_opt(16, 5, 0)
            .unwrap();

        assert_eq!(TimestampGrammar::DayFirst24h.render(ts), "25/2/23, 16:05");
        assert_eq!(TimestampGrammar::MonthFirst24h.render(ts), "2/25/23, 16:05");
    }

    #[test]
    fn test_render_midnight_and_noon() {
        let midnight = NaiveDate::from_ymd_opt(2023, 2, 25)
            .unwrap()
            .and_hms_opt(0, 30, 0)
            .unwrap();
        let noon = NaiveDate::from_ymd_opt(2023, 2, 25)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();

        assert_eq!(
            TimestampGrammar::DayFirst12h.render(midnight),
            "25/2/23, 12:30 am"
        );
        assert_eq!(
            TimestampGrammar::DayFirst12h.render(noon),
            "25/2/23, 12:30 pm"
        );
    }

    #[test]
    fn test_config_serde() {
        let config = ParserConfig::new().with_grammar(TimestampGrammar::MonthFirst12h);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"grammar":"month-first-12h"}"#);

        let parsed: ParserConfig = serde_json::from_str(r#"{"grammar":"mdy"}"#).unwrap();
        assert_eq!(parsed.grammar, TimestampGrammar::MonthFirst12h);
    }
}
