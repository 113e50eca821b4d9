//! Line parser for event lists.
//!
//! Each non-comment line has the form `<date>;;<title>` where `<date>` is
//! either `YYYY-MM-DD` (one-off) or `MM-DD` (every year).

use crate::Event;
use chrono::NaiveDate;

/// Separator between the date and the title
pub const FIELD_DELIMITER: &str = ";;";

/// Marker for comment lines
pub const COMMENT_PREFIX: char = '#';

/// Result of parsing one line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line held an event
    Event(Event),
    /// Blank or comment line
    Skip,
    /// The line is malformed and contributes nothing
    Invalid(LineError),
}

/// Why a line was rejected
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("missing ';;' between date and title")]
    MissingDelimiter,

    #[error("expected YYYY-MM-DD or MM-DD, got {0} date component(s)")]
    ComponentCount(usize),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{month:02}-{day:02} is not a valid month and day")]
    InvalidMonthDay { month: u32, day: u32 },

    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("title is empty")]
    EmptyTitle,
}

/// Parse a single raw line
pub fn parse_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return LineOutcome::Skip;
    }

    match parse_event(line) {
        Ok(event) => LineOutcome::Event(event),
        Err(e) => LineOutcome::Invalid(e),
    }
}

fn parse_event(line: &str) -> Result<Event, LineError> {
    let (date_str, title) = line
        .split_once(FIELD_DELIMITER)
        .ok_or(LineError::MissingDelimiter)?;

    if title.trim().is_empty() {
        return Err(LineError::EmptyTitle);
    }

    let parts: Vec<&str> = date_str.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => {
            let year: i32 = parse_component(year)?;
            let month: u32 = parse_component(month)?;
            let day: u32 = parse_component(day)?;

            if !is_valid_month_day(month, day) {
                return Err(LineError::InvalidMonthDay { month, day });
            }
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(LineError::InvalidDate { year, month, day })?;

            Ok(Event::once(date, title))
        }
        [month, day] => {
            let month: u32 = parse_component(month)?;
            let day: u32 = parse_component(day)?;

            if !is_valid_month_day(month, day) {
                return Err(LineError::InvalidMonthDay { month, day });
            }
            Event::yearly(month, day, title).ok_or(LineError::InvalidMonthDay { month, day })
        }
        other => Err(LineError::ComponentCount(other.len())),
    }
}

fn parse_component<T: std::str::FromStr>(raw: &str) -> Result<T, LineError> {
    raw.trim()
        .parse()
        .map_err(|_| LineError::NotANumber(raw.to_string()))
}

/// Check a month/day pair without reference to any year
///
/// February accepts the 29th since a yearly event has no year to check.
pub fn is_valid_month_day(month: u32, day: u32) -> bool {
    let max_day = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => return false,
    };
    (1..=max_day).contains(&day)
}
