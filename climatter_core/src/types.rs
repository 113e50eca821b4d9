//! Core domain types for climatter.
//!
//! This module defines:
//! - Events as parsed from an event list
//! - Events resolved against a reference date
//! - List modes used by the ranking engine

use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Year stored on yearly events in place of a real one.
///
/// Year 0 is a leap year in the proleptic Gregorian calendar, so `02-29`
/// stays representable. It is never compared against real dates.
pub const YEARLY_SENTINEL_YEAR: i32 = 0;

// ============================================================================
// Events
// ============================================================================

/// A single event as read from an event list
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// Calendar date. For yearly events the year is [`YEARLY_SENTINEL_YEAR`].
    pub date: NaiveDate,
    pub title: String,
    /// True when the source line only carried a month and day
    pub yearly: bool,
}

impl Event {
    /// Create a one-off event on a fixed date
    pub fn once(date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            yearly: false,
        }
    }

    /// Create an event recurring every year on `month`/`day`
    ///
    /// Returns `None` if the pair is not a valid month/day (February
    /// accepts up to 29).
    pub fn yearly(month: u32, day: u32, title: impl Into<String>) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(YEARLY_SENTINEL_YEAR, month, day)?;
        Some(Self {
            date,
            title: title.into(),
            yearly: true,
        })
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// An event placed relative to a reference date
///
/// Only a resolved event carries an offset; a raw [`Event`] never does.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedEvent {
    pub event: Event,
    /// The concrete date the event falls on relative to the reference date
    pub occurs_on: NaiveDate,
    /// Days from the reference date to `occurs_on` (negative = past)
    pub offset: i64,
}

impl ResolvedEvent {
    pub fn title(&self) -> &str {
        &self.event.title
    }

    pub fn is_yearly(&self) -> bool {
        self.event.yearly
    }

    pub fn is_today(&self) -> bool {
        self.offset == 0
    }
}

// ============================================================================
// List Modes
// ============================================================================

/// Policy deciding which events are surfaced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMode {
    /// Today's events plus the closest future and past ones
    #[default]
    Nearest,
    /// Today's events plus the most distant future and past ones
    Furthest,
    /// Every event
    All,
}

impl ListMode {
    pub const ALL: [ListMode; 3] = [ListMode::Nearest, ListMode::Furthest, ListMode::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListMode::Nearest => "nearest",
            ListMode::Furthest => "furthest",
            ListMode::All => "all",
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "nearest" => Ok(ListMode::Nearest),
            "furthest" => Ok(ListMode::Furthest),
            "all" => Ok(ListMode::All),
            other => Err(Error::InvalidListMode(other.to_string())),
        }
    }
}
