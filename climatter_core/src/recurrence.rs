//! Placement of events relative to a reference date.
//!
//! One-off events keep their date. Yearly events are placed in the
//! reference date's own year, with no rollover: a January event seen in
//! December lies in the past, not eleven months ahead.

use crate::{Event, ResolvedEvent};
use chrono::{Datelike, Duration, NaiveDate};

/// Resolve one event against `today`
pub fn resolve(event: &Event, today: NaiveDate) -> ResolvedEvent {
    let occurs_on = occurrence(event, today);
    ResolvedEvent {
        event: event.clone(),
        occurs_on,
        offset: (occurs_on - today).num_days(),
    }
}

/// Resolve a sequence of events, preserving order
pub fn resolve_all(events: &[Event], today: NaiveDate) -> Vec<ResolvedEvent> {
    events.iter().map(|e| resolve(e, today)).collect()
}

impl ResolvedEvent {
    /// Resolve the underlying event again, possibly against another date
    pub fn re_resolve(&self, today: NaiveDate) -> ResolvedEvent {
        resolve(&self.event, today)
    }
}

/// The concrete date an event falls on relative to `today`
///
/// A yearly day past the end of its month in `today`'s year (02-29 outside
/// a leap year) lands on that month's last day.
pub fn occurrence(event: &Event, today: NaiveDate) -> NaiveDate {
    if !event.yearly {
        return event.date;
    }

    let year = today.year();
    let month = event.month();
    let day = event.day().min(days_in_month(year, month));
    let ordinal: u32 = (1..month).map(|m| days_in_month(year, m)).sum::<u32>() + day;

    today + Duration::days(i64::from(ordinal) - i64::from(today.ordinal()))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
