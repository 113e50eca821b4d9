#![forbid(unsafe_code)]

//! Core event model and ranking logic for climatter.
//!
//! This crate provides:
//! - Domain types (events, resolved events, list modes)
//! - Event list parsing and loading
//! - Yearly recurrence resolution
//! - Ranking for the nearest/furthest/all list modes
//! - Configuration layering

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod parser;
pub mod loader;
pub mod recurrence;
pub mod ranking;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use parser::{parse_line, LineError, LineOutcome};
pub use loader::{load_events_file, load_sources};
pub use recurrence::{resolve, resolve_all};
pub use ranking::rank;

use chrono::NaiveDate;

/// Load every configured event list and resolve it against `today`
///
/// Events keep source order; this is the input the ranking engine and the
/// notifier work from.
pub fn collect_events(config: &Config, today: NaiveDate) -> Vec<ResolvedEvent> {
    let events = load_sources(&config.event_lists);
    resolve_all(&events, today)
}

/// Load, resolve and rank events according to `config`
pub fn list_events(config: &Config, today: NaiveDate) -> Vec<ResolvedEvent> {
    rank(
        collect_events(config, today),
        config.option.list_mode,
        config.option.list_future_events_count,
        config.option.list_past_events_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_events_end_to_end() {
        let temp_dir = tempfile::tempdir().unwrap();
        let holidays = temp_dir.path().join("holidays");
        let personal = temp_dir.path().join("personal");
        fs::write(
            &holidays,
            "2026-12-25;;Christmas Day\n01-01;;New Year's Day\nnot-a-date;;Broken\n",
        )
        .unwrap();
        fs::write(&personal, "# mine\n12-20;;Birthday\n12-19;;Party\n").unwrap();

        let mut config = Config::default();
        config.event_lists.clear();
        config.event_lists.insert("holidays".into(), holidays);
        config.event_lists.insert("missing".into(), temp_dir.path().join("gone"));
        config.event_lists.insert("personal".into(), personal);
        config.option.list_future_events_count = 1;
        config.option.list_past_events_count = 1;

        let today = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
        let ranked = list_events(&config, today);
        let summary: Vec<_> = ranked.iter().map(|e| (e.title(), e.offset)).collect();
        assert_eq!(
            summary,
            [("Birthday", 0), ("Christmas Day", 5), ("Party", -1)]
        );
    }

    #[test]
    fn test_collect_events_keeps_source_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let list = temp_dir.path().join("events");
        fs::write(&list, "2026-01-10;;b\n2026-01-05;;a\n").unwrap();

        let mut config = Config::default();
        config.event_lists.clear();
        config.event_lists.insert("only".into(), list);

        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let titles: Vec<_> = collect_events(&config, today)
            .into_iter()
            .map(|e| e.event.title)
            .collect();
        assert_eq!(titles, ["b", "a"]);
    }
}
