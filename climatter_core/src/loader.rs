//! Event list loading.
//!
//! Missing files and malformed lines are reported and skipped; a broken
//! event list never aborts a run.

use crate::parser::{parse_line, LineOutcome};
use crate::Event;
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Outcome of reading one event list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Events in file order
    pub events: Vec<Event>,
    /// Number of malformed lines that were skipped
    pub rejected: usize,
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => {
                tracing::warn!("Cannot expand {:?}: home directory unknown", path);
                path.to_path_buf()
            }
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Read every event from one event list
///
/// Returns an empty report if the path does not exist or is not a
/// regular file.
pub fn read_event_list(path: &Path) -> LoadReport {
    let path = expand_home(path);
    let mut report = LoadReport::default();

    if !path.exists() {
        tracing::warn!("Event list not found: {}", path.display());
        return report;
    }
    if !path.is_file() {
        tracing::warn!("Event list is not a file: {}", path.display());
        return report;
    }

    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Unable to open event list {}: {}", path.display(), e);
            return report;
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_no += 1,
            Err(e) => {
                tracing::warn!(
                    "Stopped reading {} after line {}: {}",
                    path.display(),
                    line_no,
                    e
                );
                break;
            }
        }

        // A bad encoding only costs this one line
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(
                    "Invalid line format: line {} of {} is not valid UTF-8 ({})",
                    line_no,
                    path.display(),
                    e
                );
                report.rejected += 1;
                continue;
            }
        };

        match parse_line(line) {
            LineOutcome::Event(event) => report.events.push(event),
            LineOutcome::Skip => {}
            LineOutcome::Invalid(e) => {
                tracing::warn!("Invalid line format: {} ({})", line.trim(), e);
                report.rejected += 1;
            }
        }
    }

    tracing::debug!(
        "Loaded {} events from {} ({} rejected)",
        report.events.len(),
        path.display(),
        report.rejected
    );

    report
}

/// Load events from a single file, discarding the rejection count
pub fn load_events_file(path: &Path) -> Vec<Event> {
    read_event_list(path).events
}

/// Load and concatenate every configured event list
///
/// Lists are read in the map's insertion order.
pub fn load_sources(event_lists: &IndexMap<String, PathBuf>) -> Vec<Event> {
    let mut events = Vec::new();
    for (label, path) in event_lists {
        let report = read_event_list(path);
        tracing::debug!("Event list '{}': {} events", label, report.events.len());
        events.extend(report.events);
    }
    tracing::info!(
        "Loaded {} events from {} event lists",
        events.len(),
        event_lists.len()
    );
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    #[test]
    fn test_reads_events_in_file_order() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("events");
        fs::write(
            &path,
            "# holidays\n\n2026-12-25;;Christmas Day\n01-01;;New Year's Day\n07-04;;Independence Day\n",
        )
        .unwrap();

        let events = load_events_file(&path);
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Christmas Day", "New Year's Day", "Independence Day"]);
        assert_eq!(
            events[0].date,
            NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()
        );
        assert!(events[1].yearly);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("events");
        fs::write(
            &path,
            "not-a-date;;Broken\n2026-02-30;;Bad day\nno delimiter here\n03-15;;Still here\n",
        )
        .unwrap();

        let report = read_event_list(&path);
        assert_eq!(report.rejected, 3);
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].title, "Still here");
    }

    #[test]
    fn test_invalid_utf8_line_skipped_alone() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("events");
        fs::write(
            &path,
            b"2026-01-01;;First\n2026-01-02;;Caf\xe9\n2026-01-03;;Third\n",
        )
        .unwrap();

        let report = read_event_list(&path);
        let titles: Vec<_> = report.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["First", "Third"]);
        assert_eq!(report.rejected, 1);
    }

    #[test]
    fn test_last_line_without_newline() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("events");
        fs::write(&path, "2026-01-01;;First\r\n05-05;;Last").unwrap();

        let titles: Vec<_> = load_events_file(&path)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["First", "Last"]);
    }

    #[test]
    fn test_missing_file_yields_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let report = read_event_list(&temp_dir.path().join("nonexistent"));
        assert_eq!(report, LoadReport::default());
    }

    #[test]
    fn test_directory_yields_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(load_events_file(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_sources_concatenate_in_insertion_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let work = temp_dir.path().join("work");
        let home = temp_dir.path().join("home");
        fs::write(&work, "2026-05-01;;Release\n").unwrap();
        fs::write(&home, "06-10;;Birthday\n08-20;;Anniversary\n").unwrap();

        let mut lists = IndexMap::new();
        lists.insert("zz_work".to_string(), work);
        lists.insert("missing".to_string(), temp_dir.path().join("gone"));
        lists.insert("aa_home".to_string(), home);

        let events = load_sources(&lists);
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Release", "Birthday", "Anniversary"]);
    }

    #[test]
    fn test_expand_home() {
        let plain = Path::new("/etc/climatter/events");
        assert_eq!(expand_home(plain), plain);

        let relative = Path::new("notes/~events");
        assert_eq!(expand_home(relative), relative);

        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                expand_home(Path::new("~/.config/climatter/events")),
                home.join(".config/climatter/events")
            );
        }
    }
}
