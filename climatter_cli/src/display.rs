//! Table and JSON rendering of ranked events.

use climatter_core::ResolvedEvent;
use serde::Serialize;
use std::io::{self, Write};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// JSON shape of one listed event
#[derive(Debug, Serialize)]
struct EventRow<'a> {
    date: chrono::NaiveDate,
    title: &'a str,
    yearly: bool,
    offset: i64,
}

impl<'a> From<&'a ResolvedEvent> for EventRow<'a> {
    fn from(event: &'a ResolvedEvent) -> Self {
        Self {
            date: event.occurs_on,
            title: event.title(),
            yearly: event.is_yearly(),
            offset: event.offset,
        }
    }
}

/// Print events as a three-column table: date, title, days away
pub fn render_table(events: &[ResolvedEvent], out: &mut impl Write) -> io::Result<()> {
    if events.is_empty() {
        return writeln!(out, "No events to show.");
    }

    let rows: Vec<(String, &str, String)> = events
        .iter()
        .map(|e| {
            (
                e.occurs_on.format(DATE_FORMAT).to_string(),
                e.title(),
                e.offset.to_string(),
            )
        })
        .collect();

    let date_width = column_width("Date", rows.iter().map(|r| r.0.as_str()));
    let title_width = column_width("Title", rows.iter().map(|r| r.1));
    let days_width = column_width("Days", rows.iter().map(|r| r.2.as_str()));

    writeln!(
        out,
        " {} │ {} │ {}",
        pad_right("Date", date_width),
        pad_right("Title", title_width),
        pad_left("Days", days_width)
    )?;
    writeln!(
        out,
        "─{}─┼─{}─┼─{}",
        "─".repeat(date_width),
        "─".repeat(title_width),
        "─".repeat(days_width)
    )?;
    for (date, title, days) in &rows {
        writeln!(
            out,
            " {} │ {} │ {}",
            pad_right(date, date_width),
            pad_right(title, title_width),
            pad_left(days, days_width)
        )?;
    }
    Ok(())
}

/// Print events as a JSON array
pub fn render_json(events: &[ResolvedEvent], out: &mut impl Write) -> io::Result<()> {
    let rows: Vec<EventRow<'_>> = events.iter().map(EventRow::from).collect();
    serde_json::to_writer_pretty(&mut *out, &rows).map_err(io::Error::other)?;
    writeln!(out)
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|c| c.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", " ".repeat(fill), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use climatter_core::{resolve, Event};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 20).unwrap()
    }

    fn sample() -> Vec<ResolvedEvent> {
        vec![
            resolve(&Event::yearly(12, 20, "Birthday").unwrap(), today()),
            resolve(
                &Event::once(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(), "Christmas Day"),
                today(),
            ),
            resolve(&Event::yearly(1, 1, "New Year's Day").unwrap(), today()),
        ]
    }

    fn table(events: &[ResolvedEvent]) -> String {
        let mut buf = Vec::new();
        render_table(events, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_rows_in_given_order() {
        let output = table(&sample());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Date") && lines[0].contains("Title"));
        assert!(lines[2].contains("2026-12-20") && lines[2].contains("Birthday"));
        assert!(lines[3].contains("2026-12-25") && lines[3].ends_with("   5"));
        assert!(lines[4].contains("2026-01-01") && lines[4].ends_with("-353"));
    }

    #[test]
    fn test_table_columns_align() {
        let output = table(&sample());
        let widths: Vec<_> = output.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(table(&[]), "No events to show.\n");
    }

    #[test]
    fn test_json_rows() {
        let mut buf = Vec::new();
        render_json(&sample(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["title"], "Birthday");
        assert_eq!(rows[0]["offset"], 0);
        assert_eq!(rows[0]["yearly"], true);
        assert_eq!(rows[1]["date"], "2026-12-25");
        assert_eq!(rows[2]["offset"], -353);
    }
}
