//! Ranking of resolved events for display.
//!
//! Events are split into today, future and past sections. Each section is
//! sorted on a total key, so the result never depends on input order:
//! - today: by title
//! - future: soonest first, then by title
//! - past: most recent first, then by title
//!
//! The output is always today, then future, then past.

use crate::{ListMode, ResolvedEvent};
use std::cmp::Ordering;

/// Events split by their offset sign, each section in display order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sections {
    pub today: Vec<ResolvedEvent>,
    pub future: Vec<ResolvedEvent>,
    pub past: Vec<ResolvedEvent>,
}

impl Sections {
    /// Partition and sort resolved events
    pub fn split(events: impl IntoIterator<Item = ResolvedEvent>) -> Self {
        let mut sections = Sections::default();
        for event in events {
            match event.offset.cmp(&0) {
                Ordering::Equal => sections.today.push(event),
                Ordering::Greater => sections.future.push(event),
                Ordering::Less => sections.past.push(event),
            }
        }

        sections.today.sort_by(|a, b| tie_break(a, b));
        sections
            .future
            .sort_by(|a, b| a.offset.cmp(&b.offset).then_with(|| tie_break(a, b)));
        sections
            .past
            .sort_by(|a, b| b.offset.cmp(&a.offset).then_with(|| tie_break(a, b)));
        sections
    }

    pub fn len(&self) -> usize {
        self.today.len() + self.future.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn concat(self) -> Vec<ResolvedEvent> {
        let mut out = self.today;
        out.extend(self.future);
        out.extend(self.past);
        out
    }
}

/// Title first, then the remaining fields so identical titles still order
/// deterministically.
fn tie_break(a: &ResolvedEvent, b: &ResolvedEvent) -> Ordering {
    a.event
        .title
        .cmp(&b.event.title)
        .then_with(|| a.occurs_on.cmp(&b.occurs_on))
        .then_with(|| a.event.yearly.cmp(&b.event.yearly))
        .then_with(|| a.event.date.cmp(&b.event.date))
}

/// Select and order the events to display
///
/// `future_count` and `past_count` bound the future and past sections in
/// `Nearest` and `Furthest` modes; today's events are always included.
/// `Furthest` slices the far end of each sorted section without reversing
/// it, so title tie-breaks stay ascending.
pub fn rank(
    events: impl IntoIterator<Item = ResolvedEvent>,
    mode: ListMode,
    future_count: usize,
    past_count: usize,
) -> Vec<ResolvedEvent> {
    let mut sections = Sections::split(events);

    match mode {
        ListMode::All => {}
        ListMode::Nearest => {
            sections.future.truncate(future_count);
            sections.past.truncate(past_count);
        }
        ListMode::Furthest => {
            keep_last(&mut sections.future, future_count);
            keep_last(&mut sections.past, past_count);
        }
    }

    tracing::debug!(
        "Ranked {} events in {} mode: {} today, {} future, {} past",
        sections.len(),
        mode,
        sections.today.len(),
        sections.future.len(),
        sections.past.len()
    );

    sections.concat()
}

fn keep_last<T>(items: &mut Vec<T>, count: usize) {
    let start = items.len().saturating_sub(count);
    items.drain(..start);
}
