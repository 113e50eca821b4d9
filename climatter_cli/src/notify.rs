//! Desktop notifications for events happening today.

use climatter_core::ResolvedEvent;
use notify_rust::Notification;

const APP_NAME: &str = "climatter";

/// Something that can show a notification
pub trait Notifier {
    fn notify(&mut self, summary: &str, body: &str) -> Result<(), String>;
}

/// Sends notifications through the desktop notification service
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&mut self, summary: &str, body: &str) -> Result<(), String> {
        Notification::new()
            .summary(summary)
            .body(body)
            .appname(APP_NAME)
            .show()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Notify every event falling on the reference date
///
/// Returns how many notifications were delivered. A failing notification
/// is logged and does not stop the others.
pub fn notify_today(events: &[ResolvedEvent], notifier: &mut impl Notifier) -> usize {
    let mut sent = 0;
    for event in events.iter().filter(|e| e.is_today()) {
        let body = if event.is_yearly() {
            format!("Today, {} (every year)", event.occurs_on.format("%Y-%m-%d"))
        } else {
            format!("Today, {}", event.occurs_on.format("%Y-%m-%d"))
        };

        match notifier.notify(event.title(), &body) {
            Ok(()) => {
                tracing::debug!("Notified '{}'", event.title());
                sent += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to notify '{}': {}", event.title(), e);
            }
        }
    }
    sent
}
