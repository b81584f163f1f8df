//! Desktop notification dispatch. The OS notification service owns
//! rendering and dismissal; we only hand it a title/body pair.

use notify_rust::{Notification, Timeout};

pub const TITLE: &str = "Stretch reminder";
pub const MESSAGE: &str = "Time to stretch!";

pub fn send(title: &str, body: &str) -> Result<(), String> {
    Notification::new()
        .appname("stretch-timer")
        .summary(title)
        .body(body)
        .icon("clock")
        .timeout(Timeout::Milliseconds(10_000))
        .show()
        .map(|_| ())
        .map_err(|err| format!("could not send notification: {}", err))
}
