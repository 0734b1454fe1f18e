//! Notification dispatch.
//!
//! Fire-and-forget: a [`Notifier`] never reports failure back to the caller.
//! [`DesktopNotifier`] delivers platform-native notifications on a
//! best-effort basis; failures are logged and swallowed.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[cfg(not(target_os = "macos"))]
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Notification {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
        }
    }

    pub fn with_body(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Some(body.into()),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Platform-native desktop notifications.
///
/// - macOS: `osascript` (Notification Center)
/// - Linux: `notify-send` (requires libnotify)
/// - Other: no-op
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, notification: &Notification) {
        let message = notification.body.as_deref().unwrap_or("");
        info!(
            event = "core.notify.send_started",
            title = notification.title.as_str(),
            message = message,
        );
        send_platform_notification(&notification.title, message);
    }
}

/// Keeps every notification in memory, in dispatch order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        match self.sent.lock() {
            Ok(mut sent) => sent.push(notification.clone()),
            Err(poisoned) => poisoned.into_inner().push(notification.clone()),
        }
    }
}

/// Escape a string for use in AppleScript.
pub fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

#[cfg(target_os = "macos")]
fn send_platform_notification(title: &str, message: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        applescript_escape(message),
        applescript_escape(title)
    );

    match std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output()
    {
        Ok(output) if output.status.success() => {
            info!(event = "core.notify.send_completed", title = title);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.notify.send_failed",
                title = title,
                stderr = %stderr,
            );
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
        }
    }
}

#[cfg(target_os = "linux")]
fn send_platform_notification(title: &str, message: &str) {
    match which::which("notify-send") {
        Ok(_) => {}
        Err(which::Error::CannotFindBinaryPath) => {
            debug!(
                event = "core.notify.send_skipped",
                reason = "notify-send not found",
            );
            return;
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
            return;
        }
    }

    match std::process::Command::new("notify-send")
        .arg(title)
        .arg(message)
        .output()
    {
        Ok(output) if output.status.success() => {
            info!(event = "core.notify.send_completed", title = title);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.notify.send_failed",
                title = title,
                stderr = %stderr,
            );
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
        }
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn send_platform_notification(_title: &str, _message: &str) {
    debug!(
        event = "core.notify.send_skipped",
        reason = "unsupported platform",
    );
}
