//! Transient user-facing messages with a severity level.
//!
//! The save controller emits exactly one notification per submit. The
//! provided `EmitterNotifier` dispatches each one as a `"notification"`
//! event on an `EventEmitter`, so hosts observe them the same way they
//! observe any other emitted event.
//!
//! ## Example
//!
//! ```ignore
//! use record_grid::{EmitterNotifier, Notifier, Notification};
//!
//! let notifier = EmitterNotifier::new();
//! notifier.on_notification(|n| {
//!     println!("[{}] {}", n.severity, n.message);
//! });
//!
//! notifier.notify(Notification::success("Records updated"));
//! ```

use std::fmt;
use std::sync::Mutex;

use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A transient message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Displays notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that dispatches over an [`EventEmitter`] with a JSON string
/// payload under the `"notification"` event name.
pub struct EmitterNotifier {
    emitter: Mutex<EventEmitter>,
}

impl EmitterNotifier {
    /// Event name notifications are dispatched under.
    pub const EVENT: &'static str = "notification";

    pub fn new() -> Self {
        EmitterNotifier {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Attach an observer for every dispatched notification.
    pub fn on_notification<F>(&self, listener: F)
    where
        F: Fn(Notification) + Send + Sync + 'static,
    {
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.on(Self::EVENT, move |data: String| {
                    match serde_json::from_str::<Notification>(&data) {
                        Ok(notification) => listener(notification),
                        Err(e) => log::warn!("malformed notification payload: {}", e),
                    }
                });
            }
            Err(_) => log::warn!("notifier lock poisoned; listener dropped"),
        }
    }
}

impl Default for EmitterNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for EmitterNotifier {
    fn notify(&self, notification: Notification) {
        let payload = match serde_json::to_string(&notification) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("failed to encode notification: {}", e);
                return;
            }
        };
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.emit(Self::EVENT, payload);
            }
            Err(_) => log::warn!("notifier lock poisoned; notification dropped"),
        }
    }
}
