//! Notification sinks.

use super::{NotificationKind, NotificationSink};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

/// Logs every notification through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Success => info!(message, "Notification"),
            NotificationKind::Error => error!(message, "Notification"),
        }
    }
}

/// A notification as received by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Keeps every notification in memory. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }

    pub fn clear(&self) {
        match self.log.lock() {
            Ok(mut log) => log.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let entry = Notification {
            message: message.to_string(),
            kind,
        };
        match self.log.lock() {
            Ok(mut log) => log.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_log() {
        let sink = RecordingSink::new();
        let handle = sink.clone();
        sink.notify("Pizza creata con successo!", NotificationKind::Success);
        assert_eq!(
            handle.last(),
            Some(Notification {
                message: "Pizza creata con successo!".into(),
                kind: NotificationKind::Success,
            })
        );
        handle.clear();
        assert!(sink.notifications().is_empty());
    }
}
