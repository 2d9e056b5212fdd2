//! Transient admin notifications.
//!
//! Admin mutations surface success or failure through a queue of timed,
//! dismissable toasts; callers can always tell the two apart by kind.

use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

/// How long a toast stays visible unless dismissed.
pub const TOAST_TTL: SignedDuration = SignedDuration::from_secs(3);

/// Outcome flavour of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

/// One queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub uuid: Uuid,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Timestamp,
}

/// Queue of timed dismissable messages.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// An empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast; returns its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Timestamp) -> Uuid {
        let uuid = Uuid::now_v7();

        self.toasts.push(Toast {
            uuid,
            kind,
            message: message.into(),
            created_at: now,
        });

        uuid
    }

    /// Remove a toast early. No-op when the id is unknown.
    pub fn dismiss(&mut self, uuid: Uuid) {
        self.toasts.retain(|toast| toast.uuid != uuid);
    }

    /// Drop every toast older than [`TOAST_TTL`].
    pub fn sweep(&mut self, now: Timestamp) {
        self.toasts
            .retain(|toast| now.duration_since(toast.created_at) < TOAST_TTL);
    }

    /// Currently visible toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
