//! Where `HeroService` reports what happened.
//!
//! # Design
//! The sink is injected at construction. `MessageLog` is the in-memory
//! message list a UI would render; `TracingSink` sends the same text to the
//! `tracing` subscriber instead.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Accepts short human-readable messages. Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn add(&self, message: String);
}

impl<S: NotificationSink + ?Sized> NotificationSink for Arc<S> {
    fn add(&self, message: String) {
        (**self).add(message)
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &S {
    fn add(&self, message: String) {
        (**self).add(message)
    }
}

/// Shared, append-only list of messages. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message added so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panicking writer cannot leave a Vec<String> half-updated.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationSink for MessageLog {
    fn add(&self, message: String) {
        self.lock().push(message);
    }
}

/// Emits each message as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn add(&self, message: String) {
        tracing::info!(target: "hero_core::messages", "{message}");
    }
}
