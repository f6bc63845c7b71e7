//! Repository event types and event bus for automatic tagging triggers.
//!
//! The hosting repository publishes a [`RepositoryEvent::PreviewReady`]
//! event once rendition generation for a picture completes. The tagging
//! listener subscribes and invokes the same operation entry point used for
//! direct pipeline invocation, so both triggers share one code path.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::defaults;
use crate::models::Document;

/// Domain events published by the hosting repository.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RepositoryEvent {
    /// Rendition generation finished and a preview image is available.
    PreviewReady { document: Document },
}

impl RepositoryEvent {
    /// Dot-namespaced event type (e.g. `"rendition.preview_ready"`).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PreviewReady { .. } => "rendition.preview_ready",
        }
    }

    /// ID of the document this event relates to.
    pub fn document_id(&self) -> &str {
        match self {
            Self::PreviewReady { document } => &document.id,
        }
    }
}

/// Broadcast bus carrying repository events to downstream consumers.
///
/// Each subscriber gets its own independent stream. Emission never blocks;
/// if there are no active subscribers the event is dropped.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<RepositoryEvent>,
}

impl EventBus {
    /// Create a new event bus with the given buffer capacity.
    ///
    /// Recommended: 256 for production, 32 for tests.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all subscribers.
    pub fn emit(&self, event: RepositoryEvent) {
        let subscriber_count = self.tx.receiver_count();
        tracing::debug!(
            event_type = %event.event_type(),
            document_id = %event.document_id(),
            subscriber_count,
            "EventBus emit"
        );
        let _ = self.tx.send(event);
    }

    /// Subscribe to receive events.
    pub fn subscribe(&self) -> broadcast::Receiver<RepositoryEvent> {
        self.tx.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(defaults::EVENT_BUS_CAPACITY)
    }
}
