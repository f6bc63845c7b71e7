//! Event-triggered tagging.
//!
//! Subscribes to the repository event bus and runs the same
//! [`TagPictureOperation`] used for direct pipeline invocation, so the
//! event path and the pipeline path share one code path. Because the
//! listener runs unattended, operation failures are logged and the loop
//! continues; the hard-error propagation policy applies only to direct
//! invocation.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use vistag_core::{EventBus, RepositoryEvent};

use crate::operation::TagPictureOperation;

/// Listens for preview-ready events and tags the affected document.
pub struct PreviewReadyListener {
    operation: Arc<TagPictureOperation>,
}

impl PreviewReadyListener {
    /// Create a listener over the shared tagging operation.
    pub fn new(operation: Arc<TagPictureOperation>) -> Self {
        Self { operation }
    }

    /// Spawn the listen loop on the current runtime.
    ///
    /// The loop ends when every sender side of the bus has been dropped.
    pub fn spawn(self, bus: &EventBus) -> JoinHandle<()> {
        let mut events = bus.subscribe();
        info!("Preview-ready listener subscribed");

        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(RepositoryEvent::PreviewReady { document }) => {
                        let document_id = document.id.clone();
                        debug!(document_id = %document_id, "Preview ready, tagging");
                        if let Err(e) = self.operation.run(document).await {
                            warn!(
                                document_id = %document_id,
                                error = %e,
                                "Automatic tagging failed"
                            );
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Listener lagged behind event bus");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            debug!("Preview-ready listener stopped");
        })
    }
}
