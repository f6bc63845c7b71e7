//! Tag sink trait for the host's tag store.

use async_trait::async_trait;

use vistag_core::Result;

/// Destination for tag writes, implemented by the hosting repository.
///
/// The core forwards concept names as-is: no deduplication or validation
/// happens before a write, so duplicate labels produce duplicate calls.
/// Whether those are idempotent is the sink's concern.
#[async_trait]
pub trait TagSink: Send + Sync {
    /// Record `label` as a tag on `document_id`, attributed to `actor`.
    async fn tag(&self, document_id: &str, label: &str, actor: &str) -> Result<()>;
}

/// Sink that discards all writes. Useful for wiring tests and dry runs.
pub struct NoOpSink;

#[async_trait]
impl TagSink for NoOpSink {
    async fn tag(&self, _document_id: &str, _label: &str, _actor: &str) -> Result<()> {
        Ok(())
    }
}
