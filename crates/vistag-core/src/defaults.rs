//! Centralized default constants for the vistag system.
//!
//! **This module is the single source of truth** for shared default values.
//! All crates should reference these constants instead of defining their
//! own magic values.

// =============================================================================
// DOCUMENTS
// =============================================================================

/// Document type accepted by the tagging operation.
pub const PICTURE_DOC_TYPE: &str = "Picture";

/// Rendition role submitted for prediction.
///
/// The reduced-size preview generated by the repository, not the original.
pub const PREVIEW_RENDITION_ROLE: &str = "preview";

// =============================================================================
// TAGGING
// =============================================================================

/// Acting identity recorded on automated tag writes.
///
/// Tag writes are attributed to the system identity, never an end user.
pub const TAG_ACTOR: &str = "system";

// =============================================================================
// EVENTS
// =============================================================================

/// Default event bus broadcast channel capacity.
pub const EVENT_BUS_CAPACITY: usize = 256;
