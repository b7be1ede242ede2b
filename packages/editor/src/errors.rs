//! Error types for the editor

use thiserror::Error;

/// Faults the store can actually raise. Routine misses (stale ids,
/// out-of-range indices, empty stacks) are silent no-ops, not errors, so
/// this surface stays small.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Document must contain at least one page")]
    EmptyDocument,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
