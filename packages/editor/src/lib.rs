//! # Keepsake Editor
//!
//! Core document editing engine for Keepsake scrapbooks.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document / Page / Element types      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: DocumentStore                       │
//! │  - Page manager + current-page cursor       │
//! │  - Element registry, typed patches          │
//! │  - Z-order control                          │
//! │  - Selection + single-slot clipboard        │
//! │  - Snapshot undo/redo                       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ wasm: bindings for the browser shell        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Single writer**: the store is the only mutation entry point
//! 2. **Pre-image history**: every pages mutation snapshots before applying
//! 3. **Benign no-ops**: late UI events (stale ids, out-of-range indices)
//!    never error and never corrupt state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use keepsake_editor::{DocumentStore, ElementDraft, Position, Size};
//!
//! let mut store = DocumentStore::new();
//!
//! // Place a photo the ingestion layer already decoded
//! let id = store.add_element(ElementDraft::photo(
//!     "blob:photo-1",
//!     Position::new(80.0, 120.0),
//!     Size::new(640.0, 480.0),
//! ));
//!
//! store.rotate_element(&id, 3.5);
//! store.undo();
//!
//! // Hand the document to the persistence collaborator
//! let json = store.to_json()?;
//! ```

pub mod clipboard;
pub mod errors;
pub mod history;
pub mod patch;
pub mod selection;
pub mod store;

mod elements;
mod pages;
mod z_order;

pub use clipboard::Clipboard;
pub use errors::EditorError;
pub use history::{History, DEFAULT_MAX_UNDO_STEPS};
pub use patch::{
    ContentPatch, ElementPatch, FieldUpdate, MetadataPatch, PhotoPatch, ShapePatch, StickerPatch,
    TextPatch, TransformPatch,
};
pub use selection::Selection;
pub use store::DocumentStore;

// Re-export the model types shells actually touch
pub use keepsake_model::{
    Background, Document, Element, ElementDraft, ElementKind, Page, PageSize, Position, ShapeKind,
    Size, Transform,
};
