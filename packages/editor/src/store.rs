//! The document store: one mutable aggregate, one writer.
//!
//! Every edit the shell can make goes through a `DocumentStore` method.
//! Operations are synchronous and run to completion, so readers never see a
//! half-applied state. Pages-mutating operations record a pre-image
//! snapshot before touching anything; cursor, selection and clipboard stay
//! outside history on purpose.

use chrono::{DateTime, Utc};
use keepsake_model::{Document, Element, IdGenerator, Page};

use crate::clipboard::Clipboard;
use crate::errors::EditorError;
use crate::history::History;
use crate::patch::MetadataPatch;
use crate::selection::Selection;

pub struct DocumentStore {
    pub(crate) document: Document,
    /// Cursor into `document.pages`; kept in range by every mutation.
    pub(crate) current_page: usize,
    pub(crate) selection: Selection,
    pub(crate) clipboard: Clipboard,
    pub(crate) history: History,
    pub(crate) ids: IdGenerator,
    is_saving: bool,
    last_saved: Option<DateTime<Utc>>,
}

impl DocumentStore {
    /// Store around a fresh untitled document.
    pub fn new() -> Self {
        let document = Document::new("Untitled");
        let ids = IdGenerator::resuming(document.id.clone(), &document);
        Self {
            document,
            current_page: 0,
            selection: Selection::new(),
            clipboard: Clipboard::new(),
            history: History::new(),
            ids,
            is_saving: false,
            last_saved: None,
        }
    }

    /// Store around an existing document. Applies the same sanitation as
    /// [`DocumentStore::set_document`].
    pub fn with_document(document: Document) -> Result<Self, EditorError> {
        let mut store = Self::new();
        store.set_document(document)?;
        Ok(store)
    }

    /// Override the undo cap (0 = unlimited). Existing history is dropped.
    pub fn with_max_undo_steps(mut self, max_steps: usize) -> Self {
        self.history = History::with_max_steps(max_steps);
        self
    }

    /// Install a whole new document: the load path. Rejects a document with
    /// no pages, repairs `order` indices, resets the cursor, and drops
    /// selection, clipboard and history. The id generator resumes past the
    /// highest loaded id so later inserts never collide.
    pub fn set_document(&mut self, mut document: Document) -> Result<(), EditorError> {
        if document.pages.is_empty() {
            return Err(EditorError::EmptyDocument);
        }
        for (index, page) in document.pages.iter_mut().enumerate() {
            page.order = index;
        }
        self.ids = IdGenerator::resuming(document.id.clone(), &document);
        self.document = document;
        self.current_page = 0;
        self.selection.clear();
        self.clipboard.clear();
        self.history.clear();
        tracing::debug!(
            "set_document: \"{}\", {} pages",
            self.document.title,
            self.document.page_count()
        );
        Ok(())
    }

    /// Parse and install a stored document.
    pub fn load_json(&mut self, json: &str) -> Result<(), EditorError> {
        let document = Document::from_json(json)?;
        self.set_document(document)
    }

    /// Serialize the live document for the persistence collaborator.
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(self.document.to_json()?)
    }

    /// Update shelf metadata (title, description, visibility, tags). Not a
    /// pages mutation, so it is not undoable.
    pub fn update_metadata(&mut self, patch: MetadataPatch) {
        if let Some(title) = patch.title {
            self.document.title = title;
        }
        if let Some(description) = patch.description {
            self.document.description = description;
        }
        if let Some(is_public) = patch.is_public {
            self.document.is_public = is_public;
        }
        if let Some(tags) = patch.tags {
            self.document.tags = tags;
        }
    }

    // --- Derived getters -------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn page_count(&self) -> usize {
        self.document.pages.len()
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page
    }

    /// The page under the cursor. Infallible: the ≥1-page floor and cursor
    /// clamping hold after every operation.
    pub fn current_page(&self) -> &Page {
        &self.document.pages[self.current_page]
    }

    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.current_page().find_element(id)
    }

    /// Selected element ids, in page (insertion) order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected_elements()
            .into_iter()
            .map(|element| element.id.clone())
            .collect()
    }

    /// Selected elements, in page (insertion) order.
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.current_page()
            .elements
            .iter()
            .filter(|element| self.selection.contains(&element.id))
            .collect()
    }

    pub fn selection_size(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn has_clipboard_content(&self) -> bool {
        !self.clipboard.is_empty()
    }

    // --- Undo / redo -----------------------------------------------------

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Restore the most recent pre-image. Returns false (and changes
    /// nothing) when the undo stack is empty.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.document.pages) {
            return false;
        }
        self.clamp_cursor();
        self.selection.clear();
        tracing::debug!("undo: {} steps remain", self.history.undo_depth());
        true
    }

    /// Reapply the most recently undone state. Returns false when the redo
    /// stack is empty.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.document.pages) {
            return false;
        }
        self.clamp_cursor();
        self.selection.clear();
        tracing::debug!("redo: {} steps remain", self.history.redo_depth());
        true
    }

    // --- Save flags (driven by the persistence collaborator) -------------

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.is_saving = saving;
    }

    /// Stamp a completed save.
    pub fn mark_saved(&mut self) {
        self.is_saving = false;
        self.last_saved = Some(Utc::now());
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    // --- Shared mutation plumbing ----------------------------------------

    pub(crate) fn current_page_mut(&mut self) -> &mut Page {
        &mut self.document.pages[self.current_page]
    }

    /// Pre-image capture. Every pages-mutating operation calls this exactly
    /// once, before applying its change.
    pub(crate) fn save_to_history(&mut self) {
        self.history.record(self.document.pages.clone());
    }

    pub(crate) fn reindex_pages(&mut self) {
        for (index, page) in self.document.pages.iter_mut().enumerate() {
            page.order = index;
        }
    }

    pub(crate) fn clamp_cursor(&mut self) {
        self.current_page = self
            .current_page
            .min(self.document.pages.len().saturating_sub(1));
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
