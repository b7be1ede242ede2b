//! Element registry: CRUD over the current page's elements.
//!
//! Ids and stacking keys are assigned here, never by callers. Missing ids
//! are benign (late UI events) and resolve as no-ops without burning an
//! undo step.

use keepsake_model::{ElementDraft, Position, Size};

use crate::patch::ElementPatch;
use crate::store::DocumentStore;

/// Offset applied to duplicated and pasted elements, in page units.
pub(crate) const PASTE_NUDGE: f64 = 20.0;

impl DocumentStore {
    /// Admit a draft onto the current page: fresh id, stacking key one above
    /// the page's top, appended last. The new element becomes the sole
    /// selection. Returns its id.
    pub fn add_element(&mut self, draft: ElementDraft) -> String {
        self.save_to_history();
        let id = self.insert_draft(draft);
        self.selection.replace_with(id.clone());
        id
    }

    /// Shared insertion path for add/duplicate/paste. Assigns identity and
    /// stacking; callers own their history snapshot and selection policy.
    pub(crate) fn insert_draft(&mut self, draft: ElementDraft) -> String {
        let id = self.ids.new_id();
        let z_index = self.current_page().next_z_index();
        let element = draft.into_element(id.clone(), z_index);
        tracing::debug!("add_element: {} {} at z {}", element.kind_name(), id, z_index);
        self.current_page_mut().elements.push(element);
        id
    }

    /// Apply a typed patch to one element on the current page. Unknown id
    /// or an empty patch changes nothing (and records no undo step).
    pub fn update_element(&mut self, id: &str, patch: ElementPatch) {
        if patch.is_empty() {
            return;
        }
        if !self.current_page().contains_element(id) {
            tracing::debug!("update_element: {} not on current page", id);
            return;
        }
        self.save_to_history();
        if let Some(element) = self.current_page_mut().find_element_mut(id) {
            patch.apply_to(element);
        }
    }

    /// Remove one element and evict it from the selection. Unknown id is a
    /// no-op.
    pub fn delete_element(&mut self, id: &str) {
        if !self.current_page().contains_element(id) {
            tracing::debug!("delete_element: {} not on current page", id);
            return;
        }
        self.save_to_history();
        self.current_page_mut().elements.retain(|element| element.id != id);
        self.selection.remove(id);
        tracing::debug!("delete_element: {}", id);
    }

    /// Clone an element through the draft path: fresh id and stacking key,
    /// position nudged. The clone becomes the selection. Returns `None`
    /// when the source id is missing — callers treat that as "nothing
    /// happened".
    pub fn duplicate_element(&mut self, id: &str) -> Option<String> {
        let draft = self.current_page().find_element(id).map(|element| {
            let mut draft = element.to_draft();
            draft.position = draft.position.offset(PASTE_NUDGE, PASTE_NUDGE);
            draft
        })?;

        self.save_to_history();
        let new_id = self.insert_draft(draft);
        self.selection.replace_with(new_id.clone());
        tracing::debug!("duplicate_element: {} -> {}", id, new_id);
        Some(new_id)
    }

    // --- Gesture wrappers -------------------------------------------------

    pub fn move_element(&mut self, id: &str, position: Position) {
        self.update_element(id, ElementPatch::new().position(position));
    }

    pub fn resize_element(&mut self, id: &str, size: Size) {
        self.update_element(id, ElementPatch::new().size(size));
    }

    /// Rotation only — sibling transform fields are untouched.
    pub fn rotate_element(&mut self, id: &str, degrees: f64) {
        self.update_element(id, ElementPatch::new().rotation(degrees));
    }
}
