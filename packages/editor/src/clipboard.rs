//! Single-slot clipboard plus the copy/cut/paste/delete-selected operations.
//!
//! The slot is not a stack: a later copy overwrites it. It survives page
//! switches (copy on page 1, paste on page 3 works) and is only dropped when
//! a whole new document is installed.

use keepsake_model::{Element, ElementDraft};

use crate::elements::PASTE_NUDGE;
use crate::store::DocumentStore;

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    slot: Option<Vec<Element>>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn len(&self) -> usize {
        self.slot.as_ref().map_or(0, Vec::len)
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Overwrite the slot. Empty input is ignored so a stray copy gesture
    /// cannot clobber real contents.
    pub(crate) fn fill(&mut self, elements: Vec<Element>) {
        if !elements.is_empty() {
            self.slot = Some(elements);
        }
    }

    pub(crate) fn contents(&self) -> Option<&[Element]> {
        self.slot.as_deref()
    }
}

impl DocumentStore {
    /// Deep-clone the selected elements (ids and stacking intact) into the
    /// clipboard slot, in page order. Empty selection leaves the slot alone.
    pub fn copy(&mut self) {
        let selected: Vec<Element> = self.selected_elements().into_iter().cloned().collect();
        if selected.is_empty() {
            return;
        }
        tracing::debug!("copy: {} elements", selected.len());
        self.clipboard.fill(selected);
    }

    /// Copy, then delete the selection. One undo step total (copy itself
    /// never touches pages).
    pub fn cut(&mut self) {
        self.copy();
        self.delete_selected_elements();
    }

    /// Re-add every clipboard element to the *current* page with a fresh id,
    /// fresh stacking key, and the standard paste nudge. Selection becomes
    /// the pasted ids. Returns the new ids; empty slot is a no-op.
    pub fn paste(&mut self) -> Vec<String> {
        let drafts: Vec<ElementDraft> = match self.clipboard.contents() {
            Some(elements) => elements
                .iter()
                .map(|element| {
                    let mut draft = element.to_draft();
                    draft.position = draft.position.offset(PASTE_NUDGE, PASTE_NUDGE);
                    draft
                })
                .collect(),
            None => return Vec::new(),
        };

        self.save_to_history();
        let mut new_ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            new_ids.push(self.insert_draft(draft));
        }
        self.selection.replace_all(new_ids.iter().cloned());
        tracing::debug!("paste: {} elements", new_ids.len());
        new_ids
    }

    /// Remove every selected element from the current page in one undo step.
    pub fn delete_selected_elements(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.save_to_history();
        let doomed = self.selection.clone();
        self.current_page_mut()
            .elements
            .retain(|element| !doomed.contains(&element.id));
        self.selection.clear();
        tracing::debug!("delete_selected_elements: removed {}", doomed.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: &str) -> Element {
        use keepsake_model::Position;
        ElementDraft::text("x", Position::new(0.0, 0.0)).into_element(id.to_string(), 1)
    }

    #[test]
    fn test_later_copy_overwrites_slot() {
        let mut clipboard = Clipboard::new();
        clipboard.fill(vec![element("a")]);
        clipboard.fill(vec![element("b"), element("c")]);
        assert_eq!(clipboard.len(), 2);
    }

    #[test]
    fn test_empty_fill_is_ignored() {
        let mut clipboard = Clipboard::new();
        clipboard.fill(vec![element("a")]);
        clipboard.fill(Vec::new());
        assert_eq!(clipboard.len(), 1);
        assert!(!clipboard.is_empty());
    }
}
