//! Selection: the set of element ids highlighted on the current page.
//!
//! Page-scoped by construction — switching pages clears it, and it is never
//! part of history snapshots (undo restores pages, not selection).

use std::collections::HashSet;

use crate::store::DocumentStore;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub(crate) fn replace_with(&mut self, id: String) {
        self.ids.clear();
        self.ids.insert(id);
    }

    pub(crate) fn replace_all(&mut self, ids: impl IntoIterator<Item = String>) {
        self.ids = ids.into_iter().collect();
    }

    pub(crate) fn toggle(&mut self, id: String) {
        if !self.ids.remove(id.as_str()) {
            self.ids.insert(id);
        }
    }

    pub(crate) fn remove(&mut self, id: &str) {
        self.ids.remove(id);
    }
}

impl DocumentStore {
    /// Click selection. `add_to_selection` is the shift-click path: it
    /// toggles membership instead of replacing the set.
    pub fn select_element(&mut self, id: &str, add_to_selection: bool) {
        if !self.current_page().contains_element(id) {
            tracing::debug!("select_element: {} not on current page", id);
            return;
        }
        if add_to_selection {
            self.selection.toggle(id.to_string());
        } else {
            self.selection.replace_with(id.to_string());
        }
    }

    /// Marquee selection: replaces the set outright. Ids not on the current
    /// page are dropped.
    pub fn select_elements(&mut self, ids: &[String]) {
        let on_page: Vec<String> = ids
            .iter()
            .filter(|id| self.current_page().contains_element(id))
            .cloned()
            .collect();
        self.selection.replace_all(on_page);
    }

    pub fn select_all(&mut self) {
        let ids: Vec<String> = self
            .current_page()
            .elements
            .iter()
            .map(|element| element.id.clone())
            .collect();
        self.selection.replace_all(ids);
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }
}
