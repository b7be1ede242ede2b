//! Z-order control: restacking elements on the current page.
//!
//! Stacking keys are plain integers. Ties are allowed — paint order is the
//! stable `(z_index, insertion order)` sort — so the step operations can
//! stay simple arithmetic rather than renumbering the page.

use crate::store::DocumentStore;

impl DocumentStore {
    /// Paint last: one above the page's current top.
    pub fn bring_to_front(&mut self, id: &str) {
        if !self.current_page().contains_element(id) {
            tracing::debug!("bring_to_front: {} not on current page", id);
            return;
        }
        let z_index = self.current_page().max_z_index().unwrap_or(0) + 1;
        self.restack(id, z_index);
    }

    /// Paint first: one below the page's current bottom.
    pub fn send_to_back(&mut self, id: &str) {
        if !self.current_page().contains_element(id) {
            tracing::debug!("send_to_back: {} not on current page", id);
            return;
        }
        let z_index = self.current_page().min_z_index().unwrap_or(0) - 1;
        self.restack(id, z_index);
    }

    /// One step up. May tie with a neighbour.
    pub fn bring_forward(&mut self, id: &str) {
        let Some(element) = self.current_page().find_element(id) else {
            tracing::debug!("bring_forward: {} not on current page", id);
            return;
        };
        let z_index = element.z_index + 1;
        self.restack(id, z_index);
    }

    /// One step down. May tie with a neighbour.
    pub fn send_backward(&mut self, id: &str) {
        let Some(element) = self.current_page().find_element(id) else {
            tracing::debug!("send_backward: {} not on current page", id);
            return;
        };
        let z_index = element.z_index - 1;
        self.restack(id, z_index);
    }

    fn restack(&mut self, id: &str, z_index: i32) {
        self.save_to_history();
        if let Some(element) = self.current_page_mut().find_element_mut(id) {
            element.z_index = z_index;
            tracing::debug!("restack: {} -> z {}", id, z_index);
        }
    }
}
