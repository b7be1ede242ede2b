//! Page manager: the ordered page list and the cursor over it.
//!
//! Two invariants hold after every operation here: the document keeps at
//! least one page, and `pages[i].order == i`.

use keepsake_model::{Background, Page};

use crate::store::DocumentStore;

impl DocumentStore {
    /// Move the cursor. Out of range is a no-op; an actual page change
    /// clears the selection (selection is page-scoped).
    pub fn set_current_page(&mut self, index: usize) {
        if index >= self.page_count() {
            tracing::warn!("set_current_page: index {} out of range", index);
            return;
        }
        if index != self.current_page_index() {
            self.selection.clear();
            self.current_page = index;
        }
    }

    /// Insert a blank page after `after` (clamped; `None` appends) and move
    /// the cursor to it. Returns the new page's id.
    pub fn add_page(&mut self, after: Option<usize>) -> String {
        self.save_to_history();

        let insert_at = match after {
            Some(index) => (index + 1).min(self.page_count()),
            None => self.page_count(),
        };
        let id = self.ids.new_id();
        let name = format!("Page {}", self.page_count() + 1);
        let size = self.document.page_size.dimensions();

        self.document
            .pages
            .insert(insert_at, Page::blank(id.clone(), name, insert_at, size));
        self.reindex_pages();
        self.current_page = insert_at;
        self.selection.clear();

        tracing::debug!("add_page: {} at index {}", id, insert_at);
        id
    }

    /// Remove a page. Refused below the one-page floor; out of range is a
    /// no-op. The cursor clamps back into range, and the selection is
    /// cleared only if a different page ends up under it.
    pub fn delete_page(&mut self, index: usize) {
        if self.page_count() <= 1 {
            tracing::warn!("delete_page: refusing to drop the last page");
            return;
        }
        if index >= self.page_count() {
            tracing::warn!("delete_page: index {} out of range", index);
            return;
        }

        self.save_to_history();
        let page_under_cursor = self.current_page().id.clone();
        self.document.pages.remove(index);
        self.reindex_pages();
        self.clamp_cursor();
        if self.current_page().id != page_under_cursor {
            self.selection.clear();
        }
        tracing::debug!("delete_page: removed index {}", index);
    }

    /// Deep-clone a page directly after its source and move the cursor to
    /// the copy. Every cloned element gets a fresh id; geometry, content and
    /// stacking are preserved. Returns the new page id, or `None` when the
    /// index is out of range.
    pub fn duplicate_page(&mut self, index: usize) -> Option<String> {
        if index >= self.page_count() {
            tracing::warn!("duplicate_page: index {} out of range", index);
            return None;
        }

        self.save_to_history();
        let source = self.document.pages[index].clone();
        let page_id = self.ids.new_id();
        let mut copy = Page {
            id: page_id.clone(),
            name: format!("{} (Copy)", source.name),
            background: source.background,
            elements: Vec::with_capacity(source.elements.len()),
            width: source.width,
            height: source.height,
            order: index + 1,
        };
        for element in source.elements {
            let mut cloned = element;
            cloned.id = self.ids.new_id();
            copy.elements.push(cloned);
        }

        self.document.pages.insert(index + 1, copy);
        self.reindex_pages();
        self.current_page = index + 1;
        self.selection.clear();

        tracing::debug!("duplicate_page: {} -> {}", index, page_id);
        Some(page_id)
    }

    /// Move one page to a new position and reindex. The cursor follows the
    /// page it was on, so the selection stays valid. Out of range or
    /// `from == to` is a no-op.
    pub fn reorder_pages(&mut self, from: usize, to: usize) {
        let count = self.page_count();
        if from >= count || to >= count {
            tracing::warn!("reorder_pages: {} -> {} out of range", from, to);
            return;
        }
        if from == to {
            return;
        }

        self.save_to_history();
        let page_under_cursor = self.current_page().id.clone();
        let page = self.document.pages.remove(from);
        self.document.pages.insert(to, page);
        self.reindex_pages();

        if let Some(position) = self
            .document
            .pages
            .iter()
            .position(|page| page.id == page_under_cursor)
        {
            self.current_page = position;
        }
        tracing::debug!("reorder_pages: {} -> {}", from, to);
    }

    /// Replace the current page's background. Backgrounds are a tagged
    /// union, so they swap whole.
    pub fn update_background(&mut self, background: Background) {
        self.save_to_history();
        self.current_page_mut().background = background;
    }
}
