//! # Snapshot History
//!
//! Bounded undo/redo stacks of whole-page-list snapshots.
//!
//! ## Design
//!
//! - Every pages-mutating store operation records its pre-image *before*
//!   applying the change
//! - Snapshots are structural deep copies of `Vec<Page>` (plain `Clone`),
//!   so restoring one can never half-apply
//! - `undo` swaps the live page list with the top pre-image and parks the
//!   live state on the redo stack; `redo` is the mirror image
//! - Recording a new snapshot clears the redo stack (history is linear,
//!   never branching)
//! - The undo stack is capped; the oldest entry is evicted first
//!
//! Selection and the page cursor are deliberately outside snapshots: the
//! store clears selection and re-clamps the cursor after every restore.

use keepsake_model::Page;

/// Undo levels kept when no explicit cap is given.
pub const DEFAULT_MAX_UNDO_STEPS: usize = 50;

/// Undo/redo stacks for document editing.
#[derive(Debug, Clone)]
pub struct History {
    /// Pre-image snapshots (most recent last)
    undo_stack: Vec<Vec<Page>>,

    /// Undone states (most recent last)
    redo_stack: Vec<Vec<Page>>,

    /// Maximum number of undo levels (0 = unlimited)
    max_steps: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_max_steps(DEFAULT_MAX_UNDO_STEPS)
    }

    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_steps,
        }
    }

    /// Record a pre-image snapshot. Trims to the cap and clears the redo
    /// stack (a new action invalidates the undone future).
    pub fn record(&mut self, snapshot: Vec<Page>) {
        self.undo_stack.push(snapshot);

        if self.max_steps > 0 && self.undo_stack.len() > self.max_steps {
            self.undo_stack.remove(0);
        }

        self.redo_stack.clear();
    }

    /// Swap the live page list with the most recent pre-image. Returns
    /// false when there is nothing to undo.
    pub fn undo(&mut self, live: &mut Vec<Page>) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.redo_stack.push(std::mem::replace(live, snapshot));
                true
            }
            None => false,
        }
    }

    /// Swap the live page list with the most recently undone state.
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self, live: &mut Vec<Page>) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                self.undo_stack.push(std::mem::replace(live, snapshot));
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop all history. Used when a whole new document is installed.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_model::{Document, PageSize, Size};

    fn pages(count: usize) -> Vec<Page> {
        (0..count)
            .map(|index| {
                Page::blank(
                    format!("p-{}", index + 1),
                    format!("Page {}", index + 1),
                    index,
                    PageSize::default().dimensions(),
                )
            })
            .collect()
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_undo_redo_round_trip() {
        let mut history = History::new();
        let before = pages(1);
        let mut live = before.clone();

        history.record(live.clone());
        live[0].width = 500.0;
        let after = live.clone();

        assert!(history.undo(&mut live));
        assert_eq!(live, before);
        assert_eq!(history.redo_depth(), 1);

        assert!(history.redo(&mut live));
        assert_eq!(live, after);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut history = History::new();
        let mut live = pages(1);
        let untouched = live.clone();

        assert!(!history.undo(&mut live));
        assert!(!history.redo(&mut live));
        assert_eq!(live, untouched);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        let mut live = pages(1);

        history.record(live.clone());
        live[0].width = 500.0;
        history.undo(&mut live);
        assert_eq!(history.redo_depth(), 1);

        history.record(live.clone());
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_max_steps_evicts_oldest() {
        let mut history = History::with_max_steps(2);

        for width in [100.0, 200.0, 300.0] {
            let mut snapshot = pages(1);
            snapshot[0].width = width;
            history.record(snapshot);
        }

        assert_eq!(history.undo_depth(), 2);

        // Oldest (width 100) was evicted; the top of the stack is width 300.
        let mut live = pages(1);
        history.undo(&mut live);
        assert_eq!(live[0].width, 300.0);
        history.undo(&mut live);
        assert_eq!(live[0].width, 200.0);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_zero_cap_is_unlimited() {
        let mut history = History::with_max_steps(0);
        for _ in 0..200 {
            history.record(pages(1));
        }
        assert_eq!(history.undo_depth(), 200);
    }

    #[test]
    fn test_snapshots_are_independent_of_live_state() {
        let mut history = History::new();
        let mut live = Document::new("Snapshots").pages;

        history.record(live.clone());
        live[0].elements.clear();
        live[0].width = 1.0;
        live[0].height = 1.0;

        history.undo(&mut live);
        assert_eq!(live[0].size(), Size::new(1152.0, 1152.0));
    }
}
