//! End-to-end editing scenarios through the public store API

use keepsake_editor::{DocumentStore, ElementDraft, ElementKind, Position, ShapeKind, Size};

fn photo(x: f64, y: f64) -> ElementDraft {
    ElementDraft::photo("blob:photo", Position::new(x, y), Size::new(400.0, 300.0))
}

fn text(content: &str, x: f64, y: f64) -> ElementDraft {
    ElementDraft::text(content, Position::new(x, y))
}

#[test]
fn test_fresh_document_then_three_added_pages() {
    let mut store = DocumentStore::new();
    assert_eq!(store.page_count(), 1);

    store.add_page(None);
    store.add_page(None);
    store.add_page(None);

    assert_eq!(store.page_count(), 4);
    let orders: Vec<usize> = store.document().pages.iter().map(|page| page.order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3]);
}

#[test]
fn test_stacking_from_empty_page() {
    let mut store = DocumentStore::new();

    let first = store.add_element(photo(0.0, 0.0));
    let second = store.add_element(text("caption", 10.0, 10.0));

    assert_eq!(store.find_element(&first).unwrap().z_index, 1);
    assert_eq!(store.find_element(&second).unwrap().z_index, 2);

    store.bring_to_front(&first);
    assert_eq!(store.find_element(&first).unwrap().z_index, 3);
}

#[test]
fn test_copy_delete_paste_round_trip() {
    let mut store = DocumentStore::new();
    let a = store.add_element(photo(100.0, 100.0));
    let b = store.add_element(text("hello", 200.0, 150.0));

    store.select_elements(&[a.clone(), b.clone()]);
    store.copy();
    store.delete_selected_elements();
    assert!(store.current_page().elements.is_empty());

    let pasted = store.paste();
    assert_eq!(pasted.len(), 2);
    assert_eq!(store.current_page().elements.len(), 2);

    // Fresh ids, same order, nudged positions.
    assert!(!pasted.contains(&a));
    assert!(!pasted.contains(&b));
    let elements = &store.current_page().elements;
    assert_eq!(elements[0].position, Position::new(120.0, 120.0));
    assert_eq!(elements[1].position, Position::new(220.0, 170.0));
    assert!(matches!(elements[0].kind, ElementKind::Photo(_)));
    assert!(matches!(elements[1].kind, ElementKind::Text(_)));

    // The pasted pair is now the selection.
    assert_eq!(store.selected_ids(), pasted);
}

#[test]
fn test_last_page_cannot_be_deleted() {
    let mut store = DocumentStore::new();
    store.delete_page(0);
    assert_eq!(store.page_count(), 1);
}

#[test]
fn test_mutation_after_undo_discards_redo() {
    let mut store = DocumentStore::new();
    let id = store.add_element(photo(0.0, 0.0)); // mutation 1
    store.move_element(&id, Position::new(40.0, 40.0)); // mutation 2

    assert!(store.undo());
    assert!(store.can_redo());

    // A fresh branch: this mutation's snapshot clears the redo stack.
    store.add_element(text("new branch", 0.0, 0.0));
    assert!(!store.can_redo());
    assert!(!store.redo());
}

#[test]
fn test_page_floor_holds_through_add_delete_storm() {
    let mut store = DocumentStore::new();
    for round in 0..6 {
        store.add_page(None);
        if round % 2 == 0 {
            store.delete_page(0);
        }
    }
    for _ in 0..20 {
        store.delete_page(0);
    }
    assert_eq!(store.page_count(), 1);
}

#[test]
fn test_order_indices_track_every_mutation() {
    let mut store = DocumentStore::new();
    store.add_page(None);
    store.add_page(Some(0));
    store.duplicate_page(1);
    store.reorder_pages(3, 0);
    store.delete_page(2);

    let orders: Vec<usize> = store.document().pages.iter().map(|page| page.order).collect();
    assert_eq!(orders, (0..store.page_count()).collect::<Vec<_>>());
}

#[test]
fn test_render_order_reproducible_without_mutation() {
    let mut store = DocumentStore::new();
    let a = store.add_element(photo(0.0, 0.0));
    store.add_element(text("x", 0.0, 0.0));
    store.bring_forward(&a); // create a tie

    let first: Vec<String> = store
        .current_page()
        .elements_in_render_order()
        .iter()
        .map(|element| element.id.clone())
        .collect();
    for _ in 0..5 {
        let again: Vec<String> = store
            .current_page()
            .elements_in_render_order()
            .iter()
            .map(|element| element.id.clone())
            .collect();
        assert_eq!(again, first);
    }
}

#[test]
fn test_deselect_and_delete_are_idempotent() {
    let mut store = DocumentStore::new();
    let id = store.add_element(photo(0.0, 0.0));

    store.deselect_all();
    store.deselect_all();
    assert_eq!(store.selection_size(), 0);

    store.delete_element(&id);
    let depth = store.undo_depth();
    store.delete_element(&id);
    assert_eq!(store.undo_depth(), depth);
    assert!(store.current_page().elements.is_empty());
}

#[test]
fn test_clipboard_survives_page_switch() {
    let mut store = DocumentStore::new();
    let id = store.add_element(text("travels", 10.0, 10.0));
    store.select_element(&id, false);
    store.copy();

    store.add_page(None); // cursor moves to the new page
    assert!(store.has_clipboard_content());

    let pasted = store.paste();
    assert_eq!(pasted.len(), 1);
    assert_eq!(store.current_page_index(), 1);
    assert_eq!(store.current_page().elements.len(), 1);
    // Source page untouched.
    assert_eq!(store.document().pages[0].elements.len(), 1);
}

#[test]
fn test_cut_is_one_undo_step() {
    let mut store = DocumentStore::new();
    let id = store.add_element(photo(0.0, 0.0));
    store.select_element(&id, false);

    let depth = store.undo_depth();
    store.cut();
    assert!(store.current_page().elements.is_empty());
    assert_eq!(store.undo_depth(), depth + 1);

    assert!(store.undo());
    assert_eq!(store.current_page().elements.len(), 1);
    // Clipboard still holds the cut element after undo.
    assert!(store.has_clipboard_content());
}

#[test]
fn test_empty_clipboard_paste_is_noop() {
    let mut store = DocumentStore::new();
    let depth = store.undo_depth();
    assert!(store.paste().is_empty());
    assert_eq!(store.undo_depth(), depth);
}

#[test]
fn test_copy_with_empty_selection_keeps_slot() {
    let mut store = DocumentStore::new();
    let id = store.add_element(text("keep", 0.0, 0.0));
    store.select_element(&id, false);
    store.copy();

    store.deselect_all();
    store.copy(); // nothing selected: slot must survive

    assert_eq!(store.paste().len(), 1);
}

#[test]
fn test_shift_click_toggles_membership() {
    let mut store = DocumentStore::new();
    let a = store.add_element(photo(0.0, 0.0));
    let b = store.add_element(photo(30.0, 30.0));

    store.select_element(&a, false);
    store.select_element(&b, true);
    assert_eq!(store.selection_size(), 2);

    store.select_element(&b, true); // toggle off
    assert_eq!(store.selection_size(), 1);
    assert!(store.is_selected(&a));

    store.select_element(&b, false); // plain click replaces
    assert_eq!(store.selected_ids(), vec![b]);
}

#[test]
fn test_select_all_covers_page_and_only_page() {
    let mut store = DocumentStore::new();
    store.add_element(photo(0.0, 0.0));
    store.add_element(text("x", 0.0, 0.0));
    store.add_page(None);
    store.add_element(ElementDraft::shape(
        ShapeKind::Star,
        Position::new(0.0, 0.0),
        Size::new(64.0, 64.0),
    ));

    store.select_all();
    assert_eq!(store.selection_size(), 1); // only the current page's element

    store.set_current_page(0);
    store.select_all();
    assert_eq!(store.selection_size(), 2);
}

#[test]
fn test_selection_ignores_foreign_ids() {
    let mut store = DocumentStore::new();
    let id = store.add_element(photo(0.0, 0.0));

    store.select_element("ghost-3", false);
    assert_eq!(store.selected_ids(), vec![id.clone()]); // unchanged

    store.select_elements(&[id.clone(), "ghost-4".to_string()]);
    assert_eq!(store.selected_ids(), vec![id]);
}
