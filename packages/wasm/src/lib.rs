use keepsake_editor::{
    DocumentStore, ElementDraft, MetadataPatch, Position, ShapeKind, Size,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// The editing engine, wrapped for the browser shell. One instance owns one
/// open document; every edit goes through it. Documents cross the boundary
/// as JSON strings.
#[wasm_bindgen]
pub struct ScrapbookStudio {
    store: DocumentStore,
}

#[wasm_bindgen]
impl ScrapbookStudio {
    /// Fresh studio around an untitled single-page document.
    #[wasm_bindgen(constructor)]
    pub fn new() -> ScrapbookStudio {
        ScrapbookStudio {
            store: DocumentStore::new(),
        }
    }

    // --- Document lifecycle ----------------------------------------------

    /// Install a stored document (JSON). Clears history and clipboard.
    #[wasm_bindgen(js_name = loadDocument)]
    pub fn load_document(&mut self, json: &str) -> Result<(), JsValue> {
        self.store
            .load_json(json)
            .map_err(|e| JsValue::from_str(&format!("Load error: {}", e)))
    }

    /// Serialize the live document for saving.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.store
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&mut self, title: &str) {
        self.store.update_metadata(MetadataPatch::new().title(title));
    }

    pub fn title(&self) -> String {
        self.store.document().title.clone()
    }

    // --- Pages ------------------------------------------------------------

    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.store.page_count()
    }

    #[wasm_bindgen(js_name = currentPageIndex)]
    pub fn current_page_index(&self) -> usize {
        self.store.current_page_index()
    }

    /// The current page as JSON, for the shell to render from.
    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.store.current_page())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = setCurrentPage)]
    pub fn set_current_page(&mut self, index: usize) {
        self.store.set_current_page(index);
    }

    /// Insert a blank page (after `after_index`, or at the end) and return
    /// its id.
    #[wasm_bindgen(js_name = addPage)]
    pub fn add_page(&mut self, after_index: Option<usize>) -> String {
        self.store.add_page(after_index)
    }

    #[wasm_bindgen(js_name = deletePage)]
    pub fn delete_page(&mut self, index: usize) {
        self.store.delete_page(index);
    }

    /// Returns the new page id, or `undefined` if the index was stale.
    #[wasm_bindgen(js_name = duplicatePage)]
    pub fn duplicate_page(&mut self, index: usize) -> Option<String> {
        self.store.duplicate_page(index)
    }

    #[wasm_bindgen(js_name = reorderPages)]
    pub fn reorder_pages(&mut self, from: usize, to: usize) {
        self.store.reorder_pages(from, to);
    }

    // --- Element factories -------------------------------------------------

    /// Place a decoded photo. Returns the new element id.
    #[wasm_bindgen(js_name = addPhoto)]
    pub fn add_photo(&mut self, src: &str, x: f64, y: f64, width: f64, height: f64) -> String {
        self.store.add_element(ElementDraft::photo(
            src,
            Position::new(x, y),
            Size::new(width, height),
        ))
    }

    #[wasm_bindgen(js_name = addText)]
    pub fn add_text(&mut self, content: &str, x: f64, y: f64) -> String {
        self.store
            .add_element(ElementDraft::text(content, Position::new(x, y)))
    }

    /// `shape` is one of: rectangle, ellipse, triangle, star, heart, arrow,
    /// line.
    #[wasm_bindgen(js_name = addShape)]
    pub fn add_shape(
        &mut self,
        shape: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<String, JsValue> {
        let kind = match shape {
            "rectangle" => ShapeKind::Rectangle,
            "ellipse" => ShapeKind::Ellipse,
            "triangle" => ShapeKind::Triangle,
            "star" => ShapeKind::Star,
            "heart" => ShapeKind::Heart,
            "arrow" => ShapeKind::Arrow,
            "line" => ShapeKind::Line,
            other => return Err(JsValue::from_str(&format!("Unknown shape: {}", other))),
        };
        Ok(self.store.add_element(ElementDraft::shape(
            kind,
            Position::new(x, y),
            Size::new(width, height),
        )))
    }

    /// Place a clip-art path from the shape catalog.
    #[wasm_bindgen(js_name = addCustomShape)]
    pub fn add_custom_shape(
        &mut self,
        path: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> String {
        self.store.add_element(ElementDraft::shape(
            ShapeKind::Custom {
                path: path.to_string(),
            },
            Position::new(x, y),
            Size::new(width, height),
        ))
    }

    #[wasm_bindgen(js_name = addSticker)]
    pub fn add_sticker(
        &mut self,
        sticker_id: &str,
        src: &str,
        category: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> String {
        self.store.add_element(ElementDraft::sticker(
            sticker_id,
            src,
            category,
            Position::new(x, y),
            Size::new(width, height),
        ))
    }

    // --- Element edits -----------------------------------------------------

    #[wasm_bindgen(js_name = moveElement)]
    pub fn move_element(&mut self, id: &str, x: f64, y: f64) {
        self.store.move_element(id, Position::new(x, y));
    }

    #[wasm_bindgen(js_name = resizeElement)]
    pub fn resize_element(&mut self, id: &str, width: f64, height: f64) {
        self.store.resize_element(id, Size::new(width, height));
    }

    #[wasm_bindgen(js_name = rotateElement)]
    pub fn rotate_element(&mut self, id: &str, degrees: f64) {
        self.store.rotate_element(id, degrees);
    }

    #[wasm_bindgen(js_name = deleteElement)]
    pub fn delete_element(&mut self, id: &str) {
        self.store.delete_element(id);
    }

    /// Returns the clone's id, or `undefined` if the source id was stale.
    #[wasm_bindgen(js_name = duplicateElement)]
    pub fn duplicate_element(&mut self, id: &str) -> Option<String> {
        self.store.duplicate_element(id)
    }

    // --- Z-order -----------------------------------------------------------

    #[wasm_bindgen(js_name = bringToFront)]
    pub fn bring_to_front(&mut self, id: &str) {
        self.store.bring_to_front(id);
    }

    #[wasm_bindgen(js_name = sendToBack)]
    pub fn send_to_back(&mut self, id: &str) {
        self.store.send_to_back(id);
    }

    #[wasm_bindgen(js_name = bringForward)]
    pub fn bring_forward(&mut self, id: &str) {
        self.store.bring_forward(id);
    }

    #[wasm_bindgen(js_name = sendBackward)]
    pub fn send_backward(&mut self, id: &str) {
        self.store.send_backward(id);
    }

    // --- Selection & clipboard ---------------------------------------------

    #[wasm_bindgen(js_name = selectElement)]
    pub fn select_element(&mut self, id: &str, add_to_selection: bool) {
        self.store.select_element(id, add_to_selection);
    }

    #[wasm_bindgen(js_name = selectElements)]
    pub fn select_elements(&mut self, ids: Vec<String>) {
        self.store.select_elements(&ids);
    }

    #[wasm_bindgen(js_name = selectAll)]
    pub fn select_all(&mut self) {
        self.store.select_all();
    }

    #[wasm_bindgen(js_name = deselectAll)]
    pub fn deselect_all(&mut self) {
        self.store.deselect_all();
    }

    /// Selected element ids in page order.
    #[wasm_bindgen(js_name = selectedIds)]
    pub fn selected_ids(&self) -> Vec<String> {
        self.store.selected_ids()
    }

    pub fn copy(&mut self) {
        self.store.copy();
    }

    pub fn cut(&mut self) {
        self.store.cut();
    }

    /// Returns the pasted element ids (empty when the clipboard is empty).
    pub fn paste(&mut self) -> Vec<String> {
        self.store.paste()
    }

    #[wasm_bindgen(js_name = hasClipboardContent)]
    pub fn has_clipboard_content(&self) -> bool {
        self.store.has_clipboard_content()
    }

    // --- History -----------------------------------------------------------

    /// Returns whether anything was undone.
    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    /// Returns whether anything was reapplied.
    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    #[wasm_bindgen(js_name = undoDepth)]
    pub fn undo_depth(&self) -> usize {
        self.store.undo_depth()
    }

    #[wasm_bindgen(js_name = redoDepth)]
    pub fn redo_depth(&self) -> usize {
        self.store.redo_depth()
    }

    // --- Save flags ---------------------------------------------------------

    #[wasm_bindgen(js_name = isSaving)]
    pub fn is_saving(&self) -> bool {
        self.store.is_saving()
    }

    #[wasm_bindgen(js_name = setSaving)]
    pub fn set_saving(&mut self, saving: bool) {
        self.store.set_saving(saving);
    }

    #[wasm_bindgen(js_name = markSaved)]
    pub fn mark_saved(&mut self) {
        self.store.mark_saved();
    }

    /// RFC 3339 timestamp of the last completed save, if any.
    #[wasm_bindgen(js_name = lastSaved)]
    pub fn last_saved(&self) -> Option<String> {
        self.store.last_saved().map(|stamp| stamp.to_rfc3339())
    }
}

impl Default for ScrapbookStudio {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studio_basic_flow() {
        let mut studio = ScrapbookStudio::new();
        assert_eq!(studio.page_count(), 1);

        let id = studio.add_photo("blob:p", 10.0, 10.0, 400.0, 300.0);
        studio.rotate_element(&id, 15.0);
        assert!(studio.can_undo());

        assert!(studio.undo());
        assert!(studio.redo());
    }

    #[test]
    fn test_studio_json_round_trip() {
        let mut studio = ScrapbookStudio::new();
        studio.set_title("Road Trip 2024");
        studio.add_text("Day one", 50.0, 50.0);

        let json = studio.to_json().unwrap();
        let mut other = ScrapbookStudio::new();
        other.load_document(&json).unwrap();

        assert_eq!(other.title(), "Road Trip 2024");
        assert_eq!(other.page_count(), 1);
    }

    #[test]
    fn test_studio_rejects_unknown_shape() {
        let mut studio = ScrapbookStudio::new();
        assert!(studio.add_shape("dodecahedron", 0.0, 0.0, 10.0, 10.0).is_err());
        assert!(studio.add_shape("heart", 0.0, 0.0, 10.0, 10.0).is_ok());
    }

    #[test]
    fn test_studio_copy_paste() {
        let mut studio = ScrapbookStudio::new();
        let id = studio.add_sticker("st-1", "https://assets/st-1.svg", "florals", 5.0, 5.0, 64.0, 64.0);
        studio.select_element(&id, false);
        studio.copy();

        let pasted = studio.paste();
        assert_eq!(pasted.len(), 1);
        assert_eq!(studio.selected_ids(), pasted);
    }
}
