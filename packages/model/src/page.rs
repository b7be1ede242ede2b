use serde::{Deserialize, Serialize};

use crate::background::Background;
use crate::element::Element;
use crate::geometry::Size;

/// One spread of the scrapbook.
///
/// `elements` is kept in insertion order; painting order is derived from
/// `z_index` on demand. `order` mirrors the page's index in the owning
/// document and is maintained by the store, not by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub background: Background,
    pub elements: Vec<Element>,
    pub width: f64,
    pub height: f64,
    pub order: usize,
}

impl Page {
    /// A fresh page: solid white background, no elements.
    pub fn blank(id: impl Into<String>, name: impl Into<String>, order: usize, size: Size) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            background: Background::default(),
            elements: Vec::new(),
            width: size.width,
            height: size.height,
            order,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn find_element(&self, element_id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == element_id)
    }

    pub fn find_element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|element| element.id == element_id)
    }

    pub fn contains_element(&self, element_id: &str) -> bool {
        self.find_element(element_id).is_some()
    }

    pub fn max_z_index(&self) -> Option<i32> {
        self.elements.iter().map(|element| element.z_index).max()
    }

    pub fn min_z_index(&self) -> Option<i32> {
        self.elements.iter().map(|element| element.z_index).min()
    }

    /// Stacking key for the next element added to this page: one above the
    /// current top, never below 1.
    pub fn next_z_index(&self) -> i32 {
        self.max_z_index().unwrap_or(0).max(0) + 1
    }

    /// Elements in paint order: ascending `z_index`, insertion order as the
    /// tie-break.
    pub fn elements_in_render_order(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        ordered.sort_by_key(|element| element.z_index);
        ordered
    }
}
