use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::id::{document_id, IdGenerator};
use crate::page::Page;

/// Physical page format, in CSS pixels at 96 px/inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageSize {
    /// 8" x 8" album.
    Square8,
    /// 12" x 12" album, the classic scrapbook format.
    Square12,
    /// US Letter, portrait.
    Letter,
    /// ISO A4, portrait.
    A4,
}

impl PageSize {
    pub fn dimensions(&self) -> Size {
        match self {
            PageSize::Square8 => Size::new(768.0, 768.0),
            PageSize::Square12 => Size::new(1152.0, 1152.0),
            PageSize::Letter => Size::new(816.0, 1056.0),
            PageSize::A4 => Size::new(794.0, 1123.0),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Square12
    }
}

/// A whole scrapbook project: ordered pages plus shelf metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub tags: Vec<String>,
    pub page_size: PageSize,
    pub pages: Vec<Page>,
}

impl Document {
    /// Fresh document with a single blank page. Ids are derived from the
    /// title, so tests get stable values.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let id = document_id(&title);
        let mut ids = IdGenerator::from_seed(id.clone());
        let page_size = PageSize::default();
        let page = Page::blank(ids.new_id(), "Page 1", 0, page_size.dimensions());
        Self {
            id,
            title,
            description: String::new(),
            is_public: false,
            tags: Vec::new(),
            page_size,
            pages: vec![page],
        }
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize for the persistence collaborator.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a stored document. Structural repairs (order reindexing,
    /// empty-document rejection) happen in the store, not here.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_one_blank_page() {
        let document = Document::new("Summer Album");
        assert_eq!(document.page_count(), 1);
        assert_eq!(document.pages[0].order, 0);
        assert!(document.pages[0].elements.is_empty());
        assert_eq!(document.page_size, PageSize::Square12);
    }

    #[test]
    fn test_page_ids_share_document_seed() {
        let document = Document::new("Summer Album");
        assert!(document.pages[0].id.starts_with(&document.id));
    }

    #[test]
    fn test_page_size_dimensions() {
        assert_eq!(PageSize::Square12.dimensions(), Size::new(1152.0, 1152.0));
        assert_eq!(PageSize::Letter.dimensions(), Size::new(816.0, 1056.0));
    }

    #[test]
    fn test_json_round_trip() {
        let document = Document::new("Trip West");
        let json = document.to_json().unwrap();
        assert!(json.contains("\"pageSize\":\"square12\""));
        assert!(json.contains("\"isPublic\":false"));

        let back = Document::from_json(&json).unwrap();
        assert_eq!(document, back);
    }
}
