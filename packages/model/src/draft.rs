use serde::{Deserialize, Serialize};

use crate::background::Background;
use crate::element::{
    BackgroundElement, Border, Element, ElementKind, FontStyle, FontWeight, PhotoElement,
    PhotoFilters, Shadow, ShapeElement, ShapeKind, StickerElement, Stroke, TextAlign, TextElement,
};
use crate::geometry::{Position, Size, Transform};

/// An element before the store has admitted it: everything except `id` and
/// `z_index`, which the store alone assigns on insertion.
///
/// Drafts are the only way into a page. Collaborators (image ingestion,
/// catalogs, stock search) resolve their payloads fully, build a draft
/// through a factory below, and hand it to `add_element`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDraft {
    pub position: Position,
    pub size: Size,
    pub transform: Transform,
    pub opacity: f64,
    pub locked: bool,
    pub visible: bool,
    pub shadow: Option<Shadow>,
    pub border: Option<Border>,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl ElementDraft {
    pub fn new(kind: ElementKind, position: Position, size: Size) -> Self {
        Self {
            position,
            size,
            transform: Transform::default(),
            opacity: 1.0,
            locked: false,
            visible: true,
            shadow: None,
            border: None,
            kind,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Placed photo. `src` must already be decoded to a displayable source;
    /// `size` comes from the ingestion layer's fit-to-page pass.
    pub fn photo(src: impl Into<String>, position: Position, size: Size) -> Self {
        Self::new(
            ElementKind::Photo(PhotoElement {
                src: src.into(),
                filters: PhotoFilters::default(),
                crop: None,
                mask: None,
                frame: None,
            }),
            position,
            size,
        )
    }

    /// Journaling text box with the tool's stock typography.
    pub fn text(content: impl Into<String>, position: Position) -> Self {
        Self::new(
            ElementKind::Text(TextElement {
                content: content.into(),
                font_family: "Georgia".to_string(),
                font_size: 24.0,
                font_weight: FontWeight::Normal,
                font_style: FontStyle::Normal,
                text_align: TextAlign::Left,
                color: "#333333".to_string(),
                line_height: 1.4,
                letter_spacing: 0.0,
            }),
            position,
            Size::new(300.0, 80.0),
        )
    }

    pub fn shape(shape: ShapeKind, position: Position, size: Size) -> Self {
        Self::new(
            ElementKind::Shape(ShapeElement {
                shape,
                fill: "#cccccc".to_string(),
                stroke: Stroke {
                    color: "#000000".to_string(),
                    width: 0.0,
                },
            }),
            position,
            size,
        )
    }

    pub fn sticker(
        sticker_id: impl Into<String>,
        src: impl Into<String>,
        category: impl Into<String>,
        position: Position,
        size: Size,
    ) -> Self {
        Self::new(
            ElementKind::Sticker(StickerElement {
                sticker_id: sticker_id.into(),
                src: src.into(),
                category: category.into(),
            }),
            position,
            size,
        )
    }

    /// Catalog background placed as a locked, page-covering element.
    /// Stacking follows the normal add path; the shell sends it to the back.
    pub fn background(background: Background, page_size: Size) -> Self {
        Self::new(
            ElementKind::Background(BackgroundElement { background }),
            Position::new(0.0, 0.0),
            page_size,
        )
        .locked()
    }

    pub fn into_element(self, id: String, z_index: i32) -> Element {
        Element {
            id,
            position: self.position,
            size: self.size,
            transform: self.transform,
            opacity: self.opacity,
            locked: self.locked,
            visible: self.visible,
            shadow: self.shadow,
            border: self.border,
            z_index,
            kind: self.kind,
        }
    }
}

impl Element {
    /// Deep clone minus identity. Duplicate and paste feed this back through
    /// the add path so the store re-assigns `id` and `z_index`.
    pub fn to_draft(&self) -> ElementDraft {
        ElementDraft {
            position: self.position,
            size: self.size,
            transform: self.transform,
            opacity: self.opacity,
            locked: self.locked,
            visible: self.visible,
            shadow: self.shadow.clone(),
            border: self.border.clone(),
            kind: self.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_factory_defaults() {
        let draft = ElementDraft::photo("blob:p1", Position::new(10.0, 20.0), Size::new(400.0, 300.0));
        assert_eq!(draft.opacity, 1.0);
        assert!(draft.visible);
        assert!(!draft.locked);
        match &draft.kind {
            ElementKind::Photo(photo) => {
                assert_eq!(photo.src, "blob:p1");
                assert_eq!(photo.filters, PhotoFilters::default());
                assert!(photo.crop.is_none());
            }
            other => panic!("expected photo, got {:?}", other),
        }
    }

    #[test]
    fn test_background_factory_is_locked_and_page_covering() {
        let draft = ElementDraft::background(Background::solid_white(), Size::new(1152.0, 1152.0));
        assert!(draft.locked);
        assert_eq!(draft.position, Position::new(0.0, 0.0));
        assert_eq!(draft.size, Size::new(1152.0, 1152.0));
    }

    #[test]
    fn test_into_element_and_back() {
        let draft = ElementDraft::text("hello", Position::new(5.0, 5.0)).with_opacity(0.5);
        let element = draft.clone().into_element("doc-7".to_string(), 3);
        assert_eq!(element.id, "doc-7");
        assert_eq!(element.z_index, 3);
        assert_eq!(element.opacity, 0.5);

        // Round trip strips only identity.
        assert_eq!(element.to_draft(), draft);
    }

    #[test]
    fn test_draft_deserializes_element_sans_id_and_z() {
        let json = r#"{
            "position": {"x": 1.0, "y": 2.0},
            "size": {"width": 50.0, "height": 40.0},
            "transform": {"rotation": 0.0, "scaleX": 1.0, "scaleY": 1.0, "flipX": false, "flipY": false},
            "opacity": 1.0,
            "locked": false,
            "visible": true,
            "shadow": null,
            "border": null,
            "type": "sticker",
            "stickerId": "st-1",
            "src": "https://assets/st-1.svg",
            "category": "florals"
        }"#;
        let draft: ElementDraft = serde_json::from_str(json).unwrap();
        match &draft.kind {
            ElementKind::Sticker(sticker) => assert_eq!(sticker.sticker_id, "st-1"),
            other => panic!("expected sticker, got {:?}", other),
        }
    }
}
