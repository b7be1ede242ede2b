use serde::{Deserialize, Serialize};

use crate::background::Background;
use crate::geometry::{Position, Size, Transform};

/// Drop shadow behind an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub color: String,
}

/// Border drawn around an element's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub color: String,
    pub width: f64,
    pub radius: f64,
}

/// A single placed object on a page.
///
/// All five kinds share the positional/visual base below; what the element
/// actually *is* lives in [`ElementKind`]. Paint order across a page is
/// ascending `z_index`, ties broken by list position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique within the owning page. Assigned by the store, never by hand.
    pub id: String,
    pub position: Position,
    pub size: Size,
    pub transform: Transform,
    /// 0.0 (invisible) ..= 1.0 (opaque).
    pub opacity: f64,
    pub locked: bool,
    pub visible: bool,
    pub shadow: Option<Shadow>,
    pub border: Option<Border>,
    /// Integer stacking key; higher paints later (on top).
    pub z_index: i32,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// Short kind label for logs and debugging.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            ElementKind::Photo(_) => "photo",
            ElementKind::Text(_) => "text",
            ElementKind::Shape(_) => "shape",
            ElementKind::Sticker(_) => "sticker",
            ElementKind::Background(_) => "background",
        }
    }
}

/// The five placeable scrapbook object kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementKind {
    Photo(PhotoElement),
    Text(TextElement),
    Shape(ShapeElement),
    Sticker(StickerElement),
    Background(BackgroundElement),
}

/// A placed photo. `src` is already decoded and resolved by the ingestion
/// layer — the engine never sees raw file bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoElement {
    pub src: String,
    pub filters: PhotoFilters,
    pub crop: Option<CropRegion>,
    /// Mask shape id from the die-cut catalog.
    pub mask: Option<String>,
    pub frame: Option<PhotoFrame>,
}

/// CSS-style adjustment stack. All values at their neutral default leave
/// the photo untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotoFilters {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub grayscale: f64,
    pub sepia: f64,
    /// Blur radius in page units.
    pub blur: f64,
}

impl Default for PhotoFilters {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            grayscale: 0.0,
            sepia: 0.0,
            blur: 0.0,
        }
    }
}

/// Crop window into the source image, normalized to `0.0..=1.0` on both
/// axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Decorative frame drawn around a photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoFrame {
    pub style: String,
    pub color: String,
    pub width: f64,
}

/// Journaling or caption text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub content: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_align: TextAlign,
    pub color: String,
    /// Multiplier of the font size.
    pub line_height: f64,
    pub letter_spacing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// A vector shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeElement {
    pub shape: ShapeKind,
    pub fill: String,
    pub stroke: Stroke,
}

/// Geometry primitive rendered by the shell. `Custom` carries an SVG path
/// handed over by the clip-art catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Triangle,
    Star,
    Heart,
    Arrow,
    Line,
    Custom { path: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// Catalog sticker. `src` is the ready payload handed over on selection —
/// inline SVG markup or an image URL, the engine does not care which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerElement {
    pub sticker_id: String,
    pub src: String,
    pub category: String,
}

/// A catalog background placed as a page-covering element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundElement {
    pub background: Background,
}
