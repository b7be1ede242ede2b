//! Typed partial updates for elements and document metadata.
//!
//! A patch names exactly the fields it changes, so updating one nested
//! field (say `transform.rotation`) can never drop its siblings the way a
//! shallow JSON merge would. Patches for optional extras distinguish
//! "leave alone" from "remove" via [`FieldUpdate`].

use keepsake_model::{
    Background, Border, CropRegion, Element, ElementKind, FontStyle, FontWeight, PhotoElement,
    PhotoFilters, PhotoFrame, Position, Shadow, ShapeElement, ShapeKind, Size, StickerElement,
    Stroke, TextAlign, TextElement, Transform,
};

/// Three-way update for an `Option` field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldUpdate<T> {
    /// Leave the current value alone.
    #[default]
    Keep,
    /// Remove the value.
    Clear,
    /// Install a new value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, FieldUpdate::Keep)
    }

    fn apply_to(self, slot: &mut Option<T>) {
        match self {
            FieldUpdate::Keep => {}
            FieldUpdate::Clear => *slot = None,
            FieldUpdate::Set(value) => *slot = Some(value),
        }
    }
}

/// Per-field update of a [`Transform`]. Unset fields keep their value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformPatch {
    pub rotation: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub flip_x: Option<bool>,
    pub flip_y: Option<bool>,
}

impl TransformPatch {
    pub fn is_empty(&self) -> bool {
        self.rotation.is_none()
            && self.scale_x.is_none()
            && self.scale_y.is_none()
            && self.flip_x.is_none()
            && self.flip_y.is_none()
    }

    fn apply_to(&self, transform: &mut Transform) {
        if let Some(rotation) = self.rotation {
            transform.rotation = rotation;
        }
        if let Some(scale_x) = self.scale_x {
            transform.scale_x = scale_x;
        }
        if let Some(scale_y) = self.scale_y {
            transform.scale_y = scale_y;
        }
        if let Some(flip_x) = self.flip_x {
            transform.flip_x = flip_x;
        }
        if let Some(flip_y) = self.flip_y {
            transform.flip_y = flip_y;
        }
    }
}

/// Partial update of a single element: base fields, transform, optional
/// extras, and (optionally) variant content.
#[derive(Debug, Clone, Default)]
pub struct ElementPatch {
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub opacity: Option<f64>,
    pub locked: Option<bool>,
    pub visible: Option<bool>,
    pub transform: TransformPatch,
    pub shadow: FieldUpdate<Shadow>,
    pub border: FieldUpdate<Border>,
    pub content: Option<ContentPatch>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.transform.rotation = Some(degrees);
        self
    }

    pub fn scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.transform.scale_x = Some(scale_x);
        self.transform.scale_y = Some(scale_y);
        self
    }

    pub fn flip_x(mut self, flip: bool) -> Self {
        self.transform.flip_x = Some(flip);
        self
    }

    pub fn flip_y(mut self, flip: bool) -> Self {
        self.transform.flip_y = Some(flip);
        self
    }

    pub fn transform(mut self, transform: TransformPatch) -> Self {
        self.transform = transform;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = FieldUpdate::Set(shadow);
        self
    }

    pub fn clear_shadow(mut self) -> Self {
        self.shadow = FieldUpdate::Clear;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = FieldUpdate::Set(border);
        self
    }

    pub fn clear_border(mut self) -> Self {
        self.border = FieldUpdate::Clear;
        self
    }

    pub fn content(mut self, content: ContentPatch) -> Self {
        self.content = Some(content);
        self
    }

    /// True when applying would change nothing. The store skips the history
    /// snapshot for empty patches.
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.size.is_none()
            && self.opacity.is_none()
            && self.locked.is_none()
            && self.visible.is_none()
            && self.transform.is_empty()
            && self.shadow.is_keep()
            && self.border.is_keep()
            && self.content.is_none()
    }

    pub(crate) fn apply_to(self, element: &mut Element) {
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(size) = self.size {
            element.size = size;
        }
        if let Some(opacity) = self.opacity {
            element.opacity = opacity;
        }
        if let Some(locked) = self.locked {
            element.locked = locked;
        }
        if let Some(visible) = self.visible {
            element.visible = visible;
        }
        self.transform.apply_to(&mut element.transform);
        self.shadow.apply_to(&mut element.shadow);
        self.border.apply_to(&mut element.border);
        if let Some(content) = self.content {
            content.apply_to(element);
        }
    }
}

/// Variant-specific content update. Applying a patch whose variant does not
/// match the element's kind is a logged no-op for the content part; base
/// fields of the same [`ElementPatch`] still apply.
#[derive(Debug, Clone)]
pub enum ContentPatch {
    Photo(PhotoPatch),
    Text(TextPatch),
    Shape(ShapePatch),
    Sticker(StickerPatch),
    /// Backgrounds are replaced whole; the kind is a tagged union, so a
    /// per-field merge does not arise.
    Background(Background),
}

impl ContentPatch {
    fn kind_name(&self) -> &'static str {
        match self {
            ContentPatch::Photo(_) => "photo",
            ContentPatch::Text(_) => "text",
            ContentPatch::Shape(_) => "shape",
            ContentPatch::Sticker(_) => "sticker",
            ContentPatch::Background(_) => "background",
        }
    }

    fn apply_to(self, element: &mut Element) {
        let element_kind = element.kind_name();
        match (self, &mut element.kind) {
            (ContentPatch::Photo(patch), ElementKind::Photo(photo)) => patch.apply_to(photo),
            (ContentPatch::Text(patch), ElementKind::Text(text)) => patch.apply_to(text),
            (ContentPatch::Shape(patch), ElementKind::Shape(shape)) => patch.apply_to(shape),
            (ContentPatch::Sticker(patch), ElementKind::Sticker(sticker)) => {
                patch.apply_to(sticker)
            }
            (ContentPatch::Background(background), ElementKind::Background(slot)) => {
                slot.background = background;
            }
            (patch, _) => {
                tracing::warn!(
                    "content patch {} ignored on {} element",
                    patch.kind_name(),
                    element_kind
                );
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhotoPatch {
    pub src: Option<String>,
    /// Filters are a flat value stack, replaced whole.
    pub filters: Option<PhotoFilters>,
    pub crop: FieldUpdate<CropRegion>,
    pub mask: FieldUpdate<String>,
    pub frame: FieldUpdate<PhotoFrame>,
}

impl PhotoPatch {
    fn apply_to(self, photo: &mut PhotoElement) {
        if let Some(src) = self.src {
            photo.src = src;
        }
        if let Some(filters) = self.filters {
            photo.filters = filters;
        }
        self.crop.apply_to(&mut photo.crop);
        self.mask.apply_to(&mut photo.mask);
        self.frame.apply_to(&mut photo.frame);
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextPatch {
    pub content: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_align: Option<TextAlign>,
    pub color: Option<String>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
}

impl TextPatch {
    fn apply_to(self, text: &mut TextElement) {
        if let Some(content) = self.content {
            text.content = content;
        }
        if let Some(font_family) = self.font_family {
            text.font_family = font_family;
        }
        if let Some(font_size) = self.font_size {
            text.font_size = font_size;
        }
        if let Some(font_weight) = self.font_weight {
            text.font_weight = font_weight;
        }
        if let Some(font_style) = self.font_style {
            text.font_style = font_style;
        }
        if let Some(text_align) = self.text_align {
            text.text_align = text_align;
        }
        if let Some(color) = self.color {
            text.color = color;
        }
        if let Some(line_height) = self.line_height {
            text.line_height = line_height;
        }
        if let Some(letter_spacing) = self.letter_spacing {
            text.letter_spacing = letter_spacing;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShapePatch {
    pub shape: Option<ShapeKind>,
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
}

impl ShapePatch {
    fn apply_to(self, shape: &mut ShapeElement) {
        if let Some(kind) = self.shape {
            shape.shape = kind;
        }
        if let Some(fill) = self.fill {
            shape.fill = fill;
        }
        if let Some(stroke) = self.stroke {
            shape.stroke = stroke;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StickerPatch {
    pub sticker_id: Option<String>,
    pub src: Option<String>,
    pub category: Option<String>,
}

impl StickerPatch {
    fn apply_to(self, sticker: &mut StickerElement) {
        if let Some(sticker_id) = self.sticker_id {
            sticker.sticker_id = sticker_id;
        }
        if let Some(src) = self.src {
            sticker.src = src;
        }
        if let Some(category) = self.category {
            sticker.category = category;
        }
    }
}

/// Partial update of document shelf metadata. Not a pages mutation: never
/// snapshotted, never undoable.
#[derive(Debug, Clone, Default)]
pub struct MetadataPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl MetadataPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}
