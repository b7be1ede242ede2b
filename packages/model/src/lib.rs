pub mod background;
pub mod document;
pub mod draft;
pub mod element;
pub mod geometry;
pub mod id;
pub mod page;

pub use background::Background;
pub use document::{Document, PageSize};
pub use draft::ElementDraft;
pub use element::{
    BackgroundElement, Border, CropRegion, Element, ElementKind, FontStyle, FontWeight,
    PhotoElement, PhotoFilters, PhotoFrame, Shadow, ShapeElement, ShapeKind, StickerElement,
    Stroke, TextAlign, TextElement,
};
pub use geometry::{Position, Size, Transform};
pub use id::{document_id, IdGenerator};
pub use page::Page;
