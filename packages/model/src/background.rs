use serde::{Deserialize, Serialize};

/// What fills a page behind everything else (or a background element).
///
/// Backgrounds come ready to display from the asset catalogs: a color, a
/// two-stop gradient, a tiled pattern id or a resolved image source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Background {
    /// Single flat color.
    Solid { color: String },

    /// Two-stop linear gradient, angle in degrees.
    Gradient {
        start: String,
        end: String,
        angle: f64,
    },

    /// Tiled decorative pattern from the textures catalog.
    Pattern {
        #[serde(rename = "patternId")]
        pattern_id: String,
        color: String,
        scale: f64,
    },

    /// Full-bleed image, already resolved to a displayable source.
    Image { src: String },
}

impl Background {
    /// Blank pages start solid white.
    pub fn solid_white() -> Self {
        Background::Solid {
            color: "#ffffff".to_string(),
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::solid_white()
    }
}
