use serde::{Deserialize, Serialize};

/// A point in page units, measured from the page's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height in page units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rotation, scaling and mirroring applied around an element's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    /// Degrees, clockwise.
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            flip_x: false,
            flip_y: false,
        }
    }
}

impl Transform {
    /// True when the transform leaves the element exactly as authored.
    pub fn is_identity(&self) -> bool {
        self.rotation == 0.0
            && self.scale_x == 1.0
            && self.scale_y == 1.0
            && !self.flip_x
            && !self.flip_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_offset() {
        let p = Position::new(10.0, 20.0);
        let moved = p.offset(20.0, 20.0);
        assert_eq!(moved, Position::new(30.0, 40.0));
        // original untouched
        assert_eq!(p, Position::new(10.0, 20.0));
    }

    #[test]
    fn test_default_transform_is_identity() {
        assert!(Transform::default().is_identity());

        let rotated = Transform {
            rotation: 90.0,
            ..Transform::default()
        };
        assert!(!rotated.is_identity());
    }
}
