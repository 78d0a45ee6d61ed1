use serde::{Deserialize, Serialize};

/// Node identifier, unique within a map preset.
pub type NodeId = u32;

/// Tap opened when the caller does not request any.
pub const DEFAULT_OPEN_TAP: NodeId = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned box in field units: `[left, right, bottom, top]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Extent {
    /// Square box of side `size` centred on `center`.
    pub fn centered(center: Position2D, size: f64) -> Self {
        let half = 0.5 * size;
        Self {
            left: center.x - half,
            right: center.x + half,
            bottom: center.y - half,
            top: center.y + half,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.left, self.right, self.bottom, self.top]
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Visible window of the field, in field units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ViewBounds {
    pub fn as_extent(&self) -> Extent {
        Extent {
            left: self.min_x,
            right: self.max_x,
            bottom: self.min_y,
            top: self.max_y,
        }
    }
}
