use serde::{Deserialize, Serialize};

/// A width/height pair in pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    #[must_use]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Sentinel meaning "expand to whatever the host offers".
    #[must_use]
    pub const fn fill() -> Self {
        Self { w: -1, h: -1 }
    }
}

/// Bounding box of a laid-out strip, relative to the panel's origin.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}
