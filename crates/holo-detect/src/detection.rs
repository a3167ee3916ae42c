use std::fmt;

use crate::label_for;

/// Axis-aligned box in normalized image coordinates.
///
/// `(x, y)` is the top-left corner, measured from the image's top-left with
/// y growing downwards; all fields are fractions of the frame size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box centre, normalized.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Box centre in pixels for a `width` x `height` frame.
    pub fn center_px(&self, width: u32, height: u32) -> (f32, f32) {
        let (cx, cy) = self.center();
        (cx * width as f32, cy * height as f32)
    }

    /// Top-left corner in pixels for a `width` x `height` frame.
    pub fn corner_px(&self, width: u32, height: u32) -> (f32, f32) {
        (self.x * width as f32, self.y * height as f32)
    }
}

/// One detector output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub class_index: usize,
    pub score: f32,
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn new(class_index: usize, score: f32, bbox: BoundingBox) -> Self {
        Self {
            class_index,
            score,
            bbox,
        }
    }

    pub fn label(&self) -> &'static str {
        label_for(self.class_index)
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.label(), self.score)
    }
}
