use serde::{Deserialize, Serialize};

use crate::error::{CoordError, CoordResult};

/// Integer pixel rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> CoordResult<Self> {
        if !self.is_valid() {
            return Err(CoordError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        f64::from(self.x) + f64::from(self.width) / 2.0
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        f64::from(self.y) + f64::from(self.height) / 2.0
    }

    #[must_use]
    pub fn contains_x(self, x: i32) -> bool {
        x >= self.x && x <= self.right()
    }

    #[must_use]
    pub fn contains_y(self, y: i32) -> bool {
        y >= self.y && y <= self.bottom()
    }
}

/// Point in data space (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point in pixel space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Selects which y-axis a transform or constraint query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum YAxisId {
    #[default]
    Primary,
    Secondary,
}

/// Pixel gaps between the outer bounds and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 75,
            right: 30,
            top: 20,
            bottom: 30,
        }
    }
}

impl Margins {
    #[must_use]
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> i32 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> i32 {
        self.top + self.bottom
    }
}
