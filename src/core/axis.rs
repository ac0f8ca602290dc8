use serde::{Deserialize, Serialize};

use crate::core::range::AxisRange;
use crate::error::{CoordError, CoordResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// One chart axis: a data range laid over a pixel length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    orientation: AxisOrientation,
    range: AxisRange,
    length_px: i32,
}

impl Axis {
    #[must_use]
    pub fn new(orientation: AxisOrientation, range: AxisRange) -> Self {
        Self {
            orientation,
            range,
            length_px: 0,
        }
    }

    #[must_use]
    pub fn orientation(self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn range(self) -> AxisRange {
        self.range
    }

    pub fn set_range(&mut self, range: AxisRange) {
        self.range = range;
    }

    #[must_use]
    pub fn length_px(self) -> i32 {
        self.length_px
    }

    pub fn set_length_px(&mut self, length_px: i32) {
        self.length_px = length_px;
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.length_px > 0 && self.range.span() > 0.0 && self.range.span().is_finite()
    }

    /// Data units covered by one pixel.
    pub fn point_to_pixel_ratio(self) -> CoordResult<f64> {
        if !self.is_valid() {
            return Err(CoordError::InvalidData(format!(
                "axis needs a positive length and span (length={}, span={})",
                self.length_px,
                self.range.span()
            )));
        }
        Ok(self.range.span() / f64::from(self.length_px))
    }

    /// Pixel offset of `value` from the axis start.
    pub fn pixel_for_value(self, value: f64) -> CoordResult<f64> {
        if !value.is_finite() {
            return Err(CoordError::InvalidData("value must be finite".to_owned()));
        }
        let ratio = self.point_to_pixel_ratio()?;
        Ok((value - self.range.min) / ratio)
    }

    /// Data value at a pixel offset from the axis start.
    pub fn value_for_pixel(self, pixel: f64) -> CoordResult<f64> {
        if !pixel.is_finite() {
            return Err(CoordError::InvalidData("pixel must be finite".to_owned()));
        }
        let ratio = self.point_to_pixel_ratio()?;
        Ok(self.range.min + pixel * ratio)
    }
}
