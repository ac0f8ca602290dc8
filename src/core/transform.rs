use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::core::types::{DataPoint, Margins, PixelPoint, Rect};
use crate::error::{CoordError, CoordResult};

/// Axis-aligned affine map from data space to pixel space.
///
/// `px = scale_x * x + translate_x`, `py = scale_y * y + translate_y`.
/// For chart axes `scale_y` is negative because pixel rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl AxisTransform {
    #[must_use]
    pub const fn new(scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 1.0, 0.0, 0.0)
    }

    /// Builds the default transform for one y-axis sharing `x_axis`.
    ///
    /// The data origin lands at `bounds.x + margins.left` shifted by the
    /// pixel position of `x = 0`, and at the bottom edge of the plot area
    /// shifted up by the pixel position of `y = 0`.
    pub fn for_axes(
        bounds: Rect,
        margins: Margins,
        x_axis: Axis,
        y_axis: Axis,
    ) -> CoordResult<Self> {
        let scale_x = 1.0 / x_axis.point_to_pixel_ratio()?;
        let scale_y = -1.0 / y_axis.point_to_pixel_ratio()?;
        let translate_x =
            f64::from(bounds.x) + f64::from(margins.left) + x_axis.pixel_for_value(0.0)?;
        let translate_y = f64::from(bounds.y) + f64::from(bounds.height)
            - f64::from(margins.bottom)
            - y_axis.pixel_for_value(0.0)?;

        Ok(Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        })
    }

    #[must_use]
    pub fn apply(self, point: DataPoint) -> PixelPoint {
        PixelPoint::new(
            self.scale_x * point.x + self.translate_x,
            self.scale_y * point.y + self.translate_y,
        )
    }

    /// Transforms flattened `(x, y)` pairs. A trailing odd value is ignored.
    #[must_use]
    pub fn apply_pairs(self, pairs: &[f64]) -> Vec<f64> {
        pairs
            .chunks_exact(2)
            .flat_map(|pair| {
                let pixel = self.apply(DataPoint::new(pair[0], pair[1]));
                [pixel.x, pixel.y]
            })
            .collect()
    }

    #[must_use]
    pub fn is_invertible(self) -> bool {
        self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.scale_x != 0.0
            && self.scale_y != 0.0
            && self.translate_x.is_finite()
            && self.translate_y.is_finite()
    }

    pub fn inverse(self) -> CoordResult<Self> {
        if !self.is_invertible() {
            return Err(CoordError::NonInvertibleTransform);
        }
        Ok(Self {
            scale_x: 1.0 / self.scale_x,
            scale_y: 1.0 / self.scale_y,
            translate_x: -self.translate_x / self.scale_x,
            translate_y: -self.translate_y / self.scale_y,
        })
    }

    /// Maps a pixel back into data space.
    pub fn invert(self, pixel: PixelPoint) -> CoordResult<DataPoint> {
        if !self.is_invertible() {
            return Err(CoordError::NonInvertibleTransform);
        }
        Ok(DataPoint::new(
            (pixel.x - self.translate_x) / self.scale_x,
            (pixel.y - self.translate_y) / self.scale_y,
        ))
    }

    /// Applies `self` after `inner` (`self ∘ inner`).
    #[must_use]
    pub fn compose(self, inner: Self) -> Self {
        Self {
            scale_x: self.scale_x * inner.scale_x,
            scale_y: self.scale_y * inner.scale_y,
            translate_x: self.scale_x * inner.translate_x + self.translate_x,
            translate_y: self.scale_y * inner.translate_y + self.translate_y,
        }
    }
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self::identity()
    }
}
