use serde::{Deserialize, Serialize};

/// Default range substituted when the data model reports no extrema.
pub const DEFAULT_RANGE_MAX: f64 = 1.0;
pub const DEFAULT_RANGE_MIN: f64 = 0.0;

/// Returns a drawable `(max, min)` pair for an axis.
///
/// Equal values are widened (`0` becomes `[-1, 1]`, anything else is scaled
/// by `1.1`/`0.9`), then a reversed pair is swapped. The swap runs last so
/// negative equal inputs still come out ordered: `(-10, -10)` yields
/// `(-9, -11)`.
#[must_use]
pub fn normalize(max: f64, min: f64) -> (f64, f64) {
    let (mut max, mut min) = (max, min);
    if max - min == 0.0 {
        if max == 0.0 {
            max = 1.0;
            min = -1.0;
        } else {
            max *= 1.1;
            min *= 0.9;
        }
    }
    if max < min {
        std::mem::swap(&mut max, &mut min);
    }
    (max, min)
}

/// Ordered, non-degenerate axis extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub max: f64,
    pub min: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            max: DEFAULT_RANGE_MAX,
            min: DEFAULT_RANGE_MIN,
        }
    }
}

impl AxisRange {
    /// Builds a range through [`normalize`].
    #[must_use]
    pub fn normalized(max: f64, min: f64) -> Self {
        let (max, min) = normalize(max, min);
        Self { max, min }
    }

    /// Builds a range from optional data-model extrema.
    ///
    /// Missing or non-finite extrema fall back to `[0, 1]`.
    #[must_use]
    pub fn from_extrema(max: Option<f64>, min: Option<f64>) -> Self {
        match (max, min) {
            (Some(max), Some(min)) if max.is_finite() && min.is_finite() => {
                Self::normalized(max, min)
            }
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Value at which the perpendicular axis crosses this one.
    #[must_use]
    pub fn anchor(self) -> f64 {
        if self.min > 0.0 {
            self.min
        } else if self.max < 0.0 {
            self.max
        } else {
            0.0
        }
    }

    /// True when zero lies strictly inside the range.
    #[must_use]
    pub fn straddles_zero(self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_zero_expands_to_unit_band() {
        assert_eq!(normalize(0.0, 0.0), (1.0, -1.0));
    }

    #[test]
    fn reversed_pair_is_swapped() {
        assert_eq!(normalize(5.0, 10.0), (10.0, 5.0));
    }

    #[test]
    fn negative_equal_values_end_up_ordered() {
        let (max, min) = normalize(-10.0, -10.0);
        assert!((max - -9.0).abs() <= 1e-12);
        assert!((min - -11.0).abs() <= 1e-12);
    }

    #[test]
    fn missing_extrema_fall_back_to_unit_range() {
        let range = AxisRange::from_extrema(None, Some(3.0));
        assert_eq!(range, AxisRange::default());
        let range = AxisRange::from_extrema(Some(f64::NAN), Some(3.0));
        assert_eq!(range, AxisRange::default());
    }

    #[test]
    fn anchor_follows_range_sign() {
        assert_eq!(AxisRange::normalized(10.0, 2.0).anchor(), 2.0);
        assert_eq!(AxisRange::normalized(-2.0, -10.0).anchor(), -2.0);
        assert_eq!(AxisRange::normalized(5.0, -5.0).anchor(), 0.0);
    }
}
