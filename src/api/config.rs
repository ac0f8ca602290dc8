use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_ESTIMATED_TICKS, DEFAULT_MAX_TICKS};

use super::{FontSpec, LabelFormat};

/// Layout variant selected when a coordinate system is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordSystemKind {
    /// Axes cross at the data origin, arrow heads and unit captions at the ends.
    #[default]
    Classic,
    /// Plot area framed by a rectangle with ticks on all four sides.
    Boxed,
    /// Classic margins, nothing painted.
    Invisible,
}

/// Estimated and maximum tick counts per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickLimits {
    pub estimated_x: usize,
    pub estimated_y: usize,
    pub maximum_x: usize,
    pub maximum_y: usize,
}

impl Default for TickLimits {
    fn default() -> Self {
        Self {
            estimated_x: DEFAULT_ESTIMATED_TICKS,
            estimated_y: DEFAULT_ESTIMATED_TICKS,
            maximum_x: DEFAULT_MAX_TICKS,
            maximum_y: DEFAULT_MAX_TICKS,
        }
    }
}

impl TickLimits {
    pub fn set_estimated_x(&mut self, estimated: usize) {
        self.estimated_x = estimated;
        self.enforce_consistency();
    }

    pub fn set_estimated_y(&mut self, estimated: usize) {
        self.estimated_y = estimated;
        self.enforce_consistency();
    }

    pub fn set_maximum_x(&mut self, maximum: usize) {
        self.maximum_x = maximum;
        self.enforce_consistency();
    }

    pub fn set_maximum_y(&mut self, maximum: usize) {
        self.maximum_y = maximum;
        self.enforce_consistency();
    }

    pub fn reset_maximum_x(&mut self) {
        self.set_maximum_x(DEFAULT_MAX_TICKS);
    }

    pub fn reset_maximum_y(&mut self) {
        self.set_maximum_y(DEFAULT_MAX_TICKS);
    }

    // Estimates never exceed their maximum.
    fn enforce_consistency(&mut self) {
        self.estimated_x = self.estimated_x.min(self.maximum_x);
        self.estimated_y = self.estimated_y.min(self.maximum_y);
    }
}

/// Paint toggles shared by every layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisStyle {
    /// Suppress the light-grey guide lines next to y ticks.
    pub paint_only_tick: bool,
    pub paint_labels: bool,
    pub paint_grid: bool,
    pub paint_axes: bool,
    pub draw_arrows: bool,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            paint_only_tick: true,
            paint_labels: true,
            paint_grid: false,
            paint_axes: true,
            draw_arrows: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordSystemConfig {
    pub kind: CoordSystemKind,
    pub x_unit: String,
    pub y_unit: String,
    pub tick_font: FontSpec,
    pub unit_font: FontSpec,
    pub x_label_format: LabelFormat,
    pub y_label_format: LabelFormat,
    pub ticks: TickLimits,
    pub style: AxisStyle,
    pub secondary_y_axis: bool,
}

impl Default for CoordSystemConfig {
    fn default() -> Self {
        Self {
            kind: CoordSystemKind::default(),
            x_unit: "x".to_owned(),
            y_unit: "y".to_owned(),
            tick_font: FontSpec::default(),
            unit_font: FontSpec::default(),
            x_label_format: LabelFormat::default(),
            y_label_format: LabelFormat::default(),
            ticks: TickLimits::default(),
            style: AxisStyle::default(),
            secondary_y_axis: false,
        }
    }
}

impl CoordSystemConfig {
    #[must_use]
    pub fn new(kind: CoordSystemKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: CoordSystemKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_units(mut self, x_unit: impl Into<String>, y_unit: impl Into<String>) -> Self {
        self.x_unit = x_unit.into();
        self.y_unit = y_unit.into();
        self
    }

    #[must_use]
    pub fn with_tick_font(mut self, font: FontSpec) -> Self {
        self.tick_font = font;
        self
    }

    #[must_use]
    pub fn with_unit_font(mut self, font: FontSpec) -> Self {
        self.unit_font = font;
        self
    }

    #[must_use]
    pub fn with_x_label_format(mut self, format: LabelFormat) -> Self {
        self.x_label_format = format;
        self
    }

    #[must_use]
    pub fn with_y_label_format(mut self, format: LabelFormat) -> Self {
        self.y_label_format = format;
        self
    }

    #[must_use]
    pub fn with_estimated_ticks(mut self, x: usize, y: usize) -> Self {
        self.ticks.set_estimated_x(x);
        self.ticks.set_estimated_y(y);
        self
    }

    #[must_use]
    pub fn with_maximum_ticks(mut self, x: usize, y: usize) -> Self {
        self.ticks.set_maximum_x(x);
        self.ticks.set_maximum_y(y);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_secondary_y_axis(mut self, enabled: bool) -> Self {
        self.secondary_y_axis = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowering_maximum_drags_estimate_down() {
        let mut limits = TickLimits::default();
        limits.set_maximum_x(8);
        assert_eq!(limits.estimated_x, 8);
        assert_eq!(limits.estimated_y, DEFAULT_ESTIMATED_TICKS);

        limits.reset_maximum_x();
        assert_eq!(limits.maximum_x, DEFAULT_MAX_TICKS);
        assert_eq!(limits.estimated_x, 8);
    }

    #[test]
    fn estimate_above_maximum_is_clamped() {
        let mut limits = TickLimits::default();
        limits.set_estimated_y(90);
        assert_eq!(limits.estimated_y, DEFAULT_MAX_TICKS);
    }

    #[test]
    fn builtin_config_round_trips_through_json() {
        let config = CoordSystemConfig::new(CoordSystemKind::Boxed).with_units("time", "volts");
        let json = serde_json::to_string(&config).expect("serialize");
        let back: CoordSystemConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
