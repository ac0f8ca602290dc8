use std::fmt;

use crate::core::{AxisRange, AxisTransform, Margins, Rect, TickSet};
use crate::render::RenderFrame;

use super::margins::{classic_margins, inner_bounds};
use super::{
    BoxedLayout, ChartDataModel, ClassicLayout, CoordSystemConfig, CoordSystemKind, FontSpec,
    TextBounds, TextMeasurer, TickCache,
};

/// Everything a layout needs to size margins or paint one frame.
///
/// Built by the coordinate system for the duration of a single call.
pub struct LayoutContext<'a> {
    pub config: &'a CoordSystemConfig,
    pub measurer: &'a dyn TextMeasurer,
    pub model: &'a dyn ChartDataModel,
    pub ticks: &'a mut TickCache,
    pub bounds: Rect,
    pub margins: Margins,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub secondary_y_range: Option<AxisRange>,
    /// `None` until bounds are valid and transforms have been built.
    pub transform: Option<AxisTransform>,
    pub secondary_transform: Option<AxisTransform>,
    pub center_labels: bool,
}

impl LayoutContext<'_> {
    pub fn x_ticks(&mut self) -> Option<TickSet> {
        let limits = self.config.ticks;
        self.ticks
            .locate(self.x_range, limits.estimated_x, limits.maximum_x)
    }

    pub fn y_ticks(&mut self) -> Option<TickSet> {
        let limits = self.config.ticks;
        self.ticks
            .locate(self.y_range, limits.estimated_y, limits.maximum_y)
    }

    #[must_use]
    pub fn measure_tick(&self, text: &str, rotated: bool) -> TextBounds {
        self.measure(text, &self.config.tick_font, rotated)
    }

    #[must_use]
    pub fn measure_unit(&self, text: &str, rotated: bool) -> TextBounds {
        self.measure(text, &self.config.unit_font, rotated)
    }

    fn measure(&self, text: &str, font: &FontSpec, rotated: bool) -> TextBounds {
        if text.is_empty() {
            return TextBounds::default();
        }
        self.measurer.measure(text, font, rotated)
    }

    #[must_use]
    pub fn inner_bounds(&self) -> Rect {
        inner_bounds(self.bounds, self.margins)
    }

    #[must_use]
    pub fn format_x(&self, value: f64) -> String {
        self.config.x_label_format.format(value)
    }

    #[must_use]
    pub fn format_y(&self, value: f64) -> String {
        self.config.y_label_format.format(value)
    }
}

/// Strategy behind one coordinate-system variant.
pub trait AxisLayout: fmt::Debug + Send + Sync {
    fn kind(&self) -> CoordSystemKind;

    fn compute_margins(&self, ctx: &mut LayoutContext<'_>) -> Margins;

    /// Appends axis primitives to `frame`. Called only with a built transform.
    fn paint(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame);

    fn draw_x_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame);

    fn draw_y_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame);

    fn draw_grid(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame);

    /// Whether numeric x labels may be centered between ticks.
    fn supports_centered_numeric_labels(&self) -> bool {
        true
    }
}

/// Classic margins with nothing painted, for charts that draw their own
/// frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvisibleLayout;

impl AxisLayout for InvisibleLayout {
    fn kind(&self) -> CoordSystemKind {
        CoordSystemKind::Invisible
    }

    fn compute_margins(&self, ctx: &mut LayoutContext<'_>) -> Margins {
        classic_margins(ctx)
    }

    fn paint(&self, _ctx: &mut LayoutContext<'_>, _frame: &mut RenderFrame) {}

    fn draw_x_axis_ticks(&self, _ctx: &mut LayoutContext<'_>, _frame: &mut RenderFrame) {}

    fn draw_y_axis_ticks(&self, _ctx: &mut LayoutContext<'_>, _frame: &mut RenderFrame) {}

    fn draw_grid(&self, _ctx: &mut LayoutContext<'_>, _frame: &mut RenderFrame) {}

    fn supports_centered_numeric_labels(&self) -> bool {
        false
    }
}

#[must_use]
pub fn layout_for(kind: CoordSystemKind) -> Box<dyn AxisLayout> {
    match kind {
        CoordSystemKind::Classic => Box::new(ClassicLayout),
        CoordSystemKind::Boxed => Box::new(BoxedLayout),
        CoordSystemKind::Invisible => Box::new(InvisibleLayout),
    }
}
