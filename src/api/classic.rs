use crate::core::{AxisRange, DataPoint, Margins, ObjectTickLocator, PixelPoint};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, PolygonPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::margins::{ARROW_LENGTH, MARGIN_OFFSET, classic_margins};
use super::{AxisLayout, CoordSystemKind, LayoutContext};

const STROKE_WIDTH: f64 = 1.0;
const TICK_HALF_LENGTH: f64 = (MARGIN_OFFSET / 2) as f64;
const ARROW_HALF_WIDTH: f64 = 3.0;

/// Pixel-space segment between two transformed data points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLine {
    pub start: PixelPoint,
    pub end: PixelPoint,
}

impl AxisLine {
    fn primitive(self) -> LinePrimitive {
        LinePrimitive::new(
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            STROKE_WIDTH,
            Color::BLACK,
        )
    }
}

/// Axes crossing inside the plot, arrow heads, unit captions at the tips.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicLayout;

/// X position of the y axis: the left edge unless the x range straddles zero.
/// An all-negative x range only moves the axis right when a secondary y axis
/// occupies the right edge.
#[must_use]
pub fn y_axis_anchor(x_range: AxisRange, has_secondary_axis: bool) -> f64 {
    if x_range.min > 0.0 {
        x_range.min
    } else if x_range.max < 0.0 && has_secondary_axis {
        x_range.max
    } else {
        0.0
    }
}

impl ClassicLayout {
    #[must_use]
    pub fn x_axis_line(&self, ctx: &LayoutContext<'_>) -> Option<AxisLine> {
        let transform = ctx.transform?;
        let y = ctx.y_range.anchor();
        Some(AxisLine {
            start: transform.apply(DataPoint::new(ctx.x_range.min, y)),
            end: transform.apply(DataPoint::new(ctx.x_range.max, y)),
        })
    }

    /// Runs from the top (`y max`) down to `y min`.
    #[must_use]
    pub fn y_axis_line(&self, ctx: &LayoutContext<'_>) -> Option<AxisLine> {
        let transform = ctx.transform?;
        let x = y_axis_anchor(ctx.x_range, ctx.secondary_transform.is_some());
        Some(AxisLine {
            start: transform.apply(DataPoint::new(x, ctx.y_range.max)),
            end: transform.apply(DataPoint::new(x, ctx.y_range.min)),
        })
    }

    /// Right-edge axis for the secondary y range.
    #[must_use]
    pub fn second_y_axis_line(&self, ctx: &LayoutContext<'_>) -> Option<AxisLine> {
        let transform = ctx.secondary_transform?;
        let range = ctx.secondary_y_range.unwrap_or(ctx.y_range);
        let x = ctx.x_range.max;
        Some(AxisLine {
            start: transform.apply(DataPoint::new(x, range.max)),
            end: transform.apply(DataPoint::new(x, range.min)),
        })
    }

    pub fn draw_numerical_x_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let Some(transform) = ctx.transform else {
            return;
        };
        let Some(ticks) = ctx.x_ticks() else {
            return;
        };
        let y = ctx.y_range.anchor();
        let paint_labels = ctx.config.style.paint_labels;

        for value in ticks.within(ctx.x_range) {
            let pixel = transform.apply(DataPoint::new(value, y));
            frame.lines.push(vertical_tick(pixel));
            if paint_labels {
                let label = ctx.format_x(value);
                push_x_label(ctx, frame, label, pixel.x, pixel.y);
            }
        }
    }

    /// Categorical x ticks. Tick `t` carries the label of column `t - 1`,
    /// drawn on the tick or centered between it and the previous one.
    pub fn draw_x_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let Some(transform) = ctx.transform else {
            return;
        };
        let first = ctx.x_range.min.floor() as i64;
        let last = ctx.x_range.max.ceil() as i64;
        let y = ctx.y_range.anchor();
        let paint_labels = ctx.config.style.paint_labels;
        let center = ctx.center_labels;

        let mut previous: Option<PixelPoint> = None;
        for tick in ObjectTickLocator::new(first, last, ctx.config.ticks.maximum_x).locate() {
            let pixel = transform.apply(DataPoint::new(tick as f64, y));
            if tick < last {
                frame.lines.push(vertical_tick(pixel));
            }

            let label = usize::try_from(tick - 1)
                .ok()
                .and_then(|column| ctx.model.column_label(column))
                .filter(|label| !label.is_empty());
            if let (true, Some(label)) = (paint_labels, label) {
                if !center {
                    push_x_label(ctx, frame, label, pixel.x, pixel.y);
                } else if let Some(previous) = previous {
                    let x = previous.x + (pixel.x - previous.x) / 2.0;
                    push_x_label(ctx, frame, label, x, pixel.y);
                }
            }
            previous = Some(pixel);
        }
    }

    pub fn draw_y_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let Some(transform) = ctx.transform else {
            return;
        };
        let Some(ticks) = ctx.y_ticks() else {
            return;
        };
        let x = y_axis_anchor(ctx.x_range, ctx.secondary_transform.is_some());
        let guide_end = self.x_axis_line(ctx).map(|line| line.end.x);
        let style = ctx.config.style;

        for value in ticks.within(ctx.y_range) {
            let pixel = transform.apply(DataPoint::new(x, value));
            frame.lines.push(LinePrimitive::new(
                pixel.x - TICK_HALF_LENGTH,
                pixel.y,
                pixel.x + TICK_HALF_LENGTH,
                pixel.y,
                STROKE_WIDTH,
                Color::BLACK,
            ));

            if let (false, Some(end_x)) = (style.paint_only_tick, guide_end) {
                if value != ctx.y_range.min {
                    frame.lines.push(LinePrimitive::new(
                        pixel.x + TICK_HALF_LENGTH,
                        pixel.y,
                        end_x,
                        pixel.y,
                        STROKE_WIDTH,
                        Color::LIGHT_GRAY,
                    ));
                }
            }

            let label = ctx.format_y(value);
            if style.paint_labels && !label.is_empty() {
                let bounds = ctx.measure_tick(&label, false);
                frame.texts.push(TextPrimitive::new(
                    label,
                    pixel.x - f64::from(MARGIN_OFFSET),
                    pixel.y + bounds.height / 2.0,
                    ctx.config.tick_font.size_px,
                    Color::BLACK,
                    TextHAlign::Right,
                ));
            }
        }
    }

    pub fn draw_y_axis_grid(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let Some(transform) = ctx.transform else {
            return;
        };
        let Some(ticks) = ctx.y_ticks() else {
            return;
        };
        for value in ticks.within(ctx.y_range) {
            let start = transform.apply(DataPoint::new(ctx.x_range.min, value));
            let end = transform.apply(DataPoint::new(ctx.x_range.max, value));
            frame.lines.push(grid_line(start, end));
        }
    }

    pub fn draw_numerical_x_axis_grid(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let Some(transform) = ctx.transform else {
            return;
        };
        let Some(ticks) = ctx.x_ticks() else {
            return;
        };
        for value in ticks.within(ctx.x_range) {
            let start = transform.apply(DataPoint::new(value, ctx.y_range.min));
            let end = transform.apply(DataPoint::new(value, ctx.y_range.max));
            frame.lines.push(grid_line(start, end));
        }
    }

    /// Arrow head past the right end of the x axis, unit caption below it.
    pub fn draw_x_axis_arrow(&self, ctx: &LayoutContext<'_>, x_axis: AxisLine, frame: &mut RenderFrame) {
        let tip = x_axis.end;
        let arrow = f64::from(ARROW_LENGTH);
        if ctx.config.style.draw_arrows {
            frame.lines.push(LinePrimitive::new(
                tip.x,
                tip.y,
                tip.x + arrow,
                tip.y,
                STROKE_WIDTH,
                Color::BLACK,
            ));
            frame.polygons.push(PolygonPrimitive::filled(
                vec![
                    (tip.x + arrow / 3.0, tip.y - ARROW_HALF_WIDTH),
                    (tip.x + arrow / 3.0, tip.y + ARROW_HALF_WIDTH),
                    (tip.x + arrow, tip.y),
                ],
                Color::BLACK,
            ));
        }

        let unit = &ctx.config.x_unit;
        if !unit.is_empty() {
            let bounds = ctx.measure_unit(unit, false);
            frame.texts.push(TextPrimitive::new(
                unit.clone(),
                tip.x + arrow / 3.0,
                tip.y + bounds.height + 5.0,
                ctx.config.unit_font.size_px,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }
    }

    /// Arrow head above the y axis, unit caption to its left.
    pub fn draw_y_axis_arrow(&self, ctx: &LayoutContext<'_>, y_axis: AxisLine, frame: &mut RenderFrame) {
        let tip = y_axis.start;
        let arrow = f64::from(ARROW_LENGTH);
        if ctx.config.style.draw_arrows {
            frame.lines.push(LinePrimitive::new(
                tip.x,
                tip.y,
                tip.x,
                tip.y - arrow,
                STROKE_WIDTH,
                Color::BLACK,
            ));
            frame.polygons.push(PolygonPrimitive::filled(
                vec![
                    (tip.x - ARROW_HALF_WIDTH, tip.y - arrow / 3.0),
                    (tip.x + ARROW_HALF_WIDTH, tip.y - arrow / 3.0),
                    (tip.x, tip.y - arrow),
                ],
                Color::BLACK,
            ));
        }

        let unit = &ctx.config.y_unit;
        if !unit.is_empty() {
            let descent = ctx.measure_unit(&ctx.config.x_unit, false).descent;
            frame.texts.push(TextPrimitive::new(
                unit.clone(),
                tip.x - f64::from(MARGIN_OFFSET),
                tip.y - descent - 3.0,
                ctx.config.unit_font.size_px,
                Color::BLACK,
                TextHAlign::Right,
            ));
        }
    }
}

impl AxisLayout for ClassicLayout {
    fn kind(&self) -> CoordSystemKind {
        CoordSystemKind::Classic
    }

    fn compute_margins(&self, ctx: &mut LayoutContext<'_>) -> Margins {
        classic_margins(ctx)
    }

    fn paint(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let (Some(x_axis), Some(y_axis)) = (self.x_axis_line(ctx), self.y_axis_line(ctx)) else {
            return;
        };
        frame.lines.push(x_axis.primitive());
        frame.lines.push(y_axis.primitive());

        if ctx.config.style.paint_grid {
            AxisLayout::draw_grid(self, ctx, frame);
        }

        self.draw_x_axis_arrow(ctx, x_axis, frame);
        self.draw_y_axis_arrow(ctx, y_axis, frame);

        if let Some(second) = self.second_y_axis_line(ctx) {
            frame.lines.push(second.primitive());
        }

        AxisLayout::draw_x_axis_ticks(self, ctx, frame);
        ClassicLayout::draw_y_axis_ticks(self, ctx, frame);
    }

    fn draw_x_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        if ctx.model.is_column_numeric() {
            self.draw_numerical_x_axis_ticks(ctx, frame);
        } else {
            ClassicLayout::draw_x_axis_ticks(self, ctx, frame);
        }
    }

    fn draw_y_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        ClassicLayout::draw_y_axis_ticks(self, ctx, frame);
    }

    fn draw_grid(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        self.draw_y_axis_grid(ctx, frame);
        if ctx.model.is_column_numeric() {
            self.draw_numerical_x_axis_grid(ctx, frame);
        }
    }

    fn supports_centered_numeric_labels(&self) -> bool {
        false
    }
}

fn vertical_tick(pixel: PixelPoint) -> LinePrimitive {
    LinePrimitive::new(
        pixel.x,
        pixel.y - TICK_HALF_LENGTH,
        pixel.x,
        pixel.y + TICK_HALF_LENGTH,
        STROKE_WIDTH,
        Color::BLACK,
    )
}

fn grid_line(start: PixelPoint, end: PixelPoint) -> LinePrimitive {
    LinePrimitive::new(start.x, start.y, end.x, end.y, STROKE_WIDTH, Color::LIGHT_GRAY)
        .with_stroke_style(LineStrokeStyle::Dotted)
}

fn push_x_label(ctx: &LayoutContext<'_>, frame: &mut RenderFrame, label: String, x: f64, axis_y: f64) {
    if label.is_empty() {
        return;
    }
    let bounds = ctx.measure_tick(&label, false);
    frame.texts.push(TextPrimitive::new(
        label,
        x,
        axis_y + bounds.height + f64::from(MARGIN_OFFSET),
        ctx.config.tick_font.size_px,
        Color::BLACK,
        TextHAlign::Center,
    ));
}
