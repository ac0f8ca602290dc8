use crate::core::{DataPoint, Margins, ObjectTickLocator};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::margins::{BOTTOM_BUFFER, LEFT_BUFFER, boxed_margins};
use super::{AxisLayout, CoordSystemKind, LayoutContext};

const TICK_SIZE: i32 = 5;
const STROKE_WIDTH: f64 = 1.0;

/// Plot area framed by a rectangle, ticks mirrored on opposite sides and
/// rotated y labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxedLayout;

impl BoxedLayout {
    pub fn draw_frame(&self, ctx: &LayoutContext<'_>, frame: &mut RenderFrame) {
        let inner = ctx.inner_bounds();
        frame.rects.push(RectPrimitive::outline(
            f64::from(inner.x),
            f64::from(inner.y),
            f64::from(inner.width.max(0)),
            f64::from(inner.height.max(0)),
            Color::BLACK,
        ));
    }

    /// X unit centered under the plot, y unit rotated along the left edge.
    pub fn draw_unit_labels(&self, ctx: &LayoutContext<'_>, frame: &mut RenderFrame) {
        let inner = ctx.inner_bounds();
        let unit_size = ctx.config.unit_font.size_px;

        if !ctx.config.x_unit.is_empty() {
            frame.texts.push(TextPrimitive::new(
                ctx.config.x_unit.clone(),
                inner.center_x(),
                f64::from(ctx.bounds.bottom() - BOTTOM_BUFFER),
                unit_size,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }

        if !ctx.config.y_unit.is_empty() {
            let rotated = ctx.measure_unit(&ctx.config.y_unit, true);
            frame.texts.push(
                TextPrimitive::new(
                    ctx.config.y_unit.clone(),
                    f64::from(ctx.bounds.x + LEFT_BUFFER) + rotated.width / 2.0,
                    inner.center_y(),
                    unit_size,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .rotated(),
            );
        }
    }

    pub fn draw_y_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let inner = ctx.inner_bounds();
        let (left, right) = (inner.x, inner.right());

        for (y, value) in self.y_rows(ctx) {
            frame.lines.push(pixel_line(right, y, right - TICK_SIZE, y));
            frame.lines.push(pixel_line(left, y, left + TICK_SIZE, y));

            let label = ctx.format_y(value);
            if ctx.config.style.paint_labels && !label.is_empty() {
                frame.texts.push(
                    TextPrimitive::new(
                        label,
                        f64::from(left - LEFT_BUFFER),
                        f64::from(y),
                        ctx.config.tick_font.size_px,
                        Color::BLACK,
                        TextHAlign::Center,
                    )
                    .rotated(),
                );
            }
        }
    }

    /// Dotted lines between opposite ticks. Categorical x columns get none.
    pub fn draw_grid(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let inner = ctx.inner_bounds();
        let (left, right) = (inner.x, inner.right());
        let (top, bottom) = (inner.y, inner.bottom());

        for (y, _) in self.y_rows(ctx) {
            frame
                .lines
                .push(grid_line(left + TICK_SIZE, y, right - TICK_SIZE, y));
        }
        if ctx.model.is_column_numeric() {
            let columns = self.numeric_x_columns(ctx).unwrap_or_default();
            for x in columns.iter().map(|(pixel, _)| pixel.round() as i32) {
                if inner.contains_x(x) {
                    frame
                        .lines
                        .push(grid_line(x, top + TICK_SIZE, x, bottom - TICK_SIZE));
                }
            }
        }
    }

    /// Pixel rows of the y ticks that fall inside the plot area.
    fn y_rows(&self, ctx: &mut LayoutContext<'_>) -> Vec<(i32, f64)> {
        let (Some(transform), Some(ticks)) = (ctx.transform, ctx.y_ticks()) else {
            return Vec::new();
        };
        let inner = ctx.inner_bounds();
        ticks
            .iter()
            .map(|value| {
                let y = transform.apply(DataPoint::new(0.0, value)).y.round() as i32;
                (y, value)
            })
            .filter(|(y, _)| inner.contains_y(*y))
            .collect()
    }

    fn numeric_x_columns(&self, ctx: &mut LayoutContext<'_>) -> Option<Vec<(f64, f64)>> {
        let transform = ctx.transform?;
        let ticks = ctx.x_ticks()?;
        Some(
            ticks
                .iter()
                .map(|value| (transform.apply(DataPoint::new(value, 0.0)).x, value))
                .collect(),
        )
    }

    pub fn draw_numerical_x_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let Some(columns) = self.numeric_x_columns(ctx) else {
            return;
        };
        let pixels: Vec<f64> = columns.iter().map(|(pixel, _)| *pixel).collect();
        let labels: Vec<Option<String>> = columns
            .iter()
            .map(|(_, value)| Some(ctx.format_x(*value)))
            .collect();
        self.draw_x_ticks(ctx, frame, &pixels, labels);
    }

    /// Categorical columns: one tick per located index, labelled with the
    /// column at that index.
    pub fn draw_object_x_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        let Some(transform) = ctx.transform else {
            return;
        };
        let first = ctx.x_range.min.floor() as i64;
        let last = ctx.x_range.max.ceil() as i64;
        let indices =
            ObjectTickLocator::new(first, last, ctx.config.ticks.estimated_x).locate();
        let pixels: Vec<f64> = indices
            .iter()
            .map(|index| transform.apply(DataPoint::new(*index as f64, 0.0)).x)
            .collect();
        let labels: Vec<Option<String>> = indices
            .iter()
            .map(|index| {
                usize::try_from(*index)
                    .ok()
                    .and_then(|column| ctx.model.column_label(column))
            })
            .collect();
        self.draw_x_ticks(ctx, frame, &pixels, labels);
    }

    fn draw_x_ticks(
        &self,
        ctx: &LayoutContext<'_>,
        frame: &mut RenderFrame,
        pixels: &[f64],
        labels: Vec<Option<String>>,
    ) {
        let inner = ctx.inner_bounds();
        let (top, bottom) = (inner.y, inner.bottom());

        for (index, label) in labels.into_iter().enumerate() {
            let Some(&pixel) = pixels.get(index) else {
                break;
            };
            let mut x = pixel.round() as i32;
            if !inner.contains_x(x) {
                continue;
            }
            frame.lines.push(pixel_line(x, top, x, top + TICK_SIZE));
            frame.lines.push(pixel_line(x, bottom, x, bottom - TICK_SIZE));

            let Some(label) = label.filter(|label| !label.is_empty()) else {
                continue;
            };
            if !ctx.config.style.paint_labels {
                continue;
            }
            if ctx.center_labels {
                if let Some(&next) = pixels.get(index + 1) {
                    x += ((next - f64::from(x)) / 2.0) as i32;
                }
            }
            let height = ctx.measure_tick(&label, false).height;
            frame.texts.push(TextPrimitive::new(
                label,
                f64::from(x),
                f64::from(bottom + BOTTOM_BUFFER) + height,
                ctx.config.tick_font.size_px,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }
    }
}

impl AxisLayout for BoxedLayout {
    fn kind(&self) -> CoordSystemKind {
        CoordSystemKind::Boxed
    }

    fn compute_margins(&self, ctx: &mut LayoutContext<'_>) -> Margins {
        boxed_margins(ctx)
    }

    fn paint(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        if ctx.transform.is_none() {
            return;
        }
        self.draw_frame(ctx, frame);
        if ctx.config.style.paint_grid {
            self.draw_grid(ctx, frame);
        }
        self.draw_unit_labels(ctx, frame);
        self.draw_y_axis_ticks(ctx, frame);
        self.draw_x_axis_ticks(ctx, frame);
    }

    fn draw_x_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        if ctx.model.is_column_numeric() {
            self.draw_numerical_x_axis_ticks(ctx, frame);
        } else {
            self.draw_object_x_axis_ticks(ctx, frame);
        }
    }

    fn draw_y_axis_ticks(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        BoxedLayout::draw_y_axis_ticks(self, ctx, frame);
    }

    fn draw_grid(&self, ctx: &mut LayoutContext<'_>, frame: &mut RenderFrame) {
        BoxedLayout::draw_grid(self, ctx, frame);
    }
}

fn pixel_line(x1: i32, y1: i32, x2: i32, y2: i32) -> LinePrimitive {
    LinePrimitive::new(
        f64::from(x1),
        f64::from(y1),
        f64::from(x2),
        f64::from(y2),
        STROKE_WIDTH,
        Color::BLACK,
    )
}

fn grid_line(x1: i32, y1: i32, x2: i32, y2: i32) -> LinePrimitive {
    pixel_line(x1, y1, x2, y2)
        .with_stroke_style(LineStrokeStyle::Dotted)
        .with_color(Color::LIGHT_GRAY)
}
