//! Margin sizing for the classic and boxed layouts.
//!
//! Label extents are sampled from every other tick (skip, measure, skip, ...)
//! to approximate the density at which labels end up readable.

use crate::core::{Margins, Rect};

use super::LayoutContext;

pub const MINIMAL_MARGIN: i32 = 20;
pub const ARROW_LENGTH: i32 = 15;
pub const MARGIN_OFFSET: i32 = 6;
pub const LEFT_UNIT_BUFFER: i32 = 10;

pub const BOTTOM_BUFFER: i32 = 5;
pub const LEFT_BUFFER: i32 = 5;

/// Sample label used to size the boxed layout's numeric tick rows.
pub const BOXED_SAMPLE_LABEL: &str = "1.0";

const ARROW_THIRD: f64 = ARROW_LENGTH as f64 / 3.0;

/// Plot area: `bounds` shrunk by `margins`, grown by one pixel per side.
#[must_use]
pub fn inner_bounds(bounds: Rect, margins: Margins) -> Rect {
    Rect::new(
        bounds.x + margins.left - 1,
        bounds.y + margins.top - 1,
        bounds.width - margins.horizontal() + 2,
        bounds.height - margins.vertical() + 2,
    )
}

/// Largest `measure(label)` over every second label, starting with the second.
pub fn alternating_extent<I, F>(labels: I, mut measure: F) -> f64
where
    I: IntoIterator<Item = String>,
    F: FnMut(&str) -> f64,
{
    labels
        .into_iter()
        .skip(1)
        .step_by(2)
        .map(|label| measure(&label))
        .fold(0.0, f64::max)
}

#[must_use]
pub fn classic_margins(ctx: &mut LayoutContext<'_>) -> Margins {
    let right = classic_right_margin(ctx);
    let left = classic_left_margin(ctx, right);
    let top = classic_top_margin(ctx);
    let bottom = classic_bottom_margin(ctx);
    Margins::new(left, right, top, bottom)
}

/// Needs the right margin of the same pass to tell whether the y axis is
/// displaced into the plot.
pub fn classic_left_margin(ctx: &mut LayoutContext<'_>, right_margin: i32) -> i32 {
    let labels: Vec<String> = ctx
        .y_ticks()
        .map(|ticks| ticks.iter().map(|value| ctx.format_y(value)).collect())
        .unwrap_or_default();
    let label_width = alternating_extent(labels, |label| ctx.measure_tick(label, false).width.ceil());

    let mut margin = label_width as i32 + MARGIN_OFFSET + LEFT_UNIT_BUFFER;
    let unit_width = ctx.measure_unit(&ctx.config.y_unit, false).width;
    margin = margin.max(unit_width as i32 + LEFT_UNIT_BUFFER);

    let x_range = ctx.x_range;
    let displacement =
        (x_range.min * f64::from(ctx.bounds.width - right_margin) / x_range.span()) as i32;
    if displacement.abs() > margin && x_range.min < 0.0 {
        margin = MARGIN_OFFSET;
    }

    (margin + 5).max(MINIMAL_MARGIN)
}

#[must_use]
pub fn classic_right_margin(ctx: &LayoutContext<'_>) -> i32 {
    let unit = ctx.measure_unit(&ctx.config.x_unit, false);
    ((unit.width + ARROW_THIRD) as i32).max(ARROW_LENGTH) + 5
}

#[must_use]
pub fn classic_top_margin(ctx: &LayoutContext<'_>) -> i32 {
    let unit = ctx.measure_unit(&ctx.config.y_unit, false);
    ((unit.height + ARROW_THIRD + unit.descent) as i32).max(ARROW_LENGTH)
}

pub fn classic_bottom_margin(ctx: &mut LayoutContext<'_>) -> i32 {
    // The x axis sits inside the plot, labels need no room below it.
    if ctx.y_range.straddles_zero() {
        return MINIMAL_MARGIN;
    }

    let labels: Vec<String> = if ctx.model.is_column_numeric() {
        ctx.x_ticks()
            .map(|ticks| ticks.iter().map(|value| ctx.format_x(value)).collect())
            .unwrap_or_default()
    } else {
        ctx.model.column_labels()
    };
    let label_height = alternating_extent(labels, |label| ctx.measure_tick(label, false).height);
    let unit_height = ctx.measure_unit(&ctx.config.x_unit, false).height;

    let margin = (label_height as i32 + MARGIN_OFFSET).max(unit_height as i32 + MARGIN_OFFSET);
    (margin + 10).max(MINIMAL_MARGIN)
}

#[must_use]
pub fn boxed_margins(ctx: &LayoutContext<'_>) -> Margins {
    Margins::new(boxed_left_margin(ctx), 0, 0, boxed_bottom_margin(ctx))
}

#[must_use]
pub fn boxed_bottom_margin(ctx: &LayoutContext<'_>) -> i32 {
    let unit_height = ctx.measure_unit(&ctx.config.x_unit, false).height;
    let tick_height = if ctx.model.is_column_numeric() {
        ctx.measure_tick(BOXED_SAMPLE_LABEL, false).height
    } else {
        ctx.model
            .column_labels()
            .iter()
            .map(|label| ctx.measure_tick(label, false).height)
            .fold(0.0, f64::max)
    };
    unit_height as i32 + tick_height as i32 + 3 * BOTTOM_BUFFER
}

#[must_use]
pub fn boxed_left_margin(ctx: &LayoutContext<'_>) -> i32 {
    let unit_width = ctx.measure_unit(&ctx.config.y_unit, true).width;
    let tick_width = ctx.measure_tick(BOXED_SAMPLE_LABEL, true).width;
    unit_width as i32 + tick_width as i32 + 3 * LEFT_BUFFER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_extent_skips_first_label() {
        let labels = ["wide-label", "a", "bb", "c"].map(str::to_owned);
        let widest = alternating_extent(labels, |label| label.len() as f64);
        assert_eq!(widest, 1.0);
    }

    #[test]
    fn alternating_extent_of_single_label_is_zero() {
        let widest = alternating_extent(["100".to_owned()], |label| label.len() as f64);
        assert_eq!(widest, 0.0);
    }

    #[test]
    fn inner_bounds_grows_one_pixel_per_side() {
        let inner = inner_bounds(Rect::new(0, 0, 400, 300), Margins::new(50, 20, 15, 40));
        assert_eq!(inner, Rect::new(49, 14, 332, 247));
    }
}
