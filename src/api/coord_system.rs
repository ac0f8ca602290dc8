use tracing::{debug, warn};

use crate::core::{
    Axis, AxisOrientation, AxisTransform, Margins, NumericTickLocator, Rect, TickSet, YAxisId,
};
use crate::error::{CoordError, CoordResult};
use crate::render::{RenderFrame, Renderer};

use super::layout::layout_for;
use super::margins::inner_bounds;
use super::{
    AxisLayout, ChartDataModel, CoordSystemConfig, CoordSystemKind, CoordSystemSnapshot,
    CoordSystemState, EstimatedTextMeasurer, LabelFormat, LayoutContext, RenderChangeEvent,
    RenderListeners, TextMeasurer, TickCache, TickCacheStats, TickLimits,
};

#[derive(Debug, Clone, Copy, Default)]
struct TransformPair {
    primary: Option<AxisTransform>,
    secondary: Option<AxisTransform>,
}

impl TransformPair {
    fn get(self, axis: YAxisId) -> Option<AxisTransform> {
        match axis {
            YAxisId::Primary => self.primary,
            YAxisId::Secondary => self.secondary,
        }
    }

    fn slot(&mut self, axis: YAxisId) -> &mut Option<AxisTransform> {
        match axis {
            YAxisId::Primary => &mut self.primary,
            YAxisId::Secondary => &mut self.secondary,
        }
    }
}

/// Maps data values to pixels for one chart: owns margins, axes, tick
/// queries and the data-to-pixel transforms, and emits axis primitives.
///
/// Every mutation that can move the plot area (bounds, data, units, fonts,
/// tick limits) rebuilds the transforms before returning, so the system is
/// never observed half-updated.
pub struct CoordSystem<M: ChartDataModel> {
    model: M,
    measurer: Box<dyn TextMeasurer + Send + Sync>,
    config: CoordSystemConfig,
    layout: Box<dyn AxisLayout>,
    x_axis: Axis,
    y_axis: Axis,
    secondary_y_axis: Option<Axis>,
    bounds: Option<Rect>,
    margins: Margins,
    transforms: TransformPair,
    default_transforms: TransformPair,
    center_labels: bool,
    state: CoordSystemState,
    tick_cache: TickCache,
    listeners: RenderListeners,
}

impl<M: ChartDataModel> CoordSystem<M> {
    pub fn new(
        model: M,
        measurer: impl TextMeasurer + Send + Sync + 'static,
        config: CoordSystemConfig,
    ) -> Self {
        let x_range = model.x_range(YAxisId::Primary);
        let y_range = model.y_range(YAxisId::Primary);
        let secondary_y_axis = config.secondary_y_axis.then(|| {
            Axis::new(
                AxisOrientation::Vertical,
                model.y_range(YAxisId::Secondary),
            )
        });
        let center_labels = !model.is_column_numeric();

        Self {
            layout: layout_for(config.kind),
            model,
            measurer: Box::new(measurer),
            config,
            x_axis: Axis::new(AxisOrientation::Horizontal, x_range),
            y_axis: Axis::new(AxisOrientation::Vertical, y_range),
            secondary_y_axis,
            bounds: None,
            margins: Margins::default(),
            transforms: TransformPair::default(),
            default_transforms: TransformPair::default(),
            center_labels,
            state: CoordSystemState::Stale,
            tick_cache: TickCache::default(),
            listeners: RenderListeners::default(),
        }
    }

    /// Uses [`EstimatedTextMeasurer`] for label extents.
    pub fn with_estimated_metrics(model: M, config: CoordSystemConfig) -> Self {
        Self::new(model, EstimatedTextMeasurer, config)
    }

    #[must_use]
    pub fn kind(&self) -> CoordSystemKind {
        self.layout.kind()
    }

    #[must_use]
    pub fn state(&self) -> CoordSystemState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &CoordSystemConfig {
        &self.config
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutates the data model and rebuilds against the new ranges.
    pub fn update_model(&mut self, update: impl FnOnce(&mut M)) {
        update(&mut self.model);
        self.chart_data_changed();
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Sets the outer pixel bounds and rebuilds margins and transforms.
    ///
    /// Unchanged bounds are a no-op. Invalid bounds are rejected and leave
    /// the current layout untouched.
    pub fn set_bounds(&mut self, bounds: Rect) -> CoordResult<()> {
        if self.bounds == Some(bounds) {
            return Ok(());
        }
        let bounds = bounds.validate()?;
        self.bounds = Some(bounds);
        self.rebuild();
        Ok(())
    }

    /// Re-reads the model's extrema and rebuilds. Call after mutating a
    /// model that is shared outside this coordinate system.
    pub fn chart_data_changed(&mut self) {
        self.refresh_ranges();
        self.tick_cache.clear();
        self.rebuild();
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn x_axis(&self) -> Axis {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self, axis: YAxisId) -> Option<Axis> {
        match axis {
            YAxisId::Primary => Some(self.y_axis),
            YAxisId::Secondary => self.secondary_y_axis,
        }
    }

    /// Current transform for `axis`, including any zoom/pan override.
    #[must_use]
    pub fn transform(&self, axis: YAxisId) -> Option<AxisTransform> {
        self.transforms.get(axis)
    }

    /// Transform computed from bounds and data, ignoring overrides.
    #[must_use]
    pub fn default_transform(&self, axis: YAxisId) -> Option<AxisTransform> {
        self.default_transforms.get(axis)
    }

    /// Overrides the transform for `axis` until the next rebuild.
    pub fn set_transform(&mut self, transform: AxisTransform, axis: YAxisId) -> CoordResult<()> {
        if axis == YAxisId::Secondary && self.secondary_y_axis.is_none() {
            return Err(CoordError::InvalidConfiguration(
                "no secondary y axis configured".to_owned(),
            ));
        }
        *self.transforms.slot(axis) = Some(transform);
        self.listeners.notify(RenderChangeEvent::TransformsRebuilt);
        Ok(())
    }

    /// Outer bounds minus margins, grown by one pixel on each side.
    #[must_use]
    pub fn inner_bounds(&self) -> Option<Rect> {
        self.bounds.map(|bounds| inner_bounds(bounds, self.margins))
    }

    #[must_use]
    pub fn is_center_labels_between_ticks(&self) -> bool {
        self.center_labels
    }

    /// Rejects centering numeric x labels on layouts whose numeric ticks
    /// sit on the data values.
    pub fn set_center_labels_between_ticks(&mut self, center: bool) -> CoordResult<()> {
        if center && self.model.is_column_numeric() && !self.layout.supports_centered_numeric_labels()
        {
            return Err(CoordError::InvalidConfiguration(format!(
                "{:?} layout cannot center labels of a numeric x column",
                self.layout.kind()
            )));
        }
        if self.center_labels != center {
            self.center_labels = center;
            self.listeners.notify(RenderChangeEvent::StyleChanged);
        }
        Ok(())
    }

    pub fn x_ticks(&mut self) -> Option<TickSet> {
        let limits = self.config.ticks;
        self.tick_cache
            .locate(self.x_axis.range(), limits.estimated_x, limits.maximum_x)
    }

    pub fn y_ticks(&mut self) -> Option<TickSet> {
        let limits = self.config.ticks;
        self.tick_cache
            .locate(self.y_axis.range(), limits.estimated_y, limits.maximum_y)
    }

    #[must_use]
    pub fn tick_cache_stats(&self) -> TickCacheStats {
        self.tick_cache.stats()
    }

    pub fn set_paint_grid(&mut self, enabled: bool) {
        self.update_style(|config| config.style.paint_grid = enabled);
    }

    pub fn set_paint_labels(&mut self, enabled: bool) {
        self.update_style(|config| config.style.paint_labels = enabled);
    }

    pub fn set_paint_axes(&mut self, enabled: bool) {
        self.update_style(|config| config.style.paint_axes = enabled);
    }

    pub fn set_paint_only_tick(&mut self, enabled: bool) {
        self.update_style(|config| config.style.paint_only_tick = enabled);
    }

    pub fn set_draw_arrows(&mut self, enabled: bool) {
        self.update_style(|config| config.style.draw_arrows = enabled);
    }

    /// Unit captions feed the margins, so changing one rebuilds the layout.
    pub fn set_x_unit(&mut self, unit: impl Into<String>) {
        self.config.x_unit = unit.into();
        self.restyle_and_rebuild();
    }

    pub fn set_y_unit(&mut self, unit: impl Into<String>) {
        self.config.y_unit = unit.into();
        self.restyle_and_rebuild();
    }

    pub fn set_x_label_format(&mut self, format: LabelFormat) {
        self.config.x_label_format = format;
        self.restyle_and_rebuild();
    }

    pub fn set_y_label_format(&mut self, format: LabelFormat) {
        self.config.y_label_format = format;
        self.restyle_and_rebuild();
    }

    #[must_use]
    pub fn tick_limits(&self) -> TickLimits {
        self.config.ticks
    }

    pub fn set_estimated_x_ticks(&mut self, estimated: usize) {
        self.update_tick_limits(|limits| limits.set_estimated_x(estimated));
    }

    pub fn set_estimated_y_ticks(&mut self, estimated: usize) {
        self.update_tick_limits(|limits| limits.set_estimated_y(estimated));
    }

    pub fn set_maximum_x_ticks(&mut self, maximum: usize) {
        self.update_tick_limits(|limits| limits.set_maximum_x(maximum));
    }

    pub fn set_maximum_y_ticks(&mut self, maximum: usize) {
        self.update_tick_limits(|limits| limits.set_maximum_y(maximum));
    }

    pub fn reset_maximum_x_ticks(&mut self) {
        self.update_tick_limits(TickLimits::reset_maximum_x);
    }

    pub fn reset_maximum_y_ticks(&mut self) {
        self.update_tick_limits(TickLimits::reset_maximum_y);
    }

    /// Registers a render-change callback; `false` if `id` is taken.
    pub fn add_render_listener(
        &mut self,
        id: impl Into<String>,
        callback: impl FnMut(RenderChangeEvent) + Send + 'static,
    ) -> bool {
        self.listeners.add(id, callback)
    }

    pub fn remove_render_listener(&mut self, id: &str) -> bool {
        self.listeners.remove(id)
    }

    #[must_use]
    pub fn render_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Materializes the axis primitives for the current state.
    ///
    /// Empty when axes are hidden, the layout is invisible, or no transform
    /// has been built yet.
    pub fn build_render_frame(&mut self) -> CoordResult<RenderFrame> {
        let Some(bounds) = self.bounds else {
            return Err(CoordError::InvalidData(
                "coordinate system bounds are not set".to_owned(),
            ));
        };
        let mut frame = RenderFrame::new(bounds);
        if !self.config.style.paint_axes {
            return Ok(frame);
        }
        let (layout, mut ctx) = self.layout_context();
        layout.paint(&mut ctx, &mut frame);
        Ok(frame)
    }

    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> CoordResult<()> {
        let frame = self.build_render_frame()?;
        renderer.render(&frame)
    }

    /// Appends only the x-axis ticks and labels to `frame`.
    pub fn draw_x_axis_ticks(&mut self, frame: &mut RenderFrame) {
        let (layout, mut ctx) = self.layout_context();
        layout.draw_x_axis_ticks(&mut ctx, frame);
    }

    /// Appends only the y-axis ticks and labels to `frame`.
    pub fn draw_y_axis_ticks(&mut self, frame: &mut RenderFrame) {
        let (layout, mut ctx) = self.layout_context();
        layout.draw_y_axis_ticks(&mut ctx, frame);
    }

    /// Appends grid lines to `frame`, regardless of the `paint_grid` flag.
    pub fn draw_grid(&mut self, frame: &mut RenderFrame) {
        let (layout, mut ctx) = self.layout_context();
        layout.draw_grid(&mut ctx, frame);
    }

    #[must_use]
    pub fn snapshot(&self) -> CoordSystemSnapshot {
        let limits = self.config.ticks;
        CoordSystemSnapshot {
            kind: self.layout.kind(),
            state: self.state,
            bounds: self.bounds,
            margins: self.margins,
            inner_bounds: self.inner_bounds(),
            x_range: self.x_axis.range(),
            y_range: self.y_axis.range(),
            secondary_y_range: self.secondary_y_axis.map(Axis::range),
            x_ticks: NumericTickLocator::for_range(
                self.x_axis.range(),
                limits.estimated_x,
                limits.maximum_x,
            )
            .locate(),
            y_ticks: NumericTickLocator::for_range(
                self.y_axis.range(),
                limits.estimated_y,
                limits.maximum_y,
            )
            .locate(),
            transform: self.transforms.primary,
            secondary_transform: self.transforms.secondary,
            center_labels_between_ticks: self.center_labels,
            tick_limits: limits,
            tick_cache: self.tick_cache.stats(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> CoordResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CoordError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    fn layout_context(&mut self) -> (&dyn AxisLayout, LayoutContext<'_>) {
        let ctx = LayoutContext {
            config: &self.config,
            measurer: self.measurer.as_ref(),
            model: &self.model,
            ticks: &mut self.tick_cache,
            bounds: self.bounds.unwrap_or_default(),
            margins: self.margins,
            x_range: self.x_axis.range(),
            y_range: self.y_axis.range(),
            secondary_y_range: self.secondary_y_axis.map(Axis::range),
            transform: self.transforms.primary,
            secondary_transform: self.transforms.secondary,
            center_labels: self.center_labels,
        };
        (self.layout.as_ref(), ctx)
    }

    fn refresh_ranges(&mut self) {
        let x_range = self.model.x_range(YAxisId::Primary);
        let y_range = self.model.y_range(YAxisId::Primary);
        if self.model.maximum_x(YAxisId::Primary).is_none()
            || self.model.maximum_y(YAxisId::Primary).is_none()
        {
            debug!("data extrema unavailable, falling back to default range");
        }
        self.x_axis.set_range(x_range);
        self.y_axis.set_range(y_range);
        if let Some(secondary) = self.secondary_y_axis.as_mut() {
            secondary.set_range(self.model.y_range(YAxisId::Secondary));
        }
    }

    /// Recomputes margins, axis lengths and transforms for the current
    /// bounds. Listeners hear about it only when a transform was built.
    fn rebuild(&mut self) {
        let Some(bounds) = self.bounds else {
            self.state = CoordSystemState::Stale;
            return;
        };

        let margins = {
            let (layout, mut ctx) = self.layout_context();
            ctx.transform = None;
            ctx.secondary_transform = None;
            layout.compute_margins(&mut ctx)
        };
        self.margins = margins;

        let width = bounds.width - margins.horizontal();
        let height = bounds.height - margins.vertical();
        self.x_axis.set_length_px(width);
        self.y_axis.set_length_px(height);
        if let Some(secondary) = self.secondary_y_axis.as_mut() {
            secondary.set_length_px(height);
        }

        let primary = self.build_transform(bounds, self.y_axis, YAxisId::Primary);
        let secondary = self
            .secondary_y_axis
            .and_then(|axis| self.build_transform(bounds, axis, YAxisId::Secondary));

        self.transforms = TransformPair { primary, secondary };
        self.default_transforms = self.transforms;
        self.state = if primary.is_some() {
            CoordSystemState::Fresh
        } else {
            CoordSystemState::Stale
        };

        debug!(
            kind = ?self.layout.kind(),
            left = margins.left,
            right = margins.right,
            top = margins.top,
            bottom = margins.bottom,
            x_length_px = width,
            y_length_px = height,
            "rebuilt axis transforms"
        );
        if primary.is_some() {
            self.listeners.notify(RenderChangeEvent::TransformsRebuilt);
        }
    }

    fn build_transform(&self, bounds: Rect, y_axis: Axis, axis: YAxisId) -> Option<AxisTransform> {
        match AxisTransform::for_axes(bounds, self.margins, self.x_axis, y_axis) {
            Ok(transform) => Some(transform),
            Err(err) => {
                warn!(
                    error = %err,
                    axis = ?axis,
                    "plot area too small, axis transform not built"
                );
                None
            }
        }
    }

    fn update_style(&mut self, update: impl FnOnce(&mut CoordSystemConfig)) {
        update(&mut self.config);
        self.listeners.notify(RenderChangeEvent::StyleChanged);
    }

    fn restyle_and_rebuild(&mut self) {
        self.tick_cache.clear();
        self.listeners.notify(RenderChangeEvent::StyleChanged);
        self.rebuild();
    }

    fn update_tick_limits(&mut self, update: impl FnOnce(&mut TickLimits)) {
        update(&mut self.config.ticks);
        self.listeners.notify(RenderChangeEvent::TickLimitsChanged);
        self.rebuild();
    }
}

impl<M: ChartDataModel> std::fmt::Debug for CoordSystem<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordSystem")
            .field("kind", &self.layout.kind())
            .field("state", &self.state)
            .field("bounds", &self.bounds)
            .field("margins", &self.margins)
            .field("x_range", &self.x_axis.range())
            .field("y_range", &self.y_axis.range())
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StaticDataModel;
    use crate::core::DataPoint;

    fn sample() -> CoordSystem<StaticDataModel> {
        let model = StaticDataModel::numeric().with_series(
            YAxisId::Primary,
            vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 100.0)],
        );
        CoordSystem::with_estimated_metrics(model, CoordSystemConfig::default())
    }

    #[test]
    fn starts_stale_until_bounds_are_set() {
        let mut coord = sample();
        assert_eq!(coord.state(), CoordSystemState::Stale);
        assert!(coord.transform(YAxisId::Primary).is_none());

        coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");
        assert_eq!(coord.state(), CoordSystemState::Fresh);
        assert!(coord.transform(YAxisId::Primary).is_some());
    }

    #[test]
    fn secondary_override_requires_secondary_axis() {
        let mut coord = sample();
        let err = coord
            .set_transform(AxisTransform::identity(), YAxisId::Secondary)
            .expect_err("no secondary axis");
        assert!(matches!(err, CoordError::InvalidConfiguration(_)));
    }
}
