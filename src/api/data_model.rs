use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, DataPoint, YAxisId};

/// Read-only view of the chart data a coordinate system is laid out for.
///
/// Extrema return `None` when the model has no values for that axis, in
/// which case ranges fall back to `[0, 1]`.
pub trait ChartDataModel {
    fn maximum_x(&self, axis: YAxisId) -> Option<f64>;
    fn minimum_x(&self, axis: YAxisId) -> Option<f64>;
    fn maximum_y(&self, axis: YAxisId) -> Option<f64>;
    fn minimum_y(&self, axis: YAxisId) -> Option<f64>;

    /// `false` for categorical columns. Column `i` occupies the slot
    /// `[i, i + 1]`, so a categorical x range spans `[0, column count]`.
    fn is_column_numeric(&self) -> bool;

    fn column_label(&self, index: usize) -> Option<String>;

    fn column_labels(&self) -> Vec<String>;

    fn x_range(&self, axis: YAxisId) -> AxisRange {
        AxisRange::from_extrema(self.maximum_x(axis), self.minimum_x(axis))
    }

    fn y_range(&self, axis: YAxisId) -> AxisRange {
        AxisRange::from_extrema(self.maximum_y(axis), self.minimum_y(axis))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub axis: YAxisId,
    pub points: Vec<DataPoint>,
}

/// In-memory data model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticDataModel {
    series: Vec<DataSeries>,
    column_labels: Vec<String>,
}

impl StaticDataModel {
    /// Model with a numeric x column.
    #[must_use]
    pub fn numeric() -> Self {
        Self::default()
    }

    /// Model whose x values index into `labels`.
    #[must_use]
    pub fn categorical<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            series: Vec::new(),
            column_labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, axis: YAxisId, points: Vec<DataPoint>) -> Self {
        self.push_series(axis, points);
        self
    }

    /// Convenience for categorical models: one y value per column, placed at
    /// the center of the column's slot.
    #[must_use]
    pub fn with_column_values(self, axis: YAxisId, values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(index as f64 + 0.5, *value))
            .collect();
        self.with_series(axis, points)
    }

    pub fn push_series(&mut self, axis: YAxisId, points: Vec<DataPoint>) {
        self.series.push(DataSeries { axis, points });
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }

    #[must_use]
    pub fn series(&self) -> &[DataSeries] {
        &self.series
    }

    fn values_on(&self, axis: YAxisId) -> impl Iterator<Item = DataPoint> + '_ {
        self.series
            .iter()
            .filter(move |series| series.axis == axis)
            .flat_map(|series| series.points.iter().copied())
    }

    fn fold_extremum(
        &self,
        axis: YAxisId,
        pick: impl Fn(DataPoint) -> f64,
        better: impl Fn(f64, f64) -> f64,
    ) -> Option<f64> {
        self.values_on(axis)
            .map(pick)
            .filter(|value| value.is_finite())
            .reduce(better)
    }
}

impl ChartDataModel for StaticDataModel {
    fn maximum_x(&self, axis: YAxisId) -> Option<f64> {
        if !self.is_column_numeric() {
            return Some(self.column_labels.len() as f64);
        }
        self.fold_extremum(axis, |point| point.x, f64::max)
    }

    fn minimum_x(&self, axis: YAxisId) -> Option<f64> {
        if !self.is_column_numeric() {
            return Some(0.0);
        }
        self.fold_extremum(axis, |point| point.x, f64::min)
    }

    fn maximum_y(&self, axis: YAxisId) -> Option<f64> {
        self.fold_extremum(axis, |point| point.y, f64::max)
    }

    fn minimum_y(&self, axis: YAxisId) -> Option<f64> {
        self.fold_extremum(axis, |point| point.y, f64::min)
    }

    fn is_column_numeric(&self) -> bool {
        self.column_labels.is_empty()
    }

    fn column_label(&self, index: usize) -> Option<String> {
        self.column_labels.get(index).cloned()
    }

    fn column_labels(&self) -> Vec<String> {
        self.column_labels.clone()
    }
}
