use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::range::AxisRange;

/// Desired counts at or below this use equal partitioning.
pub const SIMPLE_TICK_THRESHOLD: usize = 4;
/// Upper bound on nice-number attempts for one query.
pub const STOP_TICK_RECURSIONS: usize = 80;
pub const DEFAULT_MAX_TICKS: usize = 40;
pub const DEFAULT_ESTIMATED_TICKS: usize = 20;

/// Slack on leading-digit thresholds so `log10` rounding noise on exact
/// powers of ten does not bump the increment a rung.
const LEADING_DIGIT_EPSILON: f64 = 1e-9;

pub type TickValues = SmallVec<[f64; 16]>;

/// Evenly spaced tick values, ascending from the (possibly snapped) minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSet {
    values: TickValues,
    increment: f64,
}

impl TickSet {
    fn stepped(start: f64, increment: f64, len: usize) -> Self {
        let values = (0..len)
            .map(|index| start + index as f64 * increment)
            .collect();
        Self { values, increment }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Ticks lying inside `range`, bounds included.
    pub fn within(&self, range: AxisRange) -> impl Iterator<Item = f64> + '_ {
        self.iter().filter(move |value| range.contains(*value))
    }

    /// Flattened `(tick, y)` pairs for a horizontal axis.
    #[must_use]
    pub fn x_pairs(&self, y: f64) -> Vec<f64> {
        self.iter().flat_map(|x| [x, y]).collect()
    }

    /// Flattened `(x, tick)` pairs for a vertical axis.
    #[must_use]
    pub fn y_pairs(&self, x: f64) -> Vec<f64> {
        self.iter().flat_map(|y| [x, y]).collect()
    }
}

/// Partitions `[min, max]` into `count` equally spaced ticks, both ends included.
#[must_use]
pub fn simple_ticks(max: f64, min: f64, count: usize) -> Option<TickSet> {
    match count {
        0 => None,
        1 => Some(TickSet::stepped(min, 0.0, 1)),
        _ => {
            let increment = (max - min) / (count - 1) as f64;
            Some(TickSet::stepped(min, increment, count))
        }
    }
}

/// Query for "nice" tick positions along a numeric axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericTickLocator {
    pub max: f64,
    pub min: f64,
    pub desired: usize,
    pub max_ticks: usize,
    pub force_simple: bool,
}

impl NumericTickLocator {
    #[must_use]
    pub fn new(max: f64, min: f64, desired: usize, max_ticks: usize) -> Self {
        Self {
            max,
            min,
            desired,
            max_ticks,
            force_simple: false,
        }
    }

    #[must_use]
    pub fn for_range(range: AxisRange, desired: usize, max_ticks: usize) -> Self {
        Self::new(range.max, range.min, desired, max_ticks)
    }

    #[must_use]
    pub fn with_force_simple(mut self, force_simple: bool) -> Self {
        self.force_simple = force_simple;
        self
    }

    /// Computes tick positions.
    ///
    /// Returns `None` for non-finite input, or when the chosen algorithm
    /// yields no ticks at all.
    #[must_use]
    pub fn locate(&self) -> Option<TickSet> {
        if !self.max.is_finite() || !self.min.is_finite() || !(self.max - self.min).is_finite() {
            return None;
        }

        if self.desired == 0 {
            return simple_ticks(self.max, self.min, 2);
        }
        if self.desired <= SIMPLE_TICK_THRESHOLD || self.force_simple {
            return simple_ticks(self.max, self.min, self.desired);
        }
        auto_scale(self.max, self.min, self.desired, self.max_ticks)
    }
}

/// Increment of the form `mantissa * 10^exponent` with mantissa in {1, 2, 5}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NiceStep {
    mantissa: u8,
    exponent: i32,
}

impl NiceStep {
    fn from_raw(raw_increment: f64) -> Self {
        let log = raw_increment.log10();
        let rounded = log.round();
        let leading = 10f64.powf(log - rounded);
        let exponent = rounded as i32;

        if leading > 5.0 + LEADING_DIGIT_EPSILON {
            Self {
                mantissa: 1,
                exponent: exponent + 1,
            }
        } else if leading > 2.0 + LEADING_DIGIT_EPSILON {
            Self {
                mantissa: 5,
                exponent,
            }
        } else if leading > 1.0 + LEADING_DIGIT_EPSILON {
            Self {
                mantissa: 2,
                exponent,
            }
        } else {
            Self {
                mantissa: 1,
                exponent,
            }
        }
    }

    fn value(self) -> f64 {
        f64::from(self.mantissa) * 10f64.powi(self.exponent)
    }

    fn coarser(self) -> Self {
        match self.mantissa {
            1 => Self {
                mantissa: 2,
                ..self
            },
            2 => Self {
                mantissa: 5,
                ..self
            },
            _ => Self {
                mantissa: 1,
                exponent: self.exponent + 1,
            },
        }
    }

    fn finer(self) -> Self {
        match self.mantissa {
            5 => Self {
                mantissa: 2,
                ..self
            },
            2 => Self {
                mantissa: 1,
                ..self
            },
            _ => Self {
                mantissa: 5,
                exponent: self.exponent - 1,
            },
        }
    }
}

/// Snapped start and interval count for one increment.
#[derive(Debug, Clone, Copy)]
struct Snapped {
    start: f64,
    intervals: usize,
}

fn snap(max: f64, min: f64, increment: f64) -> Snapped {
    let start = (min / increment).floor() * increment;
    let end = (max / increment + 0.99999).floor() * increment;
    let raw = ((end - start) / increment + 1.0e-5).floor();
    let intervals = if raw.is_finite() && raw > 0.0 {
        raw as usize
    } else {
        0
    };
    Snapped { start, intervals }
}

fn auto_scale(max: f64, min: f64, desired: usize, max_ticks: usize) -> Option<TickSet> {
    let mut desired = desired;
    let mut attempts = 0usize;

    loop {
        // Headroom on the first pass only.
        let internal_desired = if attempts == 0 {
            desired.max(10)
        } else {
            desired
        };
        attempts += 1;

        let raw_increment = (max - min) / internal_desired as f64;
        if raw_increment == 0.0 {
            let increment = (max - min) / 2.0;
            return finish(min, increment, 3, max_ticks);
        }

        let mut step = NiceStep::from_raw(raw_increment);
        let mut snapped = snap(max, min, step.value());

        if snapped.intervals > max_ticks && snapped.intervals / 2 <= max_ticks {
            step = step.coarser();
            snapped = snap(max, min, step.value());
        }

        let budget = STOP_TICK_RECURSIONS.min(desired.saturating_sub(2));
        if (snapped.intervals > max_ticks && max_ticks < 5) || attempts > budget {
            trace!(
                max,
                min,
                desired,
                max_ticks,
                attempts,
                "nice tick search did not converge; using equal partition"
            );
            return simple_ticks(max, min, desired);
        }

        if snapped.intervals > max_ticks {
            desired = desired.saturating_sub(1);
            continue;
        }

        if snapped.intervals < desired / 2 {
            let finer = step.finer();
            let refined = snap(max, min, finer.value());
            if refined.intervals <= max_ticks {
                step = finer;
                snapped = refined;
            }
        }

        let increment = step.value();
        if increment == 0.0 {
            return finish(min, (max - min) / 2.0, 3, max_ticks);
        }
        return finish(snapped.start, increment, snapped.intervals, max_ticks);
    }
}

fn finish(start: f64, increment: f64, intervals: usize, max_ticks: usize) -> Option<TickSet> {
    let len = (intervals + 1).min(max_ticks);
    if len == 0 {
        return None;
    }
    Some(TickSet::stepped(start, increment, len))
}
