use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, AxisTransform, Margins, Rect, TickSet};

use super::{CoordSystemKind, TickCacheStats, TickLimits};

/// Whether transforms reflect the current bounds and data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordSystemState {
    /// Bounds missing or invalid, or the last rebuild failed.
    Stale,
    Fresh,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordSystemSnapshot {
    pub kind: CoordSystemKind,
    pub state: CoordSystemState,
    pub bounds: Option<Rect>,
    pub margins: Margins,
    pub inner_bounds: Option<Rect>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub secondary_y_range: Option<AxisRange>,
    pub x_ticks: Option<TickSet>,
    pub y_ticks: Option<TickSet>,
    pub transform: Option<AxisTransform>,
    pub secondary_transform: Option<AxisTransform>,
    pub center_labels_between_ticks: bool,
    pub tick_limits: TickLimits,
    pub tick_cache: TickCacheStats,
}
