mod boxed;
mod classic;
mod config;
mod coord_system;
mod data_model;
mod label_format;
mod layout;
mod listeners;
pub mod margins;
mod snapshot;
mod text_metrics;
mod tick_cache;

pub use boxed::BoxedLayout;
pub use classic::{AxisLine, ClassicLayout, y_axis_anchor};
pub use config::{AxisStyle, CoordSystemConfig, CoordSystemKind, TickLimits};
pub use coord_system::CoordSystem;
pub use data_model::{ChartDataModel, DataSeries, StaticDataModel};
pub use label_format::{DEFAULT_FRACTION_DIGITS, LabelFormat, LabelFormatterFn};
pub use layout::{AxisLayout, InvisibleLayout, LayoutContext, layout_for};
pub use listeners::{RenderChangeEvent, RenderListenerFn, RenderListeners};
pub use snapshot::{CoordSystemSnapshot, CoordSystemState};
pub use text_metrics::{EstimatedTextMeasurer, FontSpec, TextBounds, TextMeasurer};
pub use tick_cache::{TickCache, TickCacheStats};
