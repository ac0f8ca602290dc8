pub mod axis;
pub mod object_ticks;
pub mod range;
pub mod tick_locator;
pub mod transform;
pub mod types;

pub use axis::{Axis, AxisOrientation};
pub use object_ticks::ObjectTickLocator;
pub use range::{AxisRange, normalize};
pub use tick_locator::{
    DEFAULT_ESTIMATED_TICKS, DEFAULT_MAX_TICKS, NumericTickLocator, TickSet, simple_ticks,
};
pub use transform::AxisTransform;
pub use types::{DataPoint, Margins, PixelPoint, Rect, YAxisId};
