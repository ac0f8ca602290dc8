mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, PolygonPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use crate::error::CoordResult;

/// Contract implemented by any painting backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from tick, margin and transform computation.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> CoordResult<()>;
}
