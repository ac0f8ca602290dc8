//! coordsys-rs: headless 2D chart coordinate systems.
//!
//! The crate places "nice" tick marks on numeric and categorical axes, sizes
//! the margins around a plot area from label extents, and builds the affine
//! data-to-pixel transforms a chart paints through. Painting itself is left
//! to the host: layouts emit backend-agnostic primitives into a
//! [`render::RenderFrame`].
//!
//! - [`core`] holds the pure math (ranges, tick locators, axes, transforms).
//! - [`api`] holds the stateful [`CoordSystem`] and its layout variants.
//! - [`render`] holds frame primitives and the [`render::Renderer`] seam.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{CoordSystem, CoordSystemConfig, CoordSystemKind};
pub use error::{CoordError, CoordResult};
