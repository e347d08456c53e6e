//! Linepad Render Library
//!
//! Drawing surface abstraction and backends: a command recorder for tests
//! and replay, and a tiny-skia raster backend behind the default `raster`
//! feature.

pub mod scene;
#[cfg(feature = "raster")]
pub mod skia;
pub mod surface;

pub use scene::{DrawCommand, Scene};
#[cfg(feature = "raster")]
pub use skia::PixmapSurface;
pub use surface::{draw_segment, draw_segments, Surface, SurfaceError, SurfaceResult, SurfaceStyle};
