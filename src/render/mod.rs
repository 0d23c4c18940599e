//! # Render Module
//!
//! Everything that turns draw calls into pixels.
//!
//! ## Modules
//!
//! - `context`: `DrawContext` with colors, line width, font scale and fonts
//! - `raster`: monochrome bitmap blitter with nearest-neighbor scaling
//! - `draw`: lines, rectangles and text as free functions
//! - `canvas`: `Canvas`, a surface and its context behind one handle
//!
//! Free functions take the surface and context explicitly, so separate
//! renderers never share state. `Canvas` exposes the same operations as
//! methods.

pub mod canvas;
pub mod context;
pub mod draw;
pub mod raster;

pub use canvas::Canvas;
pub use context::DrawContext;
pub use draw::{
    draw_fill_rect, draw_line, draw_rect, draw_str, draw_text, draw_text_bytes, measure_text,
};
pub use raster::blit;
