//! # hanfb
//!
//! Draws ASCII and precomposed Hangul text, lines and rectangles into a
//! linear framebuffer the caller has already mapped.
//!
//! ```ignore
//! let info = SurfaceInfo::packed(800, 480, PixelLayout::XRGB8888);
//! let mut canvas = Canvas::new(Surface::new(fb_memory, info)?);
//! canvas.set_font_scale(2);
//! canvas.set_font(FontFamily::Hangodic);
//! draw_text!(canvas, 10, 10, None, "안녕 {}", "hanfb")?;
//! ```
//!
//! ## Layout
//!
//! - `framebuffer`: pixel surface and colors
//! - `font`: ASCII table and Hangul component tables
//! - `hangul`: syllable decoding and glyph composition
//! - `render`: draw context, rasterizer and primitives
//! - `logging`: debug log sink
//! - `format`: bounded formatting buffer

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod format;
pub mod logging;
pub mod font;
pub mod framebuffer;
pub mod hangul;
pub mod render;

pub use error::Error;
pub use font::ascii::AsciiFont;
pub use font::hangul::{FontFamily, HangulFont};
pub use framebuffer::color::Color;
pub use framebuffer::surface::{Channel, PixelLayout, Surface, SurfaceInfo};
pub use hangul::{compose, compose_char, HangulGlyph, Jamo};
pub use render::{Canvas, DrawContext};
