//! # Framebuffer Module
//!
//! Pixel access to a linear framebuffer the caller has already mapped.
//!
//! ## Modules
//!
//! - `surface`: `Surface` over a borrowed byte buffer plus its geometry
//! - `color`: `Color` type with common color constants
//!
//! ## Pixel Addressing
//!
//! A pixel at `(x, y)` starts at `y * stride + x * bits_per_pixel / 8`. Each
//! color channel is one byte at `channel.offset / channel.length` inside the
//! pixel. Writes outside the visible area are dropped.

pub mod color;
pub mod surface;
