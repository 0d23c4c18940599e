//! Font Subsystem
//!
//! Bitmap fonts consumed by the rasterizer:
//! - `ascii`: 8x16 glyphs for codes 0-127
//! - `hangul`: 8x4x4 component tables and the selectable families

pub mod ascii;
pub mod hangul;
mod jamo;
