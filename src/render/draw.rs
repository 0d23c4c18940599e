//! # Drawing Primitives
//!
//! Lines, rectangles and mixed ASCII/Hangul text on a `Surface`, using the
//! colors and sizes held in a `DrawContext`.
//!
//! ## Text encoding
//!
//! Text is walked one code unit at a time:
//! - `0x00` ends the text
//! - `0x01-0x7F` is drawn from the ASCII table, `8 * scale` pixels wide
//! - `0x80-0xFF` starts a 3-byte UTF-8 Hangul syllable, `16 * scale` wide
//!
//! The whole input is decoded before anything is drawn, so malformed text
//! leaves the surface untouched.

use core::fmt;

use crate::error::Error;
use crate::font::ascii::ASCII_WIDTH;
use crate::font::hangul::HANGUL_WIDTH;
use crate::format::{format_to, TEXT_BUFFER_LEN};
use crate::framebuffer::color::Color;
use crate::framebuffer::surface::Surface;
use crate::hangul::{compose_jamo, decode_utf8, decompose, Jamo};
use crate::render::context::DrawContext;
use crate::render::raster::{draw_ascii, draw_hangul, plot};

// =============================================================================
// Shapes
// =============================================================================

/// `w` pixels of foreground color on row `y`, starting at `x`.
pub fn draw_line(surface: &mut Surface<'_>, ctx: &DrawContext<'_>, x: i32, y: i32, w: u32) {
    hline(surface, x.into(), y.into(), w.into(), ctx.fg_color());
}

/// Rectangle outline `line_width` pixels thick. Rows within the thickness of
/// the top or bottom edge are drawn in full.
pub fn draw_rect(
    surface: &mut Surface<'_>,
    ctx: &DrawContext<'_>,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) {
    let fg = ctx.fg_color();
    let t = i64::from(ctx.line_width());
    let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));

    for dy in 0..h {
        if dy < t || dy > h - t - 1 {
            hline(surface, x, y + dy, w, fg);
        } else {
            for i in 0..t {
                plot(surface, x + i, y + dy, fg);
                plot(surface, x + w - 1 - i, y + dy, fg);
            }
        }
    }
}

pub fn draw_fill_rect(
    surface: &mut Surface<'_>,
    ctx: &DrawContext<'_>,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) {
    let fg = ctx.fg_color();
    for dy in 0..i64::from(h) {
        hline(surface, x.into(), i64::from(y) + dy, w.into(), fg);
    }
}

fn hline(surface: &mut Surface<'_>, x: i64, y: i64, w: i64, color: Color) {
    for dx in 0..w {
        plot(surface, x + dx, y, color);
    }
}

// =============================================================================
// Text
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Ascii(u8),
    Syllable(Jamo),
}

impl Unit {
    fn width(&self) -> u64 {
        match self {
            Unit::Ascii(_) => ASCII_WIDTH as u64,
            Unit::Syllable(_) => HANGUL_WIDTH as u64,
        }
    }
}

/// Splits text into drawable units, stopping at the first NUL.
struct Units<'a> {
    bytes: &'a [u8],
}

impl<'a> Units<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl Iterator for Units<'_> {
    type Item = Result<Unit, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let (&b1, rest) = self.bytes.split_first()?;
        if b1 == 0 {
            self.bytes = &[];
            return None;
        }
        if b1 < 0x80 {
            self.bytes = rest;
            return Some(Ok(Unit::Ascii(b1)));
        }
        let [b2, b3, ..] = *rest else {
            self.bytes = &[];
            if b1 & 0xF0 != 0xE0 {
                return Some(Err(Error::InvalidLeadByte(b1)));
            }
            return Some(Err(Error::TruncatedSequence));
        };
        self.bytes = &rest[2..];
        Some(
            decode_utf8(b1, b2, b3)
                .and_then(decompose)
                .map(Unit::Syllable),
        )
    }
}

/// Draw raw text bytes at `(x, y)` and return the x just past the last glyph.
///
/// Set glyph pixels use `color`, or the foreground when `None`.
pub fn draw_text_bytes(
    surface: &mut Surface<'_>,
    ctx: &DrawContext<'_>,
    x: i32,
    y: i32,
    color: Option<Color>,
    text: &[u8],
) -> Result<i32, Error> {
    for unit in Units::new(text) {
        unit?;
    }

    let scale = i64::from(ctx.font_scale());
    let mut cursor = i64::from(x);
    for unit in Units::new(text).flatten() {
        match unit {
            Unit::Ascii(code) => draw_ascii(surface, ctx, cursor, y.into(), code, color),
            Unit::Syllable(jamo) => {
                let glyph = compose_jamo(ctx.hangul_font(), jamo);
                draw_hangul(surface, ctx, cursor, y.into(), &glyph, color);
            }
        }
        cursor = cursor.saturating_add(unit.width() as i64 * scale);
    }
    Ok(cursor.clamp(i32::MIN.into(), i32::MAX.into()) as i32)
}

pub fn draw_str(
    surface: &mut Surface<'_>,
    ctx: &DrawContext<'_>,
    x: i32,
    y: i32,
    color: Option<Color>,
    text: &str,
) -> Result<i32, Error> {
    draw_text_bytes(surface, ctx, x, y, color, text.as_bytes())
}

/// Format `args` into a `TEXT_BUFFER_LEN`-byte buffer and draw the result.
/// Output that does not fit is cut at a character boundary.
pub fn draw_text(
    surface: &mut Surface<'_>,
    ctx: &DrawContext<'_>,
    x: i32,
    y: i32,
    color: Option<Color>,
    args: fmt::Arguments<'_>,
) -> Result<i32, Error> {
    let mut buf = [0u8; TEXT_BUFFER_LEN];
    let text = format_to(&mut buf, args);
    draw_text_bytes(surface, ctx, x, y, color, text.as_bytes())
}

/// Horizontal advance in pixels `draw_text_bytes` would produce for `text`.
pub fn measure_text(ctx: &DrawContext<'_>, text: &[u8]) -> Result<u64, Error> {
    let scale = u64::from(ctx.font_scale());
    Units::new(text).try_fold(0u64, |width, unit| {
        Ok(width.saturating_add(unit?.width() * scale))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::surface::{PixelLayout, SurfaceInfo};
    use std::vec;

    fn row(surface: &Surface<'_>, y: i32) -> std::string::String {
        (0..surface.width() as i32)
            .map(|x| if surface.pixel(x, y) == Some(Color::BLACK) { '.' } else { '#' })
            .collect()
    }

    fn white_ink() -> DrawContext<'static> {
        let mut ctx = DrawContext::new();
        ctx.set_fg_color(Color::WHITE);
        ctx.set_bg_color(Color::GRAY);
        ctx
    }

    #[test]
    fn test_rect_thickness_two() {
        let mut ctx = white_ink();
        ctx.set_line_width(2);
        let mut buf = vec![0u8; 12 * 12 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(12, 12, PixelLayout::XRGB8888)).unwrap();
        draw_rect(&mut s, &ctx, 0, 0, 10, 10);

        for y in [0, 1, 8, 9] {
            assert_eq!(row(&s, y), "##########..");
        }
        for y in 2..8 {
            assert_eq!(row(&s, y), "##......##..");
        }
        assert_eq!(row(&s, 10), "............");
    }

    #[test]
    fn test_thick_rect_fills() {
        let mut ctx = white_ink();
        ctx.set_line_width(3);
        let mut buf = vec![0u8; 4 * 4 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(4, 4, PixelLayout::XRGB8888)).unwrap();
        draw_rect(&mut s, &ctx, 0, 0, 4, 4);
        for y in 0..4 {
            assert_eq!(row(&s, y), "####");
        }
    }

    #[test]
    fn test_line_and_fill() {
        let ctx = white_ink();
        let mut buf = vec![0u8; 8 * 4 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(8, 4, PixelLayout::XRGB8888)).unwrap();
        draw_line(&mut s, &ctx, 5, 0, 10);
        assert_eq!(row(&s, 0), ".....###");
        draw_fill_rect(&mut s, &ctx, -1, 2, 3, 5);
        assert_eq!(row(&s, 1), "........");
        assert_eq!(row(&s, 2), "##......");
        assert_eq!(row(&s, 3), "##......");
    }

    #[test]
    fn test_text_advance() {
        let mut ctx = white_ink();
        ctx.set_font_scale(2);
        let mut buf = vec![0u8; 64 * 32 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(64, 32, PixelLayout::XRGB8888)).unwrap();
        let end = draw_str(&mut s, &ctx, 4, 0, None, "A가").unwrap();
        assert_eq!(end, 4 + 16 + 32);
        assert_eq!(measure_text(&ctx, "A가".as_bytes()), Ok(48));
        // Hangul cell starts right after the ASCII cell.
        assert_ne!(s.pixel(20, 0), Some(Color::BLACK));
        assert_eq!(s.pixel(52, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_text_stops_at_nul() {
        let ctx = white_ink();
        let mut buf = vec![0u8; 64 * 16 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(64, 16, PixelLayout::XRGB8888)).unwrap();
        assert_eq!(draw_text_bytes(&mut s, &ctx, 0, 0, None, b"AB\0CD"), Ok(16));
        assert_eq!(s.pixel(16, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_invalid_text_draws_nothing() {
        let ctx = white_ink();
        let mut buf = vec![0u8; 64 * 16 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(64, 16, PixelLayout::XRGB8888)).unwrap();
        assert_eq!(
            draw_text_bytes(&mut s, &ctx, 0, 0, None, &[b'A', 0xEA, 0x30, 0x80]),
            Err(Error::InvalidContinuation(0x30))
        );
        assert_eq!(
            draw_text_bytes(&mut s, &ctx, 0, 0, None, &[b'A', 0xEA, 0xB0]),
            Err(Error::TruncatedSequence)
        );
        assert_eq!(draw_str(&mut s, &ctx, 0, 0, None, "é"), Err(Error::InvalidLeadByte(0xC3)));
        assert_eq!(draw_str(&mut s, &ctx, 0, 0, None, "ㄱ"), Err(Error::UnsupportedCodePoint(0x3131)));
        assert!(s.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_text_formats() {
        let ctx = white_ink();
        let mut buf = vec![0u8; 64 * 16 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(64, 16, PixelLayout::XRGB8888)).unwrap();
        let end = draw_text(&mut s, &ctx, 0, 0, Some(Color::RED), format_args!("{}:{}", 4, "한")).unwrap();
        assert_eq!(end, 8 + 8 + 16);
        let red = (0..16).flat_map(|y| (0..64).map(move |x| (x, y))).any(|(x, y)| s.pixel(x, y) == Some(Color::RED));
        assert!(red);
    }

    #[test]
    fn test_long_text_is_truncated() {
        let ctx = white_ink();
        let mut buf = vec![0u8; 4 * 16 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(4, 16, PixelLayout::XRGB8888)).unwrap();
        let text = "가".repeat(100);
        // 256 bytes hold 85 complete syllables.
        assert_eq!(draw_text(&mut s, &ctx, 0, 0, None, format_args!("{text}")), Ok(85 * 16));
    }

    #[test]
    fn test_overflow_drops_everything_after_cut() {
        let ctx = white_ink();
        let mut buf = vec![0u8; 4 * 16 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(4, 16, PixelLayout::XRGB8888)).unwrap();
        let head = "a".repeat(254);
        let (syllable, tail) = ("가", "b");
        // The syllable does not fit in the last 2 bytes, so "b" must not be drawn either.
        let end = draw_text(&mut s, &ctx, 0, 0, None, format_args!("{}{}{}", head, syllable, tail));
        assert_eq!(end, Ok(254 * 8));
    }
}
