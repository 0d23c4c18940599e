//! Monochrome bitmap rasterizer with integer nearest-neighbor scaling

use crate::error::Error;
use crate::font::ascii::{ASCII_WIDTH, GLYPH_HEIGHT};
use crate::framebuffer::color::Color;
use crate::framebuffer::surface::Surface;
use crate::hangul::HangulGlyph;
use crate::render::context::DrawContext;

/// Draw a 16-row bitmap `width_px` pixels wide with its top-left corner at
/// `(x, y)`, each source pixel becoming a `scale x scale` block.
///
/// Set bits use `color`, or the foreground when `None`; clear bits use the
/// background. `bitmap` must hold exactly `16 * width_px / 8` bytes.
pub fn blit(
    surface: &mut Surface<'_>,
    ctx: &DrawContext<'_>,
    x: i32,
    y: i32,
    bitmap: &[u8],
    width_px: usize,
    color: Option<Color>,
) -> Result<(), Error> {
    let expected = width_px.checked_mul(GLYPH_HEIGHT).map(|bits| bits / 8);
    if width_px == 0 || width_px % 8 != 0 || expected != Some(bitmap.len()) {
        return Err(Error::BitmapSize { len: bitmap.len(), width_px });
    }
    blit_rows(surface, ctx, x.into(), y.into(), bitmap, width_px / 8, color);
    Ok(())
}

pub(crate) fn draw_ascii(
    surface: &mut Surface<'_>,
    ctx: &DrawContext<'_>,
    x: i64,
    y: i64,
    code: u8,
    color: Option<Color>,
) {
    let glyph = ctx.ascii_font().glyph(code);
    blit_rows(surface, ctx, x, y, glyph, ASCII_WIDTH / 8, color);
}

pub(crate) fn draw_hangul(
    surface: &mut Surface<'_>,
    ctx: &DrawContext<'_>,
    x: i64,
    y: i64,
    glyph: &HangulGlyph,
    color: Option<Color>,
) {
    blit_rows(surface, ctx, x, y, glyph.as_bytes(), 2, color);
}

fn blit_rows(
    surface: &mut Surface<'_>,
    ctx: &DrawContext<'_>,
    x: i64,
    y: i64,
    bitmap: &[u8],
    bytes_per_row: usize,
    color: Option<Color>,
) {
    let scale = ctx.font_scale() as i64;
    let fg = color.unwrap_or(ctx.fg_color());
    let bg = ctx.bg_color();

    for (row, bytes) in bitmap.chunks_exact(bytes_per_row).enumerate() {
        for sy in 0..scale {
            let py = y + row as i64 * scale + sy;
            let mut px = x;
            for &byte in bytes {
                for bit in 0..8 {
                    let c = if byte & (0x80 >> bit) != 0 { fg } else { bg };
                    for _ in 0..scale {
                        plot(surface, px, py, c);
                        px += 1;
                    }
                }
            }
        }
    }
}

#[inline]
pub(crate) fn plot(surface: &mut Surface<'_>, x: i64, y: i64, color: Color) {
    // Anything past i32 is off the surface as well.
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        surface.put_pixel(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::hangul::{FontFamily, HangulFont};
    use crate::framebuffer::surface::{PixelLayout, SurfaceInfo};
    use crate::hangul::compose_char;
    use std::vec;

    fn count(surface: &Surface<'_>, color: Color) -> usize {
        let (w, h) = (surface.width() as i32, surface.height() as i32);
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.pixel(x, y) == Some(color))
            .count()
    }

    fn red_on_blue(scale: u32) -> DrawContext<'static> {
        let mut ctx = DrawContext::new();
        ctx.set_fg_color(Color::RED);
        ctx.set_bg_color(Color::BLUE);
        ctx.set_font_scale(scale);
        ctx
    }

    #[test]
    fn test_hangul_scaling_law() {
        let ctx = red_on_blue(2);
        let glyph = compose_char(HangulFont::builtin(FontFamily::Myeongjo), '한').unwrap();
        let ones: usize = glyph.as_bytes().iter().map(|b| b.count_ones() as usize).sum();

        let mut buf = vec![0u8; 40 * 40 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(40, 40, PixelLayout::XRGB8888)).unwrap();
        draw_hangul(&mut s, &ctx, 1, 1, &glyph, None);

        assert_eq!(count(&s, Color::RED), ones * 4);
        assert_eq!(count(&s, Color::RED) + count(&s, Color::BLUE), 32 * 32);
        assert_eq!(s.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(s.pixel(33, 33), Some(Color::BLACK));
        assert_ne!(s.pixel(32, 32), Some(Color::BLACK));
    }

    #[test]
    fn test_ascii_scale_three() {
        let ctx = red_on_blue(3);
        let ones: usize = ctx.ascii_font().glyph(b'A').iter().map(|b| b.count_ones() as usize).sum();
        assert!(ones > 0);

        let mut buf = vec![0u8; 30 * 50 * 3];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(30, 50, PixelLayout::RGB888)).unwrap();
        draw_ascii(&mut s, &ctx, 0, 0, b'A', None);

        assert_eq!(count(&s, Color::RED), ones * 9);
        assert_eq!(count(&s, Color::BLUE), 24 * 48 - ones * 9);
        for y in 0..48 {
            for x in 0..24 {
                let c = s.pixel(x, y).unwrap();
                assert!(c == Color::RED || c == Color::BLUE);
            }
        }
        assert_eq!(s.pixel(24, 0), Some(Color::BLACK));
        assert_eq!(s.pixel(0, 48), Some(Color::BLACK));
    }

    #[test]
    fn test_right_edge() {
        let ctx = red_on_blue(1);
        let mut buf = vec![0u8; 20 * 16 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(20, 16, PixelLayout::XRGB8888)).unwrap();
        blit(&mut s, &ctx, 15, 0, &[0xFF; 16], 8, None).unwrap();
        assert_eq!(s.pixel(19, 0), Some(Color::RED));
        assert_eq!(s.pixel(19, 15), Some(Color::RED));
        assert_eq!(s.pixel(14, 0), Some(Color::BLACK));
        assert_eq!(count(&s, Color::RED), 5 * 16);
    }

    #[test]
    fn test_override_color() {
        let ctx = red_on_blue(1);
        let mut buf = vec![0u8; 16 * 16 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(16, 16, PixelLayout::XRGB8888)).unwrap();
        let mut bitmap = [0u8; 32];
        bitmap[0] = 0x80;
        blit(&mut s, &ctx, 0, 0, &bitmap, 16, Some(Color::YELLOW)).unwrap();
        assert_eq!(s.pixel(0, 0), Some(Color::YELLOW));
        assert_eq!(s.pixel(1, 0), Some(Color::BLUE));
        assert_eq!(count(&s, Color::RED), 0);
    }

    #[test]
    fn test_scale_zero_draws_nothing() {
        let ctx = red_on_blue(0);
        let mut buf = vec![0u8; 16 * 16 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(16, 16, PixelLayout::XRGB8888)).unwrap();
        blit(&mut s, &ctx, 0, 0, &[0xFF; 16], 8, None).unwrap();
        assert!(s.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rejects_bitmap_size() {
        let ctx = DrawContext::new();
        let mut buf = vec![0u8; 16 * 16 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(16, 16, PixelLayout::XRGB8888)).unwrap();
        assert_eq!(
            blit(&mut s, &ctx, 0, 0, &[0; 31], 16, None),
            Err(Error::BitmapSize { len: 31, width_px: 16 })
        );
        assert_eq!(
            blit(&mut s, &ctx, 0, 0, &[0; 16], 12, None),
            Err(Error::BitmapSize { len: 16, width_px: 12 })
        );
        assert_eq!(
            blit(&mut s, &ctx, 0, 0, &[0; 16], usize::MAX - 7, None),
            Err(Error::BitmapSize { len: 16, width_px: usize::MAX - 7 })
        );
        assert!(s.as_bytes().iter().all(|&b| b == 0));
    }
}
