//! Pixel surface over an externally mapped framebuffer
use core::fmt;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb888,
    Pixel,
};

use crate::error::Error;
use crate::framebuffer::color::Color;
use crate::logging::dbg_log;

/// Position and width of one channel inside a pixel, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Channel {
    pub offset: u32,
    pub length: u32,
}

impl Channel {
    pub const NONE: Channel = Channel { offset: 0, length: 0 };

    pub const fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    pub const fn is_present(&self) -> bool {
        self.length != 0
    }

    /// Byte index inside the pixel. Only meaningful for 8-bit channels.
    const fn byte_index(&self) -> usize {
        (self.offset / self.length) as usize
    }
}

/// Channel layout of a packed pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    pub bits_per_pixel: u32,
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
    pub transp: Channel,
}

impl PixelLayout {
    /// 32 bpp, red in bits 16..24, unused top byte.
    pub const XRGB8888: PixelLayout = PixelLayout {
        bits_per_pixel: 32,
        red: Channel::new(16, 8),
        green: Channel::new(8, 8),
        blue: Channel::new(0, 8),
        transp: Channel::NONE,
    };
    /// 32 bpp with alpha in the top byte.
    pub const ARGB8888: PixelLayout = PixelLayout {
        bits_per_pixel: 32,
        red: Channel::new(16, 8),
        green: Channel::new(8, 8),
        blue: Channel::new(0, 8),
        transp: Channel::new(24, 8),
    };
    /// 32 bpp, red in the low byte, alpha in the top byte.
    pub const ABGR8888: PixelLayout = PixelLayout {
        bits_per_pixel: 32,
        red: Channel::new(0, 8),
        green: Channel::new(8, 8),
        blue: Channel::new(16, 8),
        transp: Channel::new(24, 8),
    };
    /// 24 bpp, red in bits 16..24.
    pub const RGB888: PixelLayout = PixelLayout {
        bits_per_pixel: 24,
        red: Channel::new(16, 8),
        green: Channel::new(8, 8),
        blue: Channel::new(0, 8),
        transp: Channel::NONE,
    };
    /// 24 bpp, red in the low byte.
    pub const BGR888: PixelLayout = PixelLayout {
        bits_per_pixel: 24,
        red: Channel::new(0, 8),
        green: Channel::new(8, 8),
        blue: Channel::new(16, 8),
        transp: Channel::NONE,
    };

    pub const fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }

    /// Check the layout is one the pixel writer can address byte-wise.
    pub fn validate(&self) -> Result<(), Error> {
        if self.bits_per_pixel == 0 || self.bits_per_pixel % 8 != 0 {
            return Err(Error::UnsupportedDepth(self.bits_per_pixel));
        }
        let channels = [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("transp", self.transp),
        ];
        for (name, ch) in channels {
            if name == "transp" && !ch.is_present() {
                continue;
            }
            if ch.length != 8 {
                return Err(Error::UnsupportedChannel { name, length: ch.length });
            }
            if ch.byte_index() >= self.bytes_per_pixel() {
                return Err(Error::ChannelOutOfPixel { name, offset: ch.offset });
            }
        }
        Ok(())
    }
}

/// Geometry of a mapped framebuffer as reported by the display driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceInfo {
    pub width: usize,
    pub height: usize,
    /// Bytes per row; may exceed `width * bytes_per_pixel`.
    pub stride: usize,
    pub layout: PixelLayout,
}

impl SurfaceInfo {
    /// Surface whose rows are packed with no padding.
    pub const fn packed(width: usize, height: usize, layout: PixelLayout) -> Self {
        Self {
            width,
            height,
            stride: width.saturating_mul(layout.bytes_per_pixel()),
            layout,
        }
    }

    pub const fn bytes_per_pixel(&self) -> usize {
        self.layout.bytes_per_pixel()
    }

    /// Bytes of visible pixel data in one row, saturating at `usize::MAX`.
    pub const fn row_bytes(&self) -> usize {
        self.width.saturating_mul(self.bytes_per_pixel())
    }

    /// Smallest buffer that covers every visible pixel, saturating at
    /// `usize::MAX` so oversized geometry fails validation.
    pub const fn required_len(&self) -> usize {
        if self.height == 0 {
            0
        } else {
            (self.height - 1)
                .saturating_mul(self.stride)
                .saturating_add(self.row_bytes())
        }
    }

    pub fn validate(&self, buffer_len: usize) -> Result<(), Error> {
        self.layout.validate()?;
        if self.stride < self.row_bytes() {
            return Err(Error::StrideTooSmall {
                stride: self.stride,
                row_bytes: self.row_bytes(),
            });
        }
        let required = self.required_len();
        if buffer_len < required {
            return Err(Error::BufferTooSmall { len: buffer_len, required });
        }
        Ok(())
    }
}

impl fmt::Display for SurfaceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = &self.layout;
        writeln!(f, "========== FB SCREENINFO ==========")?;
        writeln!(f, "xres: {}", self.width)?;
        writeln!(f, "yres: {}", self.height)?;
        writeln!(f, "bpp : {}", l.bits_per_pixel)?;
        writeln!(f, "stride : {}", self.stride)?;
        for (name, ch) in [
            ("red", l.red),
            ("green", l.green),
            ("blue", l.blue),
            ("transp", l.transp),
        ] {
            writeln!(f, "{} bits :", name)?;
            writeln!(f, "    offset   : {}", ch.offset)?;
            writeln!(f, "    length   : {}", ch.length)?;
        }
        write!(f, "===================================")
    }
}

/// A framebuffer the engine draws into.
///
/// The buffer is borrowed for the surface's lifetime and only ever written.
pub struct Surface<'a> {
    buffer: &'a mut [u8],
    info: SurfaceInfo,
    bytes_per_pixel: usize,
    red: usize,
    green: usize,
    blue: usize,
    alpha: Option<usize>,
}

impl<'a> Surface<'a> {
    pub fn new(buffer: &'a mut [u8], info: SurfaceInfo) -> Result<Self, Error> {
        info.validate(buffer.len())?;
        let l = info.layout;
        Ok(Self {
            buffer,
            info,
            bytes_per_pixel: l.bytes_per_pixel(),
            red: l.red.byte_index(),
            green: l.green.byte_index(),
            blue: l.blue.byte_index(),
            alpha: l.transp.is_present().then(|| l.transp.byte_index()),
        })
    }

    pub fn info(&self) -> &SurfaceInfo {
        &self.info
    }

    pub fn width(&self) -> usize {
        self.info.width
    }

    pub fn height(&self) -> usize {
        self.info.height
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.info.width || y as usize >= self.info.height {
            return None;
        }
        Some(y as usize * self.info.stride + x as usize * self.bytes_per_pixel)
    }

    /// Write one pixel. Coordinates off the surface are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some(offset) = self.offset(x, y) else {
            dbg_log!(
                "Out of range.(width = {}, x = {}, height = {}, y = {})",
                self.info.width,
                x,
                self.info.height,
                y
            );
            return;
        };
        let px = &mut self.buffer[offset..offset + self.bytes_per_pixel];
        let [r, g, b] = color.to_bytes();
        px[self.red] = r;
        px[self.green] = g;
        px[self.blue] = b;
        if let Some(a) = self.alpha {
            px[a] = 255;
        }
    }

    /// Read a pixel back, for callers that keep a shadow of what was drawn.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let px = &self.buffer[offset..offset + self.bytes_per_pixel];
        Some(Color::new(px[self.red], px[self.green], px[self.blue]))
    }

    /// Zero every visible row, leaving stride padding alone.
    pub fn clear(&mut self) {
        let row_bytes = self.info.row_bytes();
        for y in 0..self.info.height {
            let start = y * self.info.stride;
            self.buffer[start..start + row_bytes].fill(0);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.buffer
    }
}

impl DrawTarget for Surface<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.put_pixel(x, y, color.into());
        }
        Ok(())
    }
}

impl OriginDimensions for Surface<'_> {
    fn size(&self) -> Size {
        Size::new(self.info.width as u32, self.info.height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };
    use std::{format, vec};

    #[test]
    fn test_put_pixel_honors_layout() {
        let mut buf = vec![0u8; 4 * 4 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(4, 4, PixelLayout::XRGB8888)).unwrap();
        s.put_pixel(1, 2, Color::new(0x11, 0x22, 0x33));
        let off = 2 * 16 + 4;
        assert_eq!(&s.as_bytes()[off..off + 4], &[0x33, 0x22, 0x11, 0x00]);
    }

    #[test]
    fn test_alpha_always_opaque() {
        let mut buf = vec![0u8; 8];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(2, 1, PixelLayout::ABGR8888)).unwrap();
        s.put_pixel(1, 0, Color::BLACK);
        assert_eq!(&s.as_bytes()[4..8], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_stride_padding() {
        let info = SurfaceInfo { width: 2, height: 2, stride: 8, layout: PixelLayout::RGB888 };
        let mut buf = vec![0xAAu8; info.required_len()];
        assert_eq!(buf.len(), 14);
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.put_pixel(0, 1, Color::from_hex(0x010203));
        assert_eq!(&s.as_bytes()[8..11], &[3, 2, 1]);
        s.clear();
        assert_eq!(&s.as_bytes()[0..6], &[0; 6]);
        assert_eq!(&s.as_bytes()[6..8], &[0xAA, 0xAA]);
    }

    #[test]
    fn test_out_of_range_is_dropped() {
        let mut buf = vec![0u8; 3 * 3 * 3];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(3, 3, PixelLayout::BGR888)).unwrap();
        s.put_pixel(3, 0, Color::WHITE);
        s.put_pixel(0, 3, Color::WHITE);
        s.put_pixel(-1, 0, Color::WHITE);
        assert!(s.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(s.pixel(3, 0), None);
    }

    #[test]
    fn test_rejects_bad_layouts() {
        let mut buf = vec![0u8; 64];
        let mut layout = PixelLayout::XRGB8888;
        layout.green.length = 6;
        assert_eq!(
            Surface::new(&mut buf, SurfaceInfo::packed(2, 2, layout)).err(),
            Some(Error::UnsupportedChannel { name: "green", length: 6 })
        );

        let mut layout = PixelLayout::XRGB8888;
        layout.bits_per_pixel = 12;
        assert_eq!(
            Surface::new(&mut buf, SurfaceInfo::packed(2, 2, layout)).err(),
            Some(Error::UnsupportedDepth(12))
        );

        let mut layout = PixelLayout::RGB888;
        layout.red.offset = 24;
        assert_eq!(
            Surface::new(&mut buf, SurfaceInfo::packed(2, 2, layout)).err(),
            Some(Error::ChannelOutOfPixel { name: "red", offset: 24 })
        );

        let info = SurfaceInfo { width: 4, height: 2, stride: 8, layout: PixelLayout::XRGB8888 };
        assert_eq!(
            Surface::new(&mut buf, info).err(),
            Some(Error::StrideTooSmall { stride: 8, row_bytes: 16 })
        );

        assert_eq!(
            Surface::new(&mut buf, SurfaceInfo::packed(8, 8, PixelLayout::XRGB8888)).err(),
            Some(Error::BufferTooSmall { len: 64, required: 256 })
        );
    }

    #[test]
    fn test_oversized_geometry_is_rejected() {
        let mut buf = vec![0u8; 64];
        let info = SurfaceInfo { width: usize::MAX / 2, height: 2, stride: 16, layout: PixelLayout::XRGB8888 };
        assert_eq!(
            Surface::new(&mut buf, info).err(),
            Some(Error::StrideTooSmall { stride: 16, row_bytes: usize::MAX })
        );
        let info = SurfaceInfo { width: 2, height: usize::MAX / 4, stride: 8, layout: PixelLayout::XRGB8888 };
        assert_eq!(
            Surface::new(&mut buf, info).err(),
            Some(Error::BufferTooSmall { len: 64, required: usize::MAX })
        );
        let info = SurfaceInfo::packed(usize::MAX, 1, PixelLayout::RGB888);
        assert!(matches!(Surface::new(&mut buf, info), Err(Error::BufferTooSmall { .. })));
    }

    #[test]
    fn test_embedded_graphics_target() {
        let mut buf = vec![0u8; 4 * 4 * 4];
        let mut s = Surface::new(&mut buf, SurfaceInfo::packed(4, 4, PixelLayout::XRGB8888)).unwrap();
        Rectangle::new(Point::new(2, 2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
            .draw(&mut s)
            .unwrap();
        assert_eq!(s.pixel(3, 3), Some(Color::RED));
        assert_eq!(s.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(s.size(), Size::new(4, 4));
    }

    #[test]
    fn test_info_dump() {
        let text = format!("{}", SurfaceInfo::packed(800, 480, PixelLayout::ARGB8888));
        assert!(text.contains("xres: 800"));
        assert!(text.contains("stride : 3200"));
        assert!(text.contains("    offset   : 24"));
    }
}
