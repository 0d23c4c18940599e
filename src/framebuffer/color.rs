//! Color representation and channel extraction
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// 24-bit RGB color. Surfaces with an alpha channel always receive full opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // https://www.rapidtables.com/web/color/RGB_Color.html
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const LIME: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const GREEN: Color = Color::new(0, 128, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const SILVER: Color = Color::new(192, 192, 192);
    pub const DIM_GRAY: Color = Color::new(105, 105, 105);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const DARK_GRAY: Color = Color::new(169, 169, 169);
    pub const LIGHT_GRAY: Color = Color::new(211, 211, 211);
    pub const MAROON: Color = Color::new(128, 0, 0);
    pub const OLIVE: Color = Color::new(128, 128, 0);
    pub const PURPLE: Color = Color::new(128, 0, 128);
    pub const TEAL: Color = Color::new(0, 128, 128);
    pub const NAVY: Color = Color::new(0, 0, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a `0xRRGGBB` value; bits above 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Color::from_hex(hex)
    }
}

impl From<Rgb888> for Color {
    fn from(c: Rgb888) -> Self {
        Color::new(c.r(), c.g(), c.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels() {
        let c = Color::from_hex(0x12_34_56);
        assert_eq!((c.r, c.g, c.b), (0x12, 0x34, 0x56));
        assert_eq!(c.to_hex(), 0x123456);
        assert_eq!(Color::from_hex(0xFF00_0080), Color::NAVY);
        assert_eq!(Color::OLIVE.to_bytes(), [128, 128, 0]);
    }

    #[test]
    fn test_rgb888_conversion() {
        let c = Color::TEAL;
        assert_eq!(Color::from(c.to_rgb888()), c);
    }
}
