//! Draw state shared by the primitives and the text renderer

use crate::font::ascii::AsciiFont;
use crate::font::hangul::{FontFamily, HangulFont};
use crate::framebuffer::color::Color;

/// Colors, stroke and font settings for subsequent drawing calls.
///
/// Font tables are borrowed; the built-in ones are `'static`, so a context
/// built with `new()` is `DrawContext<'static>` until a caller-loaded font is
/// installed.
#[derive(Clone)]
pub struct DrawContext<'f> {
    fg: Color,
    bg: Color,
    line_thickness: u32,
    font_scale: u32,
    family: FontFamily,
    ascii: &'f AsciiFont,
    hangul: &'f HangulFont,
}

impl<'f> DrawContext<'f> {
    /// Black on white, 1 pixel lines, unscaled Myeongjo text.
    pub fn new() -> Self {
        let family = FontFamily::default();
        Self {
            fg: Color::BLACK,
            bg: Color::WHITE,
            line_thickness: 1,
            font_scale: 1,
            family,
            ascii: AsciiFont::builtin(),
            hangul: HangulFont::builtin(family),
        }
    }

    pub fn set_fg_color(&mut self, color: impl Into<Color>) {
        self.fg = color.into();
    }

    pub fn set_bg_color(&mut self, color: impl Into<Color>) {
        self.bg = color.into();
    }

    /// Outline thickness for `draw_rect`. Not clamped: a thickness of half the
    /// rectangle or more fills it.
    pub fn set_line_width(&mut self, thickness: u32) {
        self.line_thickness = thickness;
    }

    /// Integer glyph magnification. 0 draws nothing.
    pub fn set_font_scale(&mut self, scale: u32) {
        self.font_scale = scale;
    }

    /// Switch to a built-in Hangul family.
    pub fn set_font(&mut self, family: FontFamily) {
        self.family = family;
        self.hangul = HangulFont::builtin(family);
    }

    /// Use caller-loaded Hangul component tables, e.g. from `HangulFont::from_844`.
    pub fn set_hangul_font(&mut self, font: &'f HangulFont) {
        self.hangul = font;
    }

    pub fn set_ascii_font(&mut self, font: &'f AsciiFont) {
        self.ascii = font;
    }

    pub fn fg_color(&self) -> Color {
        self.fg
    }

    pub fn bg_color(&self) -> Color {
        self.bg
    }

    pub fn line_width(&self) -> u32 {
        self.line_thickness
    }

    pub fn font_scale(&self) -> u32 {
        self.font_scale
    }

    /// Last family selected with `set_font`.
    pub fn font(&self) -> FontFamily {
        self.family
    }

    pub fn ascii_font(&self) -> &'f AsciiFont {
        self.ascii
    }

    pub fn hangul_font(&self) -> &'f HangulFont {
        self.hangul
    }
}

impl Default for DrawContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}
