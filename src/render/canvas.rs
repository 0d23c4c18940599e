//! A surface bundled with its draw state

use core::fmt;

use crate::error::Error;
use crate::font::ascii::AsciiFont;
use crate::font::hangul::{FontFamily, HangulFont};
use crate::framebuffer::color::Color;
use crate::framebuffer::surface::Surface;
use crate::render::context::DrawContext;
use crate::render::draw;

/// Owns a `Surface` and the `DrawContext` used for everything drawn on it.
pub struct Canvas<'a, 'f> {
    surface: Surface<'a>,
    ctx: DrawContext<'f>,
}

impl<'a> Canvas<'a, 'static> {
    /// Canvas with the default draw state.
    pub fn new(surface: Surface<'a>) -> Self {
        Self::with_context(surface, DrawContext::new())
    }
}

impl<'a, 'f> Canvas<'a, 'f> {
    pub fn with_context(surface: Surface<'a>, ctx: DrawContext<'f>) -> Self {
        Self { surface, ctx }
    }

    pub fn surface(&self) -> &Surface<'a> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface<'a> {
        &mut self.surface
    }

    pub fn context(&self) -> &DrawContext<'f> {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut DrawContext<'f> {
        &mut self.ctx
    }

    pub fn into_parts(self) -> (Surface<'a>, DrawContext<'f>) {
        (self.surface, self.ctx)
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    pub fn set_fg_color(&mut self, color: impl Into<Color>) {
        self.ctx.set_fg_color(color);
    }

    pub fn set_bg_color(&mut self, color: impl Into<Color>) {
        self.ctx.set_bg_color(color);
    }

    pub fn set_line_width(&mut self, thickness: u32) {
        self.ctx.set_line_width(thickness);
    }

    pub fn set_font_scale(&mut self, scale: u32) {
        self.ctx.set_font_scale(scale);
    }

    pub fn set_font(&mut self, family: FontFamily) {
        self.ctx.set_font(family);
    }

    pub fn set_hangul_font(&mut self, font: &'f HangulFont) {
        self.ctx.set_hangul_font(font);
    }

    pub fn set_ascii_font(&mut self, font: &'f AsciiFont) {
        self.ctx.set_ascii_font(font);
    }

    pub fn draw_line(&mut self, x: i32, y: i32, w: u32) {
        draw::draw_line(&mut self.surface, &self.ctx, x, y, w);
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        draw::draw_rect(&mut self.surface, &self.ctx, x, y, w, h);
    }

    pub fn draw_fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        draw::draw_fill_rect(&mut self.surface, &self.ctx, x, y, w, h);
    }

    /// See [`draw::draw_text`]; usually called through `draw_text!`.
    pub fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        color: Option<Color>,
        args: fmt::Arguments<'_>,
    ) -> Result<i32, Error> {
        draw::draw_text(&mut self.surface, &self.ctx, x, y, color, args)
    }

    pub fn draw_str(&mut self, x: i32, y: i32, color: Option<Color>, text: &str) -> Result<i32, Error> {
        draw::draw_str(&mut self.surface, &self.ctx, x, y, color, text)
    }

    pub fn draw_text_bytes(
        &mut self,
        x: i32,
        y: i32,
        color: Option<Color>,
        text: &[u8],
    ) -> Result<i32, Error> {
        draw::draw_text_bytes(&mut self.surface, &self.ctx, x, y, color, text)
    }

    pub fn measure_text(&self, text: &[u8]) -> Result<u64, Error> {
        draw::measure_text(&self.ctx, text)
    }
}

/// Formatted text on a [`Canvas`](crate::render::Canvas):
/// `draw_text!(canvas, x, y, color, "fmt", args...)`, with `color` an
/// `Option<Color>`.
#[macro_export]
macro_rules! draw_text {
    ($canvas:expr, $x:expr, $y:expr, $color:expr, $($arg:tt)*) => {
        $canvas.draw_text($x, $y, $color, core::format_args!($($arg)*))
    };
}
