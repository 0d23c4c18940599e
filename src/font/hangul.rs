//! Hangul component tables in the 8x4x4 layout
//!
//! A family holds three tables of 16x16 component bitmaps:
//!
//! | table | groups | slots per group | glyphs |
//! |-------|--------|-----------------|--------|
//! | lead  | 8      | 20              | 160    |
//! | vowel | 4      | 22              | 88     |
//! | tail  | 4      | 28              | 112    |
//!
//! Slot 0 of every group is blank. The group a component is taken from
//! depends on its neighbours in the syllable (see `hangul::Jamo`).

use core::fmt;

use spin::Once;

use crate::error::Error;
use crate::font::jamo;

/// Bytes per stored component bitmap (16 rows x 2 bytes).
pub const GLYPH_STRIDE: usize = 32;
/// Width of a Hangul glyph in pixels.
pub const HANGUL_WIDTH: usize = 16;

pub const LEAD_GROUPS: usize = 8;
pub const LEAD_SLOTS: usize = 20;
pub const VOWEL_GROUPS: usize = 4;
pub const VOWEL_SLOTS: usize = 22;
pub const TAIL_GROUPS: usize = 4;
pub const TAIL_SLOTS: usize = 28;

const LEAD_GLYPHS: usize = LEAD_GROUPS * LEAD_SLOTS;
const VOWEL_GLYPHS: usize = VOWEL_GROUPS * VOWEL_SLOTS;
const TAIL_GLYPHS: usize = TAIL_GROUPS * TAIL_SLOTS;

/// Size of a raw 8x4x4 font file: lead, vowel and tail tables back to back.
pub const FONT_844_LEN: usize = (LEAD_GLYPHS + VOWEL_GLYPHS + TAIL_GLYPHS) * GLYPH_STRIDE;

pub type ComponentBitmap = [u8; GLYPH_STRIDE];

/// Which of the three component tables to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Lead,
    Vowel,
    Tail,
}

/// One Hangul font family.
#[derive(Clone)]
pub struct HangulFont {
    pub(crate) lead: [ComponentBitmap; LEAD_GLYPHS],
    pub(crate) vowel: [ComponentBitmap; VOWEL_GLYPHS],
    pub(crate) tail: [ComponentBitmap; TAIL_GLYPHS],
}

impl HangulFont {
    pub const fn blank() -> Self {
        Self {
            lead: [[0; GLYPH_STRIDE]; LEAD_GLYPHS],
            vowel: [[0; GLYPH_STRIDE]; VOWEL_GLYPHS],
            tail: [[0; GLYPH_STRIDE]; TAIL_GLYPHS],
        }
    }

    /// Load a raw 8x4x4 font image (`FONT_844_LEN` bytes).
    pub fn from_844(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != FONT_844_LEN {
            return Err(Error::FontSize { len: bytes.len(), expected: FONT_844_LEN });
        }
        let mut font = Self::blank();
        let mut chunks = bytes.chunks_exact(GLYPH_STRIDE);
        for slot in font
            .lead
            .iter_mut()
            .chain(font.vowel.iter_mut())
            .chain(font.tail.iter_mut())
        {
            if let Some(chunk) = chunks.next() {
                slot.copy_from_slice(chunk);
            }
        }
        Ok(font)
    }

    /// The generated tables for `family`, built on first use.
    pub fn builtin(family: FontFamily) -> &'static HangulFont {
        BUILTIN[family as usize].call_once(|| jamo::generate(family.style()))
    }

    /// Bitmap at byte `offset` into a component table.
    ///
    /// Offsets are multiples of `GLYPH_STRIDE`, the unit the composer's
    /// offset formulas produce.
    pub fn component(&self, part: Component, offset: usize) -> Option<&ComponentBitmap> {
        if offset % GLYPH_STRIDE != 0 {
            return None;
        }
        let index = offset / GLYPH_STRIDE;
        match part {
            Component::Lead => self.lead.get(index),
            Component::Vowel => self.vowel.get(index),
            Component::Tail => self.tail.get(index),
        }
    }

    /// Number of bytes in one component table.
    pub const fn table_len(part: Component) -> usize {
        match part {
            Component::Lead => LEAD_GLYPHS * GLYPH_STRIDE,
            Component::Vowel => VOWEL_GLYPHS * GLYPH_STRIDE,
            Component::Tail => TAIL_GLYPHS * GLYPH_STRIDE,
        }
    }
}

static BUILTIN: [Once<HangulFont>; FontFamily::COUNT] =
    [Once::new(), Once::new(), Once::new(), Once::new(), Once::new()];

/// Selectable Hangul typefaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FontFamily {
    /// Serif body text.
    #[default]
    Myeongjo = 0,
    /// Brush.
    Hanboot = 1,
    /// Gothic (sans).
    Hangodic = 2,
    /// Handwriting.
    Hanpil = 3,
    Hansoft = 4,
}

impl FontFamily {
    pub const COUNT: usize = 5;

    pub const ALL: [FontFamily; Self::COUNT] = [
        FontFamily::Myeongjo,
        FontFamily::Hanboot,
        FontFamily::Hangodic,
        FontFamily::Hanpil,
        FontFamily::Hansoft,
    ];

    /// Numeric selector as used on the command line; unknown values fall
    /// back to the default family.
    pub fn from_index(index: u8) -> Self {
        Self::ALL
            .get(index as usize)
            .copied()
            .unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Myeongjo => "MYEONGJO",
            FontFamily::Hanboot => "HANBOOT",
            FontFamily::Hangodic => "HANGODIC",
            FontFamily::Hanpil => "HANPIL",
            FontFamily::Hansoft => "HANSOFT",
        }
    }

    pub(crate) fn style(&self) -> jamo::Style {
        match self {
            FontFamily::Myeongjo => jamo::Style { bold_x: false, bold_y: false, slant: false },
            FontFamily::Hanboot => jamo::Style { bold_x: true, bold_y: true, slant: false },
            FontFamily::Hangodic => jamo::Style { bold_x: true, bold_y: false, slant: false },
            FontFamily::Hanpil => jamo::Style { bold_x: false, bold_y: false, slant: true },
            FontFamily::Hansoft => jamo::Style { bold_x: false, bold_y: true, slant: false },
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_from_844_order() {
        let mut raw = Vec::with_capacity(FONT_844_LEN);
        for i in 0..(FONT_844_LEN / GLYPH_STRIDE) {
            raw.extend_from_slice(&[(i % 251) as u8; GLYPH_STRIDE]);
        }
        let font = HangulFont::from_844(&raw).unwrap();
        assert_eq!(font.component(Component::Lead, 0).unwrap()[0], 0);
        assert_eq!(font.component(Component::Vowel, 0).unwrap()[0], 160);
        assert_eq!(font.component(Component::Tail, 2 * GLYPH_STRIDE).unwrap()[5], 250);
        assert_eq!(font.component(Component::Tail, 3 * GLYPH_STRIDE).unwrap()[5], 0);
    }

    #[test]
    fn test_from_844_rejects_size() {
        assert_eq!(
            HangulFont::from_844(&[0u8; 32]).err(),
            Some(Error::FontSize { len: 32, expected: 11_520 })
        );
    }

    #[test]
    fn test_component_bounds() {
        let font = HangulFont::blank();
        assert!(font.component(Component::Lead, 159 * GLYPH_STRIDE).is_some());
        assert!(font.component(Component::Lead, 160 * GLYPH_STRIDE).is_none());
        assert!(font.component(Component::Vowel, 88 * GLYPH_STRIDE).is_none());
        assert!(font.component(Component::Tail, 111 * GLYPH_STRIDE).is_some());
        assert!(font.component(Component::Tail, 17).is_none());
    }

    #[test]
    fn test_family_selector() {
        assert_eq!(FontFamily::from_index(2), FontFamily::Hangodic);
        assert_eq!(FontFamily::from_index(9), FontFamily::Myeongjo);
        assert_eq!(FontFamily::Hanpil.to_string(), "HANPIL");
    }

    #[test]
    fn test_builtin_families_differ() {
        let a = HangulFont::builtin(FontFamily::Myeongjo);
        let b = HangulFont::builtin(FontFamily::Hangodic);
        assert!(core::ptr::eq(a, HangulFont::builtin(FontFamily::Myeongjo)));
        assert_ne!(a.lead[1], b.lead[1]);
    }
}
