//! # Hangul Composer
//!
//! Builds a 16x16 glyph for a precomposed Hangul syllable out of up to three
//! component bitmaps.
//!
//! ## Pipeline
//!
//! 1. Decode the 3-byte UTF-8 sequence into a code point.
//! 2. Split the syllable index into lead (1-19), vowel (1-21) and tail (0-27).
//! 3. Pick a row group for each component from the lookup tables below. The
//!    lead's shape depends on the vowel, the vowel's on the lead, the tail's on
//!    the vowel; whether a tail follows changes the lead and vowel groups.
//! 4. Turn group + index into a byte offset into the font's component table.
//! 5. Copy the lead bitmap and OR in the vowel and, if present, the tail.
//!
//! The lookup tables encode the physical layout of 8x4x4 fonts and are kept
//! exactly as the fonts expect them.

use crate::error::Error;
use crate::font::hangul::{Component, ComponentBitmap, HangulFont, GLYPH_STRIDE};

/// First syllable of the Hangul syllable block (가).
pub const SYLLABLE_FIRST: u32 = 0xAC00;
/// Last syllable of the block (힣).
pub const SYLLABLE_LAST: u32 = 0xD7A3;

pub const LEAD_COUNT: u8 = 19;
pub const VOWEL_COUNT: u8 = 21;
/// Tail slots including 0 = no tail.
pub const TAIL_COUNT: u8 = 28;

/// Tail group, indexed by vowel.
pub(crate) const TAIL_GROUP_BY_VOWEL: [u8; 22] = [
    0, 0, 2, 0, 2, 1, 2, 1, 2, 3, 0, 2, 1, 3, 3, 1, 2, 1, 3, 3, 1, 1,
];

/// Vowel group, indexed by `lead * 2 + has_tail`.
pub(crate) const VOWEL_GROUP_BY_LEAD: [u8; 40] = [
    1, 3, 0, 2, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3,
    0, 2, 1, 3, 1, 3, 1, 3,
];

/// Lead group, indexed by `vowel * 2 + has_tail`.
pub(crate) const LEAD_GROUP_BY_VOWEL: [u8; 44] = [
    0, 0, 0, 5, 0, 5, 0, 5, 0, 5, 0, 5, 0, 5, 0, 5, 0, 5, 1, 6, 3, 7, 3, 7, 3, 7, 1, 6, 2, 6, 4, 7,
    4, 7, 4, 7, 2, 6, 1, 6, 3, 7, 0, 5,
];

/// Lead, vowel and tail indices of one syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jamo {
    lead: u8,
    vowel: u8,
    tail: u8,
}

/// Row group selected for each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Groups {
    pub lead: u8,
    pub vowel: u8,
    pub tail: u8,
}

/// Byte offsets into the three component tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offsets {
    pub lead: usize,
    pub vowel: usize,
    pub tail: usize,
}

impl Jamo {
    /// `lead` 1-19, `vowel` 1-21, `tail` 0-27.
    pub fn new(lead: u8, vowel: u8, tail: u8) -> Option<Self> {
        let valid = (1..=LEAD_COUNT).contains(&lead)
            && (1..=VOWEL_COUNT).contains(&vowel)
            && tail < TAIL_COUNT;
        valid.then_some(Self { lead, vowel, tail })
    }

    /// Decompose a syllable code point.
    pub fn from_code(code: u32) -> Result<Self, Error> {
        if !(SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&code) {
            return Err(Error::UnsupportedCodePoint(code));
        }
        let mut index = code - SYLLABLE_FIRST;
        let tail = (index % TAIL_COUNT as u32) as u8;
        index /= TAIL_COUNT as u32;
        let vowel = (index % VOWEL_COUNT as u32) as u8 + 1;
        let lead = (index / VOWEL_COUNT as u32) as u8 + 1;
        Ok(Self { lead, vowel, tail })
    }

    /// Inverse of `from_code`.
    pub fn code(&self) -> u32 {
        let index = ((self.lead as u32 - 1) * VOWEL_COUNT as u32 + (self.vowel as u32 - 1))
            * TAIL_COUNT as u32
            + self.tail as u32;
        SYLLABLE_FIRST + index
    }

    pub fn lead(&self) -> u8 {
        self.lead
    }

    pub fn vowel(&self) -> u8 {
        self.vowel
    }

    pub fn tail(&self) -> u8 {
        self.tail
    }

    pub fn has_tail(&self) -> bool {
        self.tail != 0
    }

    pub fn groups(&self) -> Groups {
        let t = self.has_tail() as usize;
        Groups {
            lead: LEAD_GROUP_BY_VOWEL[self.vowel as usize * 2 + t],
            vowel: VOWEL_GROUP_BY_LEAD[self.lead as usize * 2 + t],
            tail: TAIL_GROUP_BY_VOWEL[self.vowel as usize],
        }
    }

    /// Offsets as the font's physical stride encoding lays them out:
    /// 20 lead slots, 22 vowel slots and 28 tail slots per group.
    pub fn table_offsets(&self) -> Offsets {
        let g = self.groups();
        let (lg, vg, tg) = (g.lead as usize, g.vowel as usize, g.tail as usize);
        Offsets {
            lead: (lg * 16 + lg * 4 + self.lead as usize) * GLYPH_STRIDE,
            vowel: (vg * 22 + self.vowel as usize) * GLYPH_STRIDE,
            tail: (tg * 32 - tg * 4 + self.tail as usize) * GLYPH_STRIDE,
        }
    }
}

/// A composed 16x16 glyph, two bytes per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HangulGlyph([u8; GLYPH_STRIDE]);

impl HangulGlyph {
    pub const fn blank() -> Self {
        Self([0; GLYPH_STRIDE])
    }

    pub fn as_bytes(&self) -> &[u8; GLYPH_STRIDE] {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Whether the pixel at column `x`, row `y` is set.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= 16 || y >= 16 {
            return false;
        }
        self.0[y * 2 + x / 8] & (0x80 >> (x % 8)) != 0
    }

    fn make_image(&mut self, is_first: bool, src: &ComponentBitmap) {
        if is_first {
            self.0.copy_from_slice(src);
        } else {
            for (d, s) in self.0.iter_mut().zip(src) {
                *d |= s;
            }
        }
    }
}

/// Reassemble a 3-byte UTF-8 sequence (`1110xxxx 10xxxxxx 10xxxxxx`).
pub fn decode_utf8(b1: u8, b2: u8, b3: u8) -> Result<u32, Error> {
    if b1 & 0xF0 != 0xE0 {
        return Err(Error::InvalidLeadByte(b1));
    }
    for b in [b2, b3] {
        if b & 0xC0 != 0x80 {
            return Err(Error::InvalidContinuation(b));
        }
    }
    Ok(((b1 as u32 & 0x0F) << 12) | ((b2 as u32 & 0x3F) << 6) | (b3 as u32 & 0x3F))
}

/// Split a syllable code point into its jamo indices.
pub fn decompose(code: u32) -> Result<Jamo, Error> {
    Jamo::from_code(code)
}

/// Compose the syllable encoded by three UTF-8 bytes.
pub fn compose(font: &HangulFont, b1: u8, b2: u8, b3: u8) -> Result<HangulGlyph, Error> {
    let jamo = decompose(decode_utf8(b1, b2, b3)?)?;
    Ok(compose_jamo(font, jamo))
}

/// Compose a syllable given as a `char`.
pub fn compose_char(font: &HangulFont, ch: char) -> Result<HangulGlyph, Error> {
    Ok(compose_jamo(font, decompose(ch as u32)?))
}

/// Overlay the component bitmaps selected for `jamo`.
pub fn compose_jamo(font: &HangulFont, jamo: Jamo) -> HangulGlyph {
    let offsets = jamo.table_offsets();
    let blank = [0u8; GLYPH_STRIDE];
    let part = |c, off| font.component(c, off).unwrap_or(&blank);

    let mut glyph = HangulGlyph::blank();
    // Lead and vowel indices are never 0, so the lead is always the base.
    glyph.make_image(true, part(Component::Lead, offsets.lead));
    glyph.make_image(false, part(Component::Vowel, offsets.vowel));
    if jamo.has_tail() {
        glyph.make_image(false, part(Component::Tail, offsets.tail));
    }
    glyph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::hangul::FontFamily;

    fn utf8(ch: char) -> [u8; 3] {
        let mut buf = [0u8; 4];
        ch.encode_utf8(&mut buf);
        [buf[0], buf[1], buf[2]]
    }

    #[test]
    fn test_decompose_ga() {
        assert_eq!(decode_utf8(0xEA, 0xB0, 0x80), Ok(0xAC00));
        let jamo = Jamo::from_code(0xAC00).unwrap();
        assert_eq!((jamo.lead(), jamo.vowel(), jamo.tail()), (1, 1, 0));
        // Lead row group comes from entry 1*2+0, vowel row group from entry 1*2+0.
        assert_eq!(jamo.groups(), Groups { lead: LEAD_GROUP_BY_VOWEL[2], vowel: VOWEL_GROUP_BY_LEAD[2], tail: 0 });
        assert_eq!(jamo.groups(), Groups { lead: 0, vowel: 0, tail: 0 });
        assert_eq!(jamo.table_offsets(), Offsets { lead: 32, vowel: 32, tail: 0 });
    }

    #[test]
    fn test_ga_omits_tail() {
        let font = HangulFont::builtin(FontFamily::Myeongjo);
        let glyph = compose(font, 0xEA, 0xB0, 0x80).unwrap();
        let lead = font.component(Component::Lead, 32).unwrap();
        let vowel = font.component(Component::Vowel, 32).unwrap();
        let mut expected = [0u8; GLYPH_STRIDE];
        for i in 0..GLYPH_STRIDE {
            expected[i] = lead[i] | vowel[i];
        }
        assert_eq!(glyph.as_bytes(), &expected);
    }

    #[test]
    fn test_decompose_with_tail() {
        // 한 = ㅎ(19) ㅏ(1) ㄴ(4)
        let jamo = Jamo::from_code('한' as u32).unwrap();
        assert_eq!((jamo.lead(), jamo.vowel(), jamo.tail()), (19, 1, 4));
        assert_eq!(jamo.groups(), Groups { lead: 5, vowel: 3, tail: 0 });
        assert_eq!(
            jamo.table_offsets(),
            Offsets { lead: (5 * 20 + 19) * 32, vowel: (3 * 22 + 1) * 32, tail: 4 * 32 }
        );
        assert_eq!(jamo.code(), '한' as u32);
    }

    #[test]
    fn test_last_syllable() {
        let jamo = Jamo::from_code(SYLLABLE_LAST).unwrap();
        assert_eq!((jamo.lead(), jamo.vowel(), jamo.tail()), (19, 21, 27));
    }

    #[test]
    fn test_offsets_in_bounds() {
        for lead in 1..=LEAD_COUNT {
            for vowel in 1..=VOWEL_COUNT {
                for tail in [0, 1, TAIL_COUNT - 1] {
                    let jamo = Jamo::new(lead, vowel, tail).unwrap();
                    let o = jamo.table_offsets();
                    assert!(o.lead + GLYPH_STRIDE <= HangulFont::table_len(Component::Lead));
                    assert!(o.vowel + GLYPH_STRIDE <= HangulFont::table_len(Component::Vowel));
                    assert!(o.tail + GLYPH_STRIDE <= HangulFont::table_len(Component::Tail));
                }
            }
        }
    }

    #[test]
    fn test_every_syllable_composes() {
        for family in FontFamily::ALL {
            let font = HangulFont::builtin(family);
            for code in SYLLABLE_FIRST..=SYLLABLE_LAST {
                let ch = char::from_u32(code).unwrap();
                let [b1, b2, b3] = utf8(ch);
                let glyph = compose(font, b1, b2, b3).unwrap();
                assert!(!glyph.is_blank(), "U+{code:04X} in {family}");
                assert_eq!(compose(font, b1, b2, b3).unwrap(), glyph);
                assert_eq!(compose_char(font, ch).unwrap(), glyph);
                assert_eq!(Jamo::from_code(code).unwrap().code(), code);
            }
        }
    }

    #[test]
    fn test_switching_family_changes_glyph() {
        let a = compose_char(HangulFont::builtin(FontFamily::Myeongjo), '각').unwrap();
        let b = compose_char(HangulFont::builtin(FontFamily::Hanboot), '각').unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(decode_utf8(0xC3, 0xA9, 0x80), Err(Error::InvalidLeadByte(0xC3)));
        assert_eq!(decode_utf8(0xEA, 0x30, 0x80), Err(Error::InvalidContinuation(0x30)));
        // U+3042 (Hiragana) is well-formed UTF-8 but not a syllable.
        let [b1, b2, b3] = utf8('あ');
        let font = HangulFont::blank();
        assert_eq!(compose(&font, b1, b2, b3), Err(Error::UnsupportedCodePoint(0x3042)));
        assert_eq!(compose_char(&font, 'A'), Err(Error::UnsupportedCodePoint(0x41)));
        assert!(Jamo::new(0, 1, 0).is_none());
        assert!(Jamo::new(1, 22, 0).is_none());
        assert!(Jamo::new(1, 1, 28).is_none());
    }

    #[test]
    fn test_glyph_pixel() {
        let font = HangulFont::builtin(FontFamily::Myeongjo);
        let glyph = compose_char(font, '가').unwrap();
        let set = (0..16).flat_map(|y| (0..16).map(move |x| (x, y))).filter(|&(x, y)| glyph.pixel(x, y)).count();
        let ones: u32 = glyph.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(set as u32, ones);
        assert!(!glyph.pixel(16, 0));
    }
}
