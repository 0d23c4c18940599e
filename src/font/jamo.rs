//! Stroke-drawn jamo for the built-in Hangul families
//!
//! Every component is a handful of straight strokes. Consonants are described
//! on an 8x8 unit grid and fitted into the box their group reserves inside the
//! 16x16 cell; vowels are described directly in cell coordinates. A family's
//! `Style` then thickens or slants the strokes.

use crate::font::hangul::{
    ComponentBitmap, HangulFont, GLYPH_STRIDE, LEAD_GROUPS, LEAD_SLOTS, TAIL_GROUPS, TAIL_SLOTS,
    VOWEL_GROUPS, VOWEL_SLOTS,
};

/// Stroke treatment applied to every component of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Style {
    pub bold_x: bool,
    pub bold_y: bool,
    pub slant: bool,
}

/// A straight stroke `(x0, y0, x1, y1)`.
type Seg = (u8, u8, u8, u8);

// =============================================================================
// CELL
// =============================================================================

/// 16x16 scratch bitmap; bit 15 of a row is the leftmost pixel.
#[derive(Clone, Copy, Default)]
struct Cell([u16; 16]);

impl Cell {
    fn set(&mut self, x: i32, y: i32) {
        if (0..16).contains(&x) && (0..16).contains(&y) {
            self.0[y as usize] |= 0x8000 >> x;
        }
    }

    /// Bresenham line, both end points included.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y, mut err) = (x0, y0, dx + dy);
        loop {
            self.set(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn apply(&mut self, style: Style) {
        if style.bold_y {
            for y in (1..16).rev() {
                self.0[y] |= self.0[y - 1];
            }
        }
        if style.bold_x {
            for row in self.0.iter_mut() {
                *row |= *row >> 1;
            }
        }
        if style.slant {
            for row in self.0[..8].iter_mut() {
                *row >>= 1;
            }
        }
    }

    fn to_bitmap(self) -> ComponentBitmap {
        let mut out = [0u8; GLYPH_STRIDE];
        for (bytes, row) in out.chunks_exact_mut(2).zip(self.0) {
            bytes.copy_from_slice(&row.to_be_bytes());
        }
        out
    }
}

// =============================================================================
// CONSONANTS
// =============================================================================

/// Box inside the cell that a consonant is fitted to.
#[derive(Clone, Copy)]
struct Area {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Area {
    const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Map a 0..=7 grid coordinate into the box.
    fn map(&self, ux: u8, uy: u8) -> (i32, i32) {
        let ux = ux as i32;
        let uy = uy as i32;
        (
            self.x + (ux * (self.w - 1) + 3) / 7,
            self.y + (uy * (self.h - 1) + 3) / 7,
        )
    }

    fn halves(&self) -> (Area, Area) {
        let half = (self.w - 1) / 2;
        (
            Area::new(self.x, self.y, half, self.h),
            Area::new(self.x + self.w - half, self.y, half, self.h),
        )
    }
}

const G: &[Seg] = &[(0, 0, 7, 0), (7, 0, 7, 7)];
const N: &[Seg] = &[(0, 0, 0, 7), (0, 7, 7, 7)];
const D: &[Seg] = &[(0, 0, 7, 0), (0, 0, 0, 7), (0, 7, 7, 7)];
const R: &[Seg] = &[(0, 0, 7, 0), (7, 0, 7, 3), (0, 3, 7, 3), (0, 3, 0, 7), (0, 7, 7, 7)];
const M: &[Seg] = &[(0, 0, 7, 0), (7, 0, 7, 7), (0, 7, 7, 7), (0, 0, 0, 7)];
const B: &[Seg] = &[(0, 0, 0, 7), (7, 0, 7, 7), (0, 3, 7, 3), (0, 7, 7, 7)];
const S: &[Seg] = &[(3, 0, 0, 7), (3, 0, 7, 7)];
const NG: &[Seg] = &[
    (2, 0, 5, 0),
    (5, 0, 7, 2),
    (7, 2, 7, 5),
    (7, 5, 5, 7),
    (5, 7, 2, 7),
    (2, 7, 0, 5),
    (0, 5, 0, 2),
    (0, 2, 2, 0),
];
const J: &[Seg] = &[(0, 0, 7, 0), (3, 0, 0, 7), (3, 0, 7, 7)];
const CH: &[Seg] = &[(2, 0, 5, 0), (0, 2, 7, 2), (3, 2, 0, 7), (3, 2, 7, 7)];
const K: &[Seg] = &[(0, 0, 7, 0), (7, 0, 7, 7), (0, 3, 7, 3)];
const T: &[Seg] = &[(0, 0, 7, 0), (0, 0, 0, 7), (0, 7, 7, 7), (0, 3, 6, 3)];
const P: &[Seg] = &[(0, 0, 7, 0), (0, 7, 7, 7), (2, 0, 2, 7), (5, 0, 5, 7)];
const H: &[Seg] = &[(2, 0, 5, 0), (0, 2, 7, 2), (2, 4, 5, 4), (5, 4, 5, 7), (5, 7, 2, 7), (2, 7, 2, 4)];

/// A consonant, or a pair written side by side (doubled or clustered).
#[derive(Clone, Copy)]
enum Shape {
    One(&'static [Seg]),
    Two(&'static [Seg], &'static [Seg]),
}

use Shape::{One, Two};

/// ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
const LEADS: [Shape; 19] = [
    One(G), Two(G, G), One(N), One(D), Two(D, D), One(R), One(M), One(B), Two(B, B),
    One(S), Two(S, S), One(NG), One(J), Two(J, J), One(CH), One(K), One(T), One(P), One(H),
];

/// ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ
const TAILS: [Shape; 27] = [
    One(G), Two(G, G), Two(G, S), One(N), Two(N, J), Two(N, H), One(D), One(R), Two(R, G),
    Two(R, M), Two(R, B), Two(R, S), Two(R, T), Two(R, P), Two(R, H), One(M), One(B), Two(B, S),
    One(S), Two(S, S), One(NG), One(J), One(CH), One(K), One(T), One(P), One(H),
];

/// Lead boxes, one per lead group.
const LEAD_AREAS: [Area; LEAD_GROUPS] = [
    Area::new(1, 2, 9, 12), // beside a vertical vowel
    Area::new(3, 1, 10, 8), // above ㅗ ㅛ ㅡ
    Area::new(3, 0, 10, 7), // above ㅜ ㅠ
    Area::new(1, 1, 9, 8),  // ㅘ ㅙ ㅚ ㅢ
    Area::new(1, 0, 9, 7),  // ㅝ ㅞ ㅟ
    Area::new(1, 1, 9, 8),  // vertical vowel + tail
    Area::new(3, 0, 10, 5), // horizontal vowel + tail
    Area::new(1, 0, 9, 5),  // compound vowel + tail
];

/// Tail boxes, one per tail group.
const TAIL_AREAS: [Area; TAIL_GROUPS] = [
    Area::new(2, 11, 10, 5),
    Area::new(3, 11, 9, 5),
    Area::new(1, 11, 11, 5),
    Area::new(3, 11, 10, 5),
];

fn draw_segs(cell: &mut Cell, segs: &[Seg], area: Area) {
    for &(x0, y0, x1, y1) in segs {
        let (ax, ay) = area.map(x0, y0);
        let (bx, by) = area.map(x1, y1);
        cell.line(ax, ay, bx, by);
    }
}

fn draw_shape(cell: &mut Cell, shape: Shape, area: Area) {
    match shape {
        One(segs) => draw_segs(cell, segs, area),
        Two(left, right) => {
            let (l, r) = area.halves();
            draw_segs(cell, left, l);
            draw_segs(cell, right, r);
        }
    }
}

// =============================================================================
// VOWELS
// =============================================================================

/// ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ, laid out for a
/// syllable without a tail.
const VOWELS: [&[Seg]; 21] = [
    &[(12, 1, 12, 14), (13, 7, 14, 7)],
    &[(11, 1, 11, 14), (14, 1, 14, 14), (12, 7, 13, 7)],
    &[(12, 1, 12, 14), (13, 5, 14, 5), (13, 9, 14, 9)],
    &[(11, 1, 11, 14), (14, 1, 14, 14), (12, 5, 13, 5), (12, 9, 13, 9)],
    &[(13, 1, 13, 14), (11, 7, 12, 7)],
    &[(12, 1, 12, 14), (14, 1, 14, 14), (10, 7, 11, 7)],
    &[(13, 1, 13, 14), (11, 5, 12, 5), (11, 9, 12, 9)],
    &[(12, 1, 12, 14), (14, 1, 14, 14), (10, 5, 11, 5), (10, 9, 11, 9)],
    &[(1, 11, 14, 11), (7, 9, 7, 11)],
    &[(1, 11, 10, 11), (5, 9, 5, 11), (12, 1, 12, 14), (13, 7, 14, 7)],
    &[(1, 11, 9, 11), (5, 9, 5, 11), (11, 1, 11, 14), (14, 1, 14, 14), (12, 7, 13, 7)],
    &[(1, 11, 10, 11), (5, 9, 5, 11), (13, 1, 13, 14)],
    &[(1, 11, 14, 11), (5, 9, 5, 11), (10, 9, 10, 11)],
    &[(1, 8, 14, 8), (8, 8, 8, 12)],
    &[(1, 8, 9, 8), (5, 8, 5, 12), (13, 1, 13, 14), (11, 10, 12, 10)],
    &[(1, 8, 8, 8), (4, 8, 4, 12), (12, 1, 12, 14), (14, 1, 14, 14), (10, 10, 11, 10)],
    &[(1, 8, 10, 8), (5, 8, 5, 12), (13, 1, 13, 14)],
    &[(1, 8, 14, 8), (5, 8, 5, 12), (10, 8, 10, 12)],
    &[(1, 11, 14, 11)],
    &[(1, 11, 10, 11), (13, 1, 13, 14)],
    &[(12, 1, 12, 14)],
];

/// Vowel groups: 0/1 without a tail, 2/3 with one; even groups follow ㄱ or ㅋ,
/// whose long right stroke pushes vertical strokes one column over.
fn draw_vowel(cell: &mut Cell, segs: &[Seg], group: usize) {
    let with_tail = group >= 2;
    let after_g = group % 2 == 0;
    let place = |x: u8, y: u8| {
        let x = x as i32;
        let y = y as i32;
        let x = if after_g && x >= 11 { (x + 1).min(15) } else { x };
        let y = if with_tail { y * 10 / 15 } else { y };
        (x, y)
    };
    for &(x0, y0, x1, y1) in segs {
        let (ax, ay) = place(x0, y0);
        let (bx, by) = place(x1, y1);
        cell.line(ax, ay, bx, by);
    }
}

// =============================================================================
// TABLES
// =============================================================================

fn render(style: Style, draw: impl FnOnce(&mut Cell)) -> ComponentBitmap {
    let mut cell = Cell::default();
    draw(&mut cell);
    cell.apply(style);
    cell.to_bitmap()
}

/// Build a full 8x4x4 family. Slot 0 of each group stays blank.
pub(crate) fn generate(style: Style) -> HangulFont {
    let mut font = HangulFont::blank();
    for (group, area) in LEAD_AREAS.iter().enumerate() {
        for (i, shape) in LEADS.iter().enumerate() {
            font.lead[group * LEAD_SLOTS + i + 1] =
                render(style, |c| draw_shape(c, *shape, *area));
        }
    }
    for group in 0..VOWEL_GROUPS {
        for (i, segs) in VOWELS.iter().enumerate() {
            font.vowel[group * VOWEL_SLOTS + i + 1] =
                render(style, |c| draw_vowel(c, segs, group));
        }
    }
    for (group, area) in TAIL_AREAS.iter().enumerate() {
        for (i, shape) in TAILS.iter().enumerate() {
            font.tail[group * TAIL_SLOTS + i + 1] =
                render(style, |c| draw_shape(c, *shape, *area));
        }
    }
    font
}
