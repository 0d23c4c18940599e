// Bounded formatting for text drawing
use core::fmt::{self, Write};

/// Capacity of the text buffer used by `draw_text`.
pub const TEXT_BUFFER_LEN: usize = 256;

/// A fixed-size buffer you can write formatted strings into.
///
/// Output past the end is dropped at a character boundary, so the contents
/// always stay valid UTF-8 and never end inside a Hangul sequence.
pub struct FmtBuf<'a> {
    buf: &'a mut [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> FmtBuf<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        FmtBuf { buf, pos: 0, truncated: false }
    }

    pub fn as_str(&self) -> &str {
        // Only whole `str` prefixes ending on a char boundary are ever copied in.
        core::str::from_utf8(&self.buf[..self.pos]).unwrap_or_default()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<'a> Write for FmtBuf<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let room = self.buf.len() - self.pos;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        if take < s.len() {
            self.truncated = true;
        }
        self.buf[self.pos..self.pos + take].copy_from_slice(&s.as_bytes()[..take]);
        self.pos += take;
        Ok(())
    }
}

/// Format `args` into `buf`, truncating what does not fit.
pub fn format_to<'a>(buf: &'a mut [u8], args: fmt::Arguments<'_>) -> &'a str {
    let mut f = FmtBuf::new(buf);
    let _ = f.write_fmt(args);
    let len = f.pos;
    core::str::from_utf8(&buf[..len]).unwrap_or_default()
}
