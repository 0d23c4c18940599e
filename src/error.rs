//! Error type shared by every fallible operation in the crate.

use core::fmt;

/// Failure reported instead of writing garbage into the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Bits per pixel is zero or not a multiple of 8.
    UnsupportedDepth(u32),
    /// A color channel is not 8 bits wide (alpha may also be 0).
    UnsupportedChannel { name: &'static str, length: u32 },
    /// A channel's byte position falls outside the pixel.
    ChannelOutOfPixel { name: &'static str, offset: u32 },
    /// Stride shorter than one row of pixels.
    StrideTooSmall { stride: usize, row_bytes: usize },
    /// Buffer shorter than the geometry requires.
    BufferTooSmall { len: usize, required: usize },
    /// Leading byte of a 3-byte sequence is not `1110xxxx`.
    InvalidLeadByte(u8),
    /// A continuation byte is not `10xxxxxx`.
    InvalidContinuation(u8),
    /// The text ends in the middle of a multi-byte sequence.
    TruncatedSequence,
    /// Code point outside ASCII and the Hangul syllable block.
    UnsupportedCodePoint(u32),
    /// Monochrome bitmap length does not match its declared width.
    BitmapSize { len: usize, width_px: usize },
    /// Raw font table has the wrong size.
    FontSize { len: usize, expected: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedDepth(bpp) => write!(f, "unsupported depth: {} bpp", bpp),
            Error::UnsupportedChannel { name, length } => {
                write!(f, "{} channel is {} bits wide, expected 8", name, length)
            }
            Error::ChannelOutOfPixel { name, offset } => {
                write!(f, "{} channel offset {} lies outside the pixel", name, offset)
            }
            Error::StrideTooSmall { stride, row_bytes } => {
                write!(f, "stride {} is shorter than a row ({} bytes)", stride, row_bytes)
            }
            Error::BufferTooSmall { len, required } => {
                write!(f, "buffer holds {} bytes, geometry needs {}", len, required)
            }
            Error::InvalidLeadByte(b) => write!(f, "invalid lead byte {:#04x}", b),
            Error::InvalidContinuation(b) => write!(f, "invalid continuation byte {:#04x}", b),
            Error::TruncatedSequence => write!(f, "text ends inside a multi-byte sequence"),
            Error::UnsupportedCodePoint(cp) => write!(f, "unsupported code point U+{:04X}", cp),
            Error::BitmapSize { len, width_px } => {
                write!(f, "{}-byte bitmap does not match width {}", len, width_px)
            }
            Error::FontSize { len, expected } => {
                write!(f, "font table is {} bytes, expected {}", len, expected)
            }
        }
    }
}
