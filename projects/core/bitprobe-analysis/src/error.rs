//! Error type shared by the emitters.

use alloc::string::String;
use bitprobe_core::{BitRangeError, LayoutError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A bit read reached past the end of the source.
    #[error(transparent)]
    Range(#[from] BitRangeError),

    /// The declared layout exceeds the actual source size.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Row widths of zero cannot produce output rows.
    #[error("row width must be greater than zero")]
    ZeroRowWidth,

    /// Pixel depth outside the 1..=8 bits a single output byte can carry.
    #[error("bit depth {0} is outside the supported 1..=8 range")]
    BitDepthOutOfRange(u32),

    /// Byte-level skip larger than the file itself.
    #[error("skip offset {skip} exceeds the {len} bytes available")]
    SkipBeyondEnd { skip: usize, len: usize },

    /// A computed image dimension does not fit the 32-bit header fields.
    #[error("image geometry does not fit a 32-bit dimension")]
    GeometryTooLarge,

    /// An entry of a reorder index list failed to parse as a number.
    #[error("index list entry {token:?} is not a number")]
    BadIndexToken { token: String },

    /// A reorder index points outside the pixel buffer.
    #[error("pixel index {index} is outside the {len} pixels available")]
    IndexOutOfRange { index: usize, len: usize },
}
