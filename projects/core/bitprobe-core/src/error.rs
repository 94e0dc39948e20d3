//! Error types for the core bit primitives.

use thiserror::Error;

/// A bit-indexed read reached past the end of the buffer.
///
/// Callers typically surface this as a size-mismatch condition; the read
/// itself never touches memory outside the buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitRangeError {
    /// Requested bit range exceeds the available bit length.
    #[error("bit range {start}..{end} exceeds the {available} bits available")]
    OutOfRange {
        start: u64,
        end: u64,
        available: u64,
    },
}

/// A stream layout does not fit the buffer it was applied to.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Declared prologue + blocks exceed the total bit length of the source.
    ///
    /// `required` is kept as a u128 so that layouts whose totals overflow
    /// u64 arithmetic still report the mismatch instead of wrapping.
    #[error("layout requires {required} bits but only {available} are available")]
    SizeMismatch { required: u128, available: u64 },
}

/// Bit-text packing hit a character that is neither a bit symbol nor a separator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    #[error("unrecognized symbol {symbol:?} at byte offset {position}")]
    UnrecognizedSymbol { symbol: char, position: usize },
}
