//! The `.raw` image container.
//!
//! A `.raw` file is a fixed 20-byte little-endian header followed by one byte
//! per pixel:
//!
//! | offset | field          |
//! |--------|----------------|
//! | 0x00   | magic `"BPRW"` |
//! | 0x04   | width          |
//! | 0x08   | height         |
//! | 0x0C   | frames         |
//! | 0x10   | bits per pixel |
//!
//! Pixel values occupy the low `bits_per_pixel` bits of each byte. An image
//! is "linear" when its height is 1; some operations (pixel reorder) only
//! accept linear images.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod header;

pub use header::{RawHeader, RAW_HEADER_SIZE, RAW_MAGIC};

use alloc::vec::Vec;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RawFormatError {
    /// Too short to even hold the header.
    #[error("buffer of {len} bytes is too short for the {RAW_HEADER_SIZE} byte header")]
    TooShort { len: usize },

    /// The magic does not identify a .raw image.
    #[error("not a raw image: bad magic {found:#010x}")]
    BadMagic { found: u32 },

    /// Declared pixel depth a single byte cannot carry.
    #[error("bit depth {0} is outside the supported 1..=8 range")]
    BadBitDepth(u32),

    /// Header geometry disagrees with the actual payload size.
    #[error("header declares {expected} pixel bytes but {actual} are present")]
    PayloadSizeMismatch { expected: u64, actual: u64 },
}

/// Parse a `.raw` buffer into its header and pixel payload.
///
/// The payload length must match the header geometry exactly.
pub fn parse_raw(data: &[u8]) -> Result<(RawHeader, &[u8]), RawFormatError> {
    let header = RawHeader::parse(data)?;
    let payload = &data[RAW_HEADER_SIZE..];
    let expected = header.pixel_count();
    if payload.len() as u64 != expected {
        return Err(RawFormatError::PayloadSizeMismatch {
            expected,
            actual: payload.len() as u64,
        });
    }
    Ok((header, payload))
}

/// Encode a header plus pixel payload into a `.raw` byte stream.
pub fn encode_raw(header: &RawHeader, pixels: &[u8]) -> Result<Vec<u8>, RawFormatError> {
    if pixels.len() as u64 != header.pixel_count() {
        return Err(RawFormatError::PayloadSizeMismatch {
            expected: header.pixel_count(),
            actual: pixels.len() as u64,
        });
    }
    let mut out = Vec::with_capacity(RAW_HEADER_SIZE + pixels.len());
    header.write_to(&mut out);
    out.extend_from_slice(pixels);
    Ok(out)
}
