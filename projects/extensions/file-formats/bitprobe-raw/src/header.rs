//! The fixed .raw image header.

use crate::RawFormatError;
use alloc::vec::Vec;
use endian_writer::{EndianReader, LittleEndianReader};

/// `"BPRW"` as a little-endian u32.
pub const RAW_MAGIC: u32 = u32::from_le_bytes(*b"BPRW");

/// Size of the header in bytes.
pub const RAW_HEADER_SIZE: usize = 20;

const WIDTH_OFFSET: usize = 0x04;
const HEIGHT_OFFSET: usize = 0x08;
const FRAMES_OFFSET: usize = 0x0C;
const BIT_DEPTH_OFFSET: usize = 0x10;

/// Geometry record prefixed to every `.raw` image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub bits_per_pixel: u32,
}

impl RawHeader {
    /// Total pixel bytes the header describes.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.frames as u64
    }

    /// A linear image is a single row of pixels per frame.
    pub fn is_linear(&self) -> bool {
        self.height == 1
    }

    /// Parse the header from the front of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, RawFormatError> {
        if data.len() < RAW_HEADER_SIZE {
            return Err(RawFormatError::TooShort { len: data.len() });
        }

        // SAFETY: data.len() >= RAW_HEADER_SIZE (20), all offsets below are
        // within the first 20 bytes.
        let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
        let magic = unsafe { reader.read_u32_at(0) };
        if magic != RAW_MAGIC {
            return Err(RawFormatError::BadMagic { found: magic });
        }

        let width = unsafe { reader.read_u32_at(WIDTH_OFFSET as isize) };
        let height = unsafe { reader.read_u32_at(HEIGHT_OFFSET as isize) };
        let frames = unsafe { reader.read_u32_at(FRAMES_OFFSET as isize) };
        let bits_per_pixel = unsafe { reader.read_u32_at(BIT_DEPTH_OFFSET as isize) };
        if !(1..=8).contains(&bits_per_pixel) {
            return Err(RawFormatError::BadBitDepth(bits_per_pixel));
        }

        Ok(Self {
            width,
            height,
            frames,
            bits_per_pixel,
        })
    }

    /// Append the encoded header to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&RAW_MAGIC.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.frames.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
    }
}
