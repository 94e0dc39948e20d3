//! Bit groups reinterpreted as pixel rows.

use crate::error::AnalysisError;
use alloc::vec::Vec;
use bitprobe_core::{BitOrder, BitReader, StreamLayout};

/// Pixel data extracted from a segmented bit stream, one frame per block.
///
/// `bit_depth` reflects the depth of the stored values: the source depth, or
/// 8 when the pixels were rescaled to the full 0-255 range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelPlane {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub bit_depth: u32,
    pub pixels: Vec<u8>,
}

/// Map each `bit_depth`-bit group of every block body to one pixel value.
///
/// Pixels are laid out in rows of `row_width`; each block contributes one
/// frame of identical geometry. Trailing body bits that do not fill a whole
/// row are dropped, which is what makes row-width sweeps over arbitrary body
/// sizes possible. With `scale` set, values are rescaled from `0..2^depth-1`
/// to the full 0-255 range.
pub fn extract_pixels(
    data: &[u8],
    layout: &StreamLayout,
    row_width: u32,
    bit_depth: u32,
    order: BitOrder,
    invert: bool,
    scale: bool,
) -> Result<PixelPlane, AnalysisError> {
    if row_width == 0 {
        return Err(AnalysisError::ZeroRowWidth);
    }
    if !(1..=8).contains(&bit_depth) {
        return Err(AnalysisError::BitDepthOutOfRange(bit_depth));
    }

    let reader = BitReader::new(data, order, invert);
    let segments = layout.segments(reader.bit_len())?;

    let pixels_per_block = layout.body_bits / bit_depth as u64;
    let rows_per_block = pixels_per_block / row_width as u64;
    let height = u32::try_from(rows_per_block).map_err(|_| AnalysisError::GeometryTooLarge)?;
    let frames = u32::try_from(layout.block_count).map_err(|_| AnalysisError::GeometryTooLarge)?;

    let pixel_count = rows_per_block * row_width as u64 * layout.block_count;
    let mut pixels =
        Vec::with_capacity(usize::try_from(pixel_count).map_err(|_| AnalysisError::GeometryTooLarge)?);
    for segment in segments {
        for pixel in 0..rows_per_block * row_width as u64 {
            let start = segment.body.start + pixel * bit_depth as u64;
            let value = reader.read_value(start, bit_depth)? as u8;
            pixels.push(if scale {
                scale_to_full_range(value, bit_depth)
            } else {
                value
            });
        }
    }

    Ok(PixelPlane {
        width: row_width,
        height,
        frames,
        bit_depth: if scale { 8 } else { bit_depth },
        pixels,
    })
}

/// Rescale a `depth`-bit value to 0-255.
#[inline]
pub(crate) fn scale_to_full_range(value: u8, depth: u32) -> u8 {
    let max = (1u32 << depth) - 1;
    (value as u32 * 255 / max) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn body_layout(body_bits: u64, block_count: u64) -> StreamLayout {
        StreamLayout {
            prologue_bits: 0,
            header_bits: 0,
            body_bits,
            block_count,
        }
    }

    #[test]
    fn depth_one_splits_body_into_rows() {
        // 1010101011110000
        let data = [0xAA, 0xF0];
        let plane = extract_pixels(
            &data,
            &body_layout(16, 1),
            8,
            1,
            BitOrder::MsbFirst,
            false,
            false,
        )
        .unwrap();
        assert_eq!((plane.width, plane.height, plane.frames), (8, 2, 1));
        assert_eq!(
            plane.pixels,
            [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn scale_maps_depth_one_to_full_range() {
        let data = [0xAA, 0xF0];
        let plane = extract_pixels(
            &data,
            &body_layout(16, 1),
            8,
            1,
            BitOrder::MsbFirst,
            false,
            true,
        )
        .unwrap();
        assert_eq!(plane.bit_depth, 8);
        assert_eq!(&plane.pixels[..4], [255, 0, 255, 0]);
    }

    #[test]
    fn multi_bit_groups_become_pixel_values() {
        // 11 10 01 00 -> 3 2 1 0
        let data = [0b1110_0100];
        let plane = extract_pixels(
            &data,
            &body_layout(8, 1),
            4,
            2,
            BitOrder::MsbFirst,
            false,
            false,
        )
        .unwrap();
        assert_eq!(plane.pixels, [3, 2, 1, 0]);
    }

    #[test]
    fn blocks_become_frames() {
        let data = [0xFF, 0x00];
        let plane = extract_pixels(
            &data,
            &body_layout(8, 2),
            4,
            1,
            BitOrder::MsbFirst,
            false,
            false,
        )
        .unwrap();
        assert_eq!(plane.frames, 2);
        assert_eq!(plane.height, 2);
        assert_eq!(plane.pixels.len(), 16);
        assert!(plane.pixels[..8].iter().all(|&p| p == 1));
        assert!(plane.pixels[8..].iter().all(|&p| p == 0));
    }

    #[test]
    fn trailing_bits_that_do_not_fill_a_row_are_dropped() {
        // 10 bits of body, rows of 4 -> 2 rows, 2 bits dropped
        let data = [0xFF, 0xC0];
        let plane = extract_pixels(
            &data,
            &body_layout(10, 1),
            4,
            1,
            BitOrder::MsbFirst,
            false,
            false,
        )
        .unwrap();
        assert_eq!(plane.height, 2);
        assert_eq!(plane.pixels.len(), 8);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(8, 0)]
    #[case(8, 9)]
    fn invalid_geometry_is_rejected(#[case] row_width: u32, #[case] bit_depth: u32) {
        let data = [0u8; 4];
        assert!(extract_pixels(
            &data,
            &body_layout(32, 1),
            row_width,
            bit_depth,
            BitOrder::MsbFirst,
            false,
            false,
        )
        .is_err());
    }

    #[rstest]
    #[case(1, 1, 255)]
    #[case(0, 3, 0)]
    #[case(7, 3, 255)]
    #[case(3, 3, 109)]
    #[case(255, 8, 255)]
    fn scaling_covers_the_full_range(#[case] value: u8, #[case] depth: u32, #[case] expected: u8) {
        assert_eq!(scale_to_full_range(value, depth), expected);
    }
}
