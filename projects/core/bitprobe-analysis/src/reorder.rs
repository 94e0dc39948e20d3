//! Permutation-driven reordering of linear pixel sequences.

use crate::error::AnalysisError;
use crate::image::scale_to_full_range;
use alloc::string::ToString;
use alloc::vec::Vec;

/// Parse a text list of pixel indices.
///
/// Entries are separated by whitespace, `','` or `';'`. Anything that is not
/// a non-negative integer fails with [`AnalysisError::BadIndexToken`].
pub fn parse_index_list(text: &str) -> Result<Vec<usize>, AnalysisError> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| AnalysisError::BadIndexToken {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Build a new pixel sequence where output pixel `i` is `pixels[order_map[i]]`.
///
/// The map's length determines the output length; indices may repeat or skip
/// source pixels. Any index outside the source buffer fails without
/// producing partial output.
pub fn reorder_pixels(pixels: &[u8], order_map: &[usize]) -> Result<Vec<u8>, AnalysisError> {
    order_map
        .iter()
        .map(|&index| {
            pixels
                .get(index)
                .copied()
                .ok_or(AnalysisError::IndexOutOfRange {
                    index,
                    len: pixels.len(),
                })
        })
        .collect()
}

/// Complement every pixel within its `bit_depth`-bit value range.
pub fn invert_pixels(pixels: &mut [u8], bit_depth: u32) {
    let max = ((1u32 << bit_depth) - 1) as u8;
    for pixel in pixels {
        *pixel = max.saturating_sub(*pixel);
    }
}

/// Rescale every pixel from `0..2^depth-1` to the full 0-255 range.
pub fn scale_pixels(pixels: &mut [u8], bit_depth: u32) {
    for pixel in pixels {
        *pixel = scale_to_full_range(*pixel, bit_depth);
    }
}
