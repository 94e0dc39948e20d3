//! Permutation-driven reordering of a linear `.raw` image.

use crate::error::{OperationError, OperationResult};
use crate::file_io;
use bitprobe_analysis::{
    invert_pixels, parse_index_list, reorder_pixels, scale_pixels, AnalysisError,
};
use bitprobe_raw::{encode_raw, parse_raw, RawHeader};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PixelReorderParams {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Text file listing the source index of every output pixel.
    pub map: PathBuf,
    pub invert: bool,
    pub scale: bool,
}

/// Reorder a linear image's pixels by an index map read from a text file.
///
/// Output pixel `i` takes the value of input pixel `map[i]`, so the map's
/// length is the output length. The input must be linear (height 1); the
/// output is a single linear frame.
pub fn pixel_reorder(params: &PixelReorderParams) -> OperationResult<()> {
    let data = file_io::read_to_vec(&params.input)?;
    let (header, payload) = parse_raw(&data)?;
    if !header.is_linear() {
        return Err(OperationError::NotLinear {
            height: header.height,
        });
    }

    let map_text = file_io::read_to_string(&params.map)?;
    let order_map = parse_index_list(&map_text)?;
    let mut pixels = reorder_pixels(payload, &order_map)?;

    let mut bits_per_pixel = header.bits_per_pixel;
    if params.invert {
        invert_pixels(&mut pixels, bits_per_pixel);
    }
    if params.scale {
        scale_pixels(&mut pixels, bits_per_pixel);
        bits_per_pixel = 8;
    }

    let out_header = RawHeader {
        width: u32::try_from(pixels.len()).map_err(|_| AnalysisError::GeometryTooLarge)?,
        height: 1,
        frames: 1,
        bits_per_pixel,
    };
    file_io::write_bytes(&params.output, &encode_raw(&out_header, &pixels)?)
}
