//! Bit stream to `.raw` image, single width or swept.

use crate::error::{OperationError, OperationResult};
use crate::file_io;
use bitprobe_analysis::extract_pixels;
use bitprobe_core::{BitOrder, StreamLayout};
use bitprobe_raw::{encode_raw, RawHeader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageParams {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: StreamLayout,
    /// Pixels per row.
    pub row_width: u32,
    /// Bits per pixel in the source stream (1..=8).
    pub bit_depth: u32,
    pub order: BitOrder,
    pub invert: bool,
    /// Rescale pixel values to the full 0-255 range.
    pub scale: bool,
}

#[derive(Debug, Clone)]
pub struct BatchImageParams {
    pub image: ImageParams,
    /// The sweep covers every row width between `image.row_width` and this
    /// bound, inclusive, in ascending order.
    pub row_width_end: u32,
}

/// Reinterpret the body bits as pixels and write one `.raw` image.
pub fn bit_stream_to_image(params: &ImageParams) -> OperationResult<()> {
    let data = file_io::read_to_vec(&params.input)?;
    write_image(&data, params, &params.output)
}

/// Run [`bit_stream_to_image`] once per candidate row width.
///
/// Each width gets its own output file with a `_w{width}` suffix; the
/// returned paths are in sweep order. Used to visually search for the row
/// width of an unknown framing: the width where the image stops shearing is
/// the stream's natural line length.
pub fn batch_bit_stream_to_image(params: &BatchImageParams) -> OperationResult<Vec<PathBuf>> {
    let first = params.image.row_width.min(params.row_width_end);
    let last = params.image.row_width.max(params.row_width_end);
    if first == 0 {
        return Err(OperationError::InvalidParameter(
            "row width must be at least 1",
        ));
    }

    let data = file_io::read_to_vec(&params.image.input)?;
    let mut written = Vec::with_capacity((last - first + 1) as usize);
    for row_width in first..=last {
        let path = suffixed_path(&params.image.output, row_width);
        let swept = ImageParams {
            row_width,
            ..params.image.clone()
        };
        write_image(&data, &swept, &path)?;
        written.push(path);
    }
    Ok(written)
}

fn write_image(data: &[u8], params: &ImageParams, output: &Path) -> OperationResult<()> {
    let plane = extract_pixels(
        data,
        &params.layout,
        params.row_width,
        params.bit_depth,
        params.order,
        params.invert,
        params.scale,
    )?;
    let header = RawHeader {
        width: plane.width,
        height: plane.height,
        frames: plane.frames,
        bits_per_pixel: plane.bit_depth,
    };
    file_io::write_bytes(output, &encode_raw(&header, &plane.pixels)?)
}

fn suffixed_path(output: &Path, row_width: u32) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let name = match output.extension().and_then(|e| e.to_str()) {
        Some(extension) => format!("{stem}_w{row_width}.{extension}"),
        None => format!("{stem}_w{row_width}"),
    };
    output.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitprobe_raw::parse_raw;

    fn whole_stream(dir: &tempfile::TempDir, data: &[u8]) -> ImageParams {
        let input = dir.path().join("in.bin");
        file_io::write_bytes(&input, data).unwrap();
        ImageParams {
            input,
            output: dir.path().join("out.raw"),
            layout: StreamLayout {
                prologue_bits: 0,
                header_bits: 0,
                body_bits: data.len() as u64 * 8,
                block_count: 1,
            },
            row_width: 8,
            bit_depth: 1,
            order: BitOrder::MsbFirst,
            invert: false,
            scale: false,
        }
    }

    #[test]
    fn writes_a_raw_image() {
        let dir = tempfile::tempdir().unwrap();
        // 1010101011110000
        let params = whole_stream(&dir, &[0xAA, 0xF0]);
        bit_stream_to_image(&params).unwrap();

        let bytes = file_io::read_to_vec(&params.output).unwrap();
        let (header, pixels) = parse_raw(&bytes).unwrap();
        assert_eq!((header.width, header.height, header.frames), (8, 2, 1));
        assert_eq!(header.bits_per_pixel, 1);
        assert_eq!(pixels, [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn scale_widens_the_stored_depth() {
        let dir = tempfile::tempdir().unwrap();
        let params = ImageParams {
            scale: true,
            ..whole_stream(&dir, &[0xAA, 0xF0])
        };
        bit_stream_to_image(&params).unwrap();
        let bytes = file_io::read_to_vec(&params.output).unwrap();
        let (header, pixels) = parse_raw(&bytes).unwrap();
        assert_eq!(header.bits_per_pixel, 8);
        assert_eq!(&pixels[..4], [255, 0, 255, 0]);
    }

    #[test]
    fn batch_sweeps_every_width_inclusive() {
        let dir = tempfile::tempdir().unwrap();
        let params = BatchImageParams {
            image: ImageParams {
                row_width: 4,
                ..whole_stream(&dir, &[0xAA, 0xF0, 0x12, 0x34])
            },
            row_width_end: 6,
        };
        let written = batch_bit_stream_to_image(&params).unwrap();
        assert_eq!(written.len(), 3);
        for (path, width) in written.iter().zip(4u32..) {
            assert!(path.file_name().unwrap().to_str().unwrap().contains(&format!("_w{width}")));
            let (header, _) = parse_raw(&file_io::read_to_vec(path).unwrap()).unwrap();
            assert_eq!(header.width, width);
        }
    }

    #[test]
    fn batch_accepts_reversed_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let params = BatchImageParams {
            image: ImageParams {
                row_width: 6,
                ..whole_stream(&dir, &[0xAA, 0xF0, 0x12, 0x34])
            },
            row_width_end: 4,
        };
        assert_eq!(batch_bit_stream_to_image(&params).unwrap().len(), 3);
    }
}
