use crate::error::CliError;
use argh::FromArgs;
use bitprobe_api::ops::{
    batch_bit_stream_to_image, bit_stream_to_image, pixel_reorder, BatchImageParams, ImageParams,
    PixelReorderParams,
};
use bitprobe_core::{BitOrder, StreamLayout};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Reinterpret the body bits of a framed stream as a .raw image
#[argh(subcommand, name = "image")]
pub struct ImageCmd {
    /// input file path
    #[argh(option)]
    pub input: PathBuf,

    /// output .raw file path
    #[argh(option)]
    pub output: PathBuf,

    /// bits of prologue before the first block [default: 0]
    #[argh(option, default = "0")]
    pub prologue_bits: u64,

    /// bits of header before each block body [default: 0]
    #[argh(option, default = "0")]
    pub header_bits: u64,

    /// bits per block body
    #[argh(option)]
    pub body_bits: u64,

    /// number of blocks [default: 1]
    #[argh(option, default = "1")]
    pub block_count: u64,

    /// pixels per row
    #[argh(option)]
    pub width: u32,

    /// bits per pixel, 1..=8 [default: 1]
    #[argh(option, default = "1")]
    pub bit_depth: u32,

    /// bit order: msb or lsb [default: msb]
    #[argh(option, default = "BitOrder::MsbFirst")]
    pub order: BitOrder,

    /// complement every bit
    #[argh(switch)]
    pub invert: bool,

    /// rescale pixel values to the full 0-255 range
    #[argh(switch)]
    pub scale: bool,

    /// also render every row width between --width and this bound
    #[argh(option)]
    pub width_end: Option<u32>,
}

impl ImageCmd {
    fn params(&self) -> ImageParams {
        ImageParams {
            input: self.input.clone(),
            output: self.output.clone(),
            layout: StreamLayout {
                prologue_bits: self.prologue_bits,
                header_bits: self.header_bits,
                body_bits: self.body_bits,
                block_count: self.block_count,
            },
            row_width: self.width,
            bit_depth: self.bit_depth,
            order: self.order,
            invert: self.invert,
            scale: self.scale,
        }
    }
}

pub fn handle_image_command(cmd: ImageCmd) -> Result<(), CliError> {
    match cmd.width_end {
        Some(width_end) => {
            let written = batch_bit_stream_to_image(&BatchImageParams {
                image: cmd.params(),
                row_width_end: width_end,
            })?;
            println!("Wrote {} images:", written.len());
            for path in written {
                println!("  {}", path.display());
            }
        }
        None => {
            bit_stream_to_image(&cmd.params())?;
            println!("Wrote image to {}", cmd.output.display());
        }
    }
    Ok(())
}

#[derive(FromArgs, Debug)]
/// Reorder the pixels of a linear .raw image by an index map
#[argh(subcommand, name = "reorder")]
pub struct ReorderCmd {
    /// input .raw file path (must be linear, height 1)
    #[argh(option)]
    pub input: PathBuf,

    /// output .raw file path
    #[argh(option)]
    pub output: PathBuf,

    /// text file listing the source index of every output pixel
    #[argh(option)]
    pub map: PathBuf,

    /// complement every pixel within its bit depth
    #[argh(switch)]
    pub invert: bool,

    /// rescale pixel values to the full 0-255 range
    #[argh(switch)]
    pub scale: bool,
}

pub fn handle_reorder_command(cmd: ReorderCmd) -> Result<(), CliError> {
    pixel_reorder(&PixelReorderParams {
        input: cmd.input,
        output: cmd.output.clone(),
        map: cmd.map,
        invert: cmd.invert,
        scale: cmd.scale,
    })?;
    println!("Wrote reordered image to {}", cmd.output.display());
    Ok(())
}
