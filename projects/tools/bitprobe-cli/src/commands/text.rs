use crate::error::CliError;
use argh::FromArgs;
use bitprobe_api::ops::{bit_text, pack_bit_text, BitTextParams, PackBitTextParams};
use bitprobe_core::{BitOrder, StreamLayout};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Render the body bits of a framed stream as a '0'/'1' text grid
#[argh(subcommand, name = "bit-text")]
pub struct BitTextCmd {
    /// input file path
    #[argh(option)]
    pub input: PathBuf,

    /// output text file path
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

    /// bits per output row [default: 64]
    #[argh(option, default = "64")]
    pub row_bits: usize,

    /// bit order: msb or lsb [default: msb]
    #[argh(option, default = "BitOrder::MsbFirst")]
    pub order: BitOrder,

    /// complement every bit
    #[argh(switch)]
    pub invert: bool,
}

pub fn handle_bit_text_command(cmd: BitTextCmd) -> Result<(), CliError> {
    bit_text(&BitTextParams {
        input: cmd.input,
        output: cmd.output.clone(),
        layout: StreamLayout {
            prologue_bits: cmd.prologue_bits,
            header_bits: cmd.header_bits,
            body_bits: cmd.body_bits,
            block_count: cmd.block_count,
        },
        row_bits: cmd.row_bits,
        order: cmd.order,
        invert: cmd.invert,
    })?;
    println!("Wrote bit grid to {}", cmd.output.display());
    Ok(())
}

#[derive(FromArgs, Debug)]
/// Pack a text file of '0'/'1' symbols into a byte stream
#[argh(subcommand, name = "pack-text")]
pub struct PackTextCmd {
    /// input text file path
    #[argh(option)]
    pub input: PathBuf,

    /// output file path
    #[argh(option)]
    pub output: PathBuf,

    /// bit order: msb or lsb [default: msb]
    #[argh(option, default = "BitOrder::MsbFirst")]
    pub order: BitOrder,
}

pub fn handle_pack_text_command(cmd: PackTextCmd) -> Result<(), CliError> {
    pack_bit_text(&PackBitTextParams {
        input: cmd.input,
        output: cmd.output.clone(),
        order: cmd.order,
    })?;
    println!("Wrote packed bit stream to {}", cmd.output.display());
    Ok(())
}
