use crate::error::CliError;
use argh::FromArgs;
use bitprobe_api::ops::{extract_bits, ExtractBitsParams};
use bitprobe_core::{BitOrder, StreamLayout};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Extract the block bodies of a framed stream into a packed byte stream
#[argh(subcommand, name = "extract-bits")]
pub struct ExtractBitsCmd {
    /// input file path
    #[argh(option)]
    pub input: PathBuf,

    /// output file path
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

    /// bit order of the input: msb or lsb [default: msb]
    #[argh(option, default = "BitOrder::MsbFirst")]
    pub input_order: BitOrder,

    /// bit order of the output: msb or lsb [default: msb]
    #[argh(option, default = "BitOrder::MsbFirst")]
    pub output_order: BitOrder,

    /// complement every bit
    #[argh(switch)]
    pub invert: bool,
}

pub fn handle_extract_bits_command(cmd: ExtractBitsCmd) -> Result<(), CliError> {
    extract_bits(&ExtractBitsParams {
        input: cmd.input,
        output: cmd.output.clone(),
        layout: StreamLayout {
            prologue_bits: cmd.prologue_bits,
            header_bits: cmd.header_bits,
            body_bits: cmd.body_bits,
            block_count: cmd.block_count,
        },
        input_order: cmd.input_order,
        output_order: cmd.output_order,
        invert: cmd.invert,
    })?;
    println!("Wrote extracted bit stream to {}", cmd.output.display());
    Ok(())
}
