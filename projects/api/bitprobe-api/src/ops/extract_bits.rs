//! Repacking of segmented body bits into a new byte stream.

use crate::error::OperationResult;
use crate::file_io;
use bitprobe_core::{BitOrder, BitPacker, BitReader, StreamLayout};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ExtractBitsParams {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: StreamLayout,
    /// Order used to address bits in the input.
    pub input_order: BitOrder,
    /// Order used to place bits in the output bytes.
    pub output_order: BitOrder,
    pub invert: bool,
}

/// Extract every block body and pack the bits back into bytes.
///
/// Input and output bit orders are independent, so this doubles as a
/// per-byte bit reversal when they differ. A trailing partial byte is
/// zero-padded.
pub fn extract_bits(params: &ExtractBitsParams) -> OperationResult<()> {
    let data = file_io::read_to_vec(&params.input)?;
    let reader = BitReader::new(&data, params.input_order, params.invert);
    let mut packer = BitPacker::new(params.output_order);
    for segment in params.layout.segments(reader.bit_len())? {
        for bit in reader.bits(segment.body.start, params.layout.body_bits)? {
            packer.push(bit);
        }
    }
    file_io::write_bytes(&params.output, &packer.finish())
}
