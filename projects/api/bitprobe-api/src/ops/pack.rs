//! Bit text back into a packed byte stream.

use crate::error::OperationResult;
use crate::file_io;
use bitprobe_core::{pack_bits, BitOrder};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PackBitTextParams {
    pub input: PathBuf,
    pub output: PathBuf,
    pub order: BitOrder,
}

/// Pack a text file of '0'/'1' symbols into bytes.
///
/// The inverse of the text grid emitter when the bit orders match.
pub fn pack_bit_text(params: &PackBitTextParams) -> OperationResult<()> {
    let text = file_io::read_to_string(&params.input)?;
    let bytes = pack_bits(&text, params.order)?;
    file_io::write_bytes(&params.output, &bytes)
}
