//! Bit stream to '0'/'1' text grid.

use crate::error::OperationResult;
use crate::file_io;
use bitprobe_analysis::bit_grid;
use bitprobe_core::{BitOrder, StreamLayout};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct BitTextParams {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: StreamLayout,
    /// Bits per output row.
    pub row_bits: usize,
    pub order: BitOrder,
    pub invert: bool,
}

/// Render the body bits of every block as a text grid.
pub fn bit_text(params: &BitTextParams) -> OperationResult<()> {
    let data = file_io::read_to_vec(&params.input)?;
    let text = bit_grid(
        &data,
        &params.layout,
        params.row_bits,
        params.order,
        params.invert,
    )?;
    file_io::write_bytes(&params.output, text.as_bytes())
}
