//! File-to-file hex dump.

use crate::error::OperationResult;
use crate::file_io;
use bitprobe_analysis::hex_dump;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct HexDumpParams {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Bytes skipped from the start of the file.
    pub skip_bytes: usize,
    /// Bytes per output row.
    pub row_width: usize,
}

/// Dump the input as fixed-width hex text rows.
pub fn hex_dump_file(params: &HexDumpParams) -> OperationResult<()> {
    let data = file_io::read_to_vec(&params.input)?;
    let text = hex_dump(&data, params.skip_bytes, params.row_width)?;
    file_io::write_bytes(&params.output, text.as_bytes())
}
