//! Removal of long NUL runs from a byte stream.

use crate::error::{OperationError, OperationResult};
use crate::file_io;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct NullStripParams {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Only NUL runs of at least this many bytes are removed.
    pub min_run: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullStripReport {
    pub bytes_in: usize,
    pub bytes_out: usize,
    pub runs_removed: usize,
}

/// Copy the input, dropping every run of `min_run` or more 0x00 bytes.
///
/// Runs shorter than `min_run` pass through untouched, so padding can be
/// stripped without disturbing NUL bytes that carry data.
pub fn strip_null_runs(params: &NullStripParams) -> OperationResult<NullStripReport> {
    if params.min_run == 0 {
        return Err(OperationError::InvalidParameter(
            "minimum run length must be at least 1",
        ));
    }

    let data = file_io::read_to_vec(&params.input)?;
    let mut out = Vec::with_capacity(data.len());
    let mut runs_removed = 0;
    let mut position = 0;
    while position < data.len() {
        if data[position] == 0 {
            let run_end = data[position..]
                .iter()
                .position(|&b| b != 0)
                .map_or(data.len(), |n| position + n);
            if run_end - position >= params.min_run {
                runs_removed += 1;
            } else {
                out.extend_from_slice(&data[position..run_end]);
            }
            position = run_end;
        } else {
            out.push(data[position]);
            position += 1;
        }
    }

    file_io::write_bytes(&params.output, &out)?;
    Ok(NullStripReport {
        bytes_in: data.len(),
        bytes_out: out.len(),
        runs_removed,
    })
}
