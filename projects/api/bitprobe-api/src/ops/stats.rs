//! Statistics reports over segmented body bits.
//!
//! Three operations share one parameter struct: the block statistics text
//! report, the set-bit distance CSV and the run-length CSV.

use crate::error::OperationResult;
use crate::file_io;
use bitprobe_analysis::{bit_distances, bit_runs, bit_stats};
use bitprobe_core::{BitOrder, StreamLayout};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct StreamStatsParams {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: StreamLayout,
    pub order: BitOrder,
    pub invert: bool,
}

/// Write the per-block 0/1 count and run-length report.
pub fn bit_stream_stats(params: &StreamStatsParams) -> OperationResult<()> {
    let data = file_io::read_to_vec(&params.input)?;
    let blocks = bit_stats(&data, &params.layout, params.order, params.invert)?;

    let mut text = String::new();
    for stats in &blocks {
        let _ = writeln!(
            text,
            "block {}: zeros {}, ones {}, longest zero run {}, longest one run {}",
            stats.block, stats.zeros, stats.ones, stats.longest_zero_run, stats.longest_one_run,
        );
    }
    file_io::write_bytes(&params.output, text.as_bytes())
}

/// Write the distances between successive set bits as CSV.
pub fn bit_distance(params: &StreamStatsParams) -> OperationResult<()> {
    let data = file_io::read_to_vec(&params.input)?;
    let distances = bit_distances(&data, &params.layout, params.order, params.invert)?;

    let mut text = String::from("index,distance\n");
    for (index, distance) in distances.iter().enumerate() {
        let _ = writeln!(text, "{index},{distance}");
    }
    file_io::write_bytes(&params.output, text.as_bytes())
}

/// Write the lengths of consecutive identical-bit runs as CSV.
pub fn bit_sequences(params: &StreamStatsParams) -> OperationResult<()> {
    let data = file_io::read_to_vec(&params.input)?;
    let runs = bit_runs(&data, &params.layout, params.order, params.invert)?;

    let mut text = String::from("index,value,length\n");
    for (index, run) in runs.iter().enumerate() {
        let _ = writeln!(text, "{index},{},{}", run.value as u8, run.length);
    }
    file_io::write_bytes(&params.output, text.as_bytes())
}
