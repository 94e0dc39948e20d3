//! Aggregations over segmented body bits.
//!
//! All three analyses walk the same segmentation as the text grid; they only
//! differ in what they fold the bits into.

use crate::error::AnalysisError;
use alloc::vec::Vec;
use bitprobe_core::{BitOrder, BitReader, StreamLayout};

/// Per-block 0/1 counts and run-length summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStats {
    pub block: u64,
    pub zeros: u64,
    pub ones: u64,
    pub longest_zero_run: u64,
    pub longest_one_run: u64,
}

/// One run of consecutive identical bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRun {
    pub value: bool,
    pub length: u64,
}

/// Count zeros, ones and longest runs for each block body.
pub fn bit_stats(
    data: &[u8],
    layout: &StreamLayout,
    order: BitOrder,
    invert: bool,
) -> Result<Vec<BlockStats>, AnalysisError> {
    let reader = BitReader::new(data, order, invert);
    let mut blocks = Vec::new();
    for segment in layout.segments(reader.bit_len())? {
        let mut stats = BlockStats {
            block: segment.index,
            zeros: 0,
            ones: 0,
            longest_zero_run: 0,
            longest_one_run: 0,
        };
        let mut run_value = false;
        let mut run_length = 0u64;
        for bit in reader.bits(segment.body.start, layout.body_bits)? {
            if bit {
                stats.ones += 1;
            } else {
                stats.zeros += 1;
            }
            if run_length > 0 && bit == run_value {
                run_length += 1;
            } else {
                record_run(&mut stats, run_value, run_length);
                run_value = bit;
                run_length = 1;
            }
        }
        record_run(&mut stats, run_value, run_length);
        blocks.push(stats);
    }
    Ok(blocks)
}

fn record_run(stats: &mut BlockStats, value: bool, length: u64) {
    if length == 0 {
        return;
    }
    if value {
        stats.longest_one_run = stats.longest_one_run.max(length);
    } else {
        stats.longest_zero_run = stats.longest_zero_run.max(length);
    }
}

/// Bit-offset distances between successive set bits.
///
/// The body bits of all blocks are treated as one concatenated sequence;
/// each entry is the distance from the previous set bit to the next one.
pub fn bit_distances(
    data: &[u8],
    layout: &StreamLayout,
    order: BitOrder,
    invert: bool,
) -> Result<Vec<u64>, AnalysisError> {
    let mut distances = Vec::new();
    let mut previous: Option<u64> = None;
    let mut position = 0u64;
    for_each_body_bit(data, layout, order, invert, |bit| {
        if bit {
            if let Some(last) = previous {
                distances.push(position - last);
            }
            previous = Some(position);
        }
        position += 1;
    })?;
    Ok(distances)
}

/// Lengths of consecutive runs of identical bit value over the concatenated
/// body bits.
pub fn bit_runs(
    data: &[u8],
    layout: &StreamLayout,
    order: BitOrder,
    invert: bool,
) -> Result<Vec<BitRun>, AnalysisError> {
    let mut runs: Vec<BitRun> = Vec::new();
    for_each_body_bit(data, layout, order, invert, |bit| {
        match runs.last_mut() {
            Some(run) if run.value == bit => run.length += 1,
            _ => runs.push(BitRun {
                value: bit,
                length: 1,
            }),
        }
    })?;
    Ok(runs)
}

fn for_each_body_bit(
    data: &[u8],
    layout: &StreamLayout,
    order: BitOrder,
    invert: bool,
    mut visit: impl FnMut(bool),
) -> Result<(), AnalysisError> {
    let reader = BitReader::new(data, order, invert);
    for segment in layout.segments(reader.bit_len())? {
        for bit in reader.bits(segment.body.start, layout.body_bits)? {
            visit(bit);
        }
    }
    Ok(())
}
