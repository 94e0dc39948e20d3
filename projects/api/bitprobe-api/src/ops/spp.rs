//! Space packet extraction to per-APID output plus an optional CSV summary.

use crate::error::{OperationError, OperationResult};
use crate::file_io;
use bitprobe_spp::{extract, ExtractOptions};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ExtractSppParams {
    pub input: PathBuf,
    /// Receives the concatenated data fields of every matched packet.
    pub output: PathBuf,
    pub skip_bytes: usize,
    pub secondary_header_size: usize,
    /// APID to match (0..=2047).
    pub apid: u16,
    pub strict: bool,
    /// Also write a per-packet CSV next to the output.
    pub save_summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SppReport {
    pub packets_seen: u64,
    pub packets_matched: u64,
    pub bytes_matched: u64,
    pub resyncs: u64,
}

/// Walk the packet stream and extract every data field matching the APID.
///
/// With `save_summary` set, a CSV with one row per matched packet is written
/// to the output path with its extension replaced by `csv`. Timecode columns
/// stay empty for packets without a readable CDS timecode.
pub fn extract_spp(params: &ExtractSppParams) -> OperationResult<SppReport> {
    if params.apid > 2047 {
        return Err(OperationError::InvalidParameter(
            "apid must be in the 0..=2047 range",
        ));
    }

    let data = file_io::read_to_vec(&params.input)?;
    let extraction = extract(
        &data,
        &ExtractOptions {
            skip_bytes: params.skip_bytes,
            secondary_header_size: params.secondary_header_size,
            apid: params.apid,
            strict: params.strict,
        },
    )?;

    file_io::write_bytes(&params.output, &extraction.matched)?;
    if params.save_summary {
        let mut csv =
            String::from("offset,apid,sequence_flags,sequence_count,data_length,days,millis,micros\n");
        for summary in &extraction.summaries {
            let _ = write!(
                csv,
                "{},{},{},{},{},",
                summary.offset,
                summary.apid,
                summary.sequence_flags,
                summary.sequence_count,
                summary.data_length,
            );
            match summary.timecode {
                Some(timecode) => {
                    let _ = writeln!(csv, "{},{},{}", timecode.days, timecode.millis, timecode.micros);
                }
                None => csv.push_str(",,\n"),
            }
        }
        file_io::write_bytes(&params.output.with_extension("csv"), csv.as_bytes())?;
    }

    Ok(SppReport {
        packets_seen: extraction.packets_seen,
        packets_matched: extraction.summaries.len() as u64,
        bytes_matched: extraction.matched.len() as u64,
        resyncs: extraction.resyncs,
    })
}
