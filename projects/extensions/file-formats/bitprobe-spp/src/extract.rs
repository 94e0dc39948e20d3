//! Sequential packet extraction with APID filtering.

use crate::header::{CdsTimecode, PrimaryHeader, CDS_TIMECODE_SIZE, PRIMARY_HEADER_SIZE};
use alloc::vec::Vec;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SppError {
    /// A header declared more data than the buffer holds (strict mode only).
    #[error("packet at offset {offset} declares {declared} data bytes but only {remaining} remain")]
    Truncated {
        offset: u64,
        declared: usize,
        remaining: usize,
    },

    /// Byte-level skip larger than the buffer itself.
    #[error("skip offset {skip} exceeds the {len} bytes available")]
    SkipBeyondEnd { skip: usize, len: usize },
}

/// Parameters of one extraction pass.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Bytes to skip before the first header.
    pub skip_bytes: usize,
    /// Declared secondary header size in bytes; a CDS timecode is read from
    /// its front when it is at least [`CDS_TIMECODE_SIZE`] bytes.
    pub secondary_header_size: usize,
    /// Only packets with this APID are copied out (0..=2047).
    pub apid: u16,
    /// Abort on a malformed header instead of resynchronizing.
    pub strict: bool,
}

/// Summary row for one matched packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketSummary {
    /// Byte offset of the primary header in the source buffer.
    pub offset: u64,
    pub apid: u16,
    pub sequence_flags: u8,
    pub sequence_count: u16,
    /// Data field length (secondary header + payload).
    pub data_length: usize,
    pub timecode: Option<CdsTimecode>,
}

/// Result of a completed extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Concatenated data fields of every matched packet.
    pub matched: Vec<u8>,
    /// One summary per matched packet, in stream order.
    pub summaries: Vec<PacketSummary>,
    /// Well-formed packets walked, matched or not.
    pub packets_seen: u64,
    /// One-byte resynchronizations performed (lenient mode).
    pub resyncs: u64,
}

/// Walk packets from `skip_bytes` until the buffer is exhausted.
///
/// A malformed header is one whose declared data length exceeds the
/// remaining buffer. Strict mode aborts there with [`SppError::Truncated`];
/// lenient mode advances one byte and retries, which is bounded by the
/// buffer length and so cannot loop forever. Trailing bytes too short to
/// hold a header terminate the walk silently in both modes.
pub fn extract(data: &[u8], options: &ExtractOptions) -> Result<Extraction, SppError> {
    if options.skip_bytes > data.len() {
        return Err(SppError::SkipBeyondEnd {
            skip: options.skip_bytes,
            len: data.len(),
        });
    }

    let mut extraction = Extraction::default();
    let mut offset = options.skip_bytes;
    while offset + PRIMARY_HEADER_SIZE <= data.len() {
        let mut header_bytes = [0u8; PRIMARY_HEADER_SIZE];
        header_bytes.copy_from_slice(&data[offset..offset + PRIMARY_HEADER_SIZE]);
        let header = PrimaryHeader::from_bytes(header_bytes);

        let remaining = data.len() - offset - PRIMARY_HEADER_SIZE;
        if header.data_length() > remaining {
            if options.strict {
                return Err(SppError::Truncated {
                    offset: offset as u64,
                    declared: header.data_length(),
                    remaining,
                });
            }
            offset += 1;
            extraction.resyncs += 1;
            continue;
        }

        extraction.packets_seen += 1;
        if header.apid() == options.apid {
            let field_start = offset + PRIMARY_HEADER_SIZE;
            let field = &data[field_start..field_start + header.data_length()];
            extraction.matched.extend_from_slice(field);
            extraction.summaries.push(PacketSummary {
                offset: offset as u64,
                apid: header.apid(),
                sequence_flags: header.sequence_flags(),
                sequence_count: header.sequence_count(),
                data_length: header.data_length(),
                timecode: read_timecode(header, field, options.secondary_header_size),
            });
        }
        offset += header.total_length();
    }
    Ok(extraction)
}

fn read_timecode(
    header: PrimaryHeader,
    field: &[u8],
    secondary_header_size: usize,
) -> Option<CdsTimecode> {
    if !header.has_secondary_header()
        || secondary_header_size < CDS_TIMECODE_SIZE
        || field.len() < CDS_TIMECODE_SIZE
    {
        return None;
    }
    let mut bytes = [0u8; CDS_TIMECODE_SIZE];
    bytes.copy_from_slice(&field[..CDS_TIMECODE_SIZE]);
    Some(CdsTimecode::from_bytes(bytes))
}
