//! CCSDS Space Packet Protocol (CCSDS 133.0-B) extraction.
//!
//! Packets are parsed sequentially from a byte buffer: a 6-byte big-endian
//! primary header followed by a data field of `length + 1` bytes (secondary
//! header plus payload). Extraction filters by APID and supports two failure
//! modes for malformed headers: strict (abort) and lenient (resynchronize at
//! the next byte).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod extract;
mod header;

pub use extract::{extract, ExtractOptions, Extraction, PacketSummary, SppError};
pub use header::{CdsTimecode, PrimaryHeader, CDS_TIMECODE_SIZE, PRIMARY_HEADER_SIZE};
