//! Primary header and CDS timecode records.

use bitfield::bitfield;

/// Size of the primary header in bytes.
pub const PRIMARY_HEADER_SIZE: usize = 6;

/// Size of a CDS timecode (days/millis/micros) in bytes.
pub const CDS_TIMECODE_SIZE: usize = 8;

bitfield! {
    /// The 6-byte CCSDS primary header, packed big-endian into the low 48
    /// bits of a u64.
    ///
    /// Field layout (bit 47 is the first bit on the wire):
    ///
    /// `version(3) | type(1) | sec_hdr_flag(1) | apid(11) |
    ///  seq_flags(2) | seq_count(14) | data_length_minus_one(16)`
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct PrimaryHeader(u64);
    impl Debug;
    pub u8, version, set_version: 47, 45;
    /// Set for telecommand packets, clear for telemetry.
    pub is_telecommand, set_is_telecommand: 44;
    pub has_secondary_header, set_has_secondary_header: 43;
    pub u16, apid, set_apid: 42, 32;
    pub u8, sequence_flags, set_sequence_flags: 31, 30;
    pub u16, sequence_count, set_sequence_count: 29, 16;
    /// Data field length minus one, as stored on the wire.
    pub u16, data_length_minus_one, set_data_length_minus_one: 15, 0;
}

impl PrimaryHeader {
    pub fn from_bytes(bytes: [u8; PRIMARY_HEADER_SIZE]) -> Self {
        let mut value = 0u64;
        for byte in bytes {
            value = (value << 8) | byte as u64;
        }
        Self(value)
    }

    pub fn to_bytes(self) -> [u8; PRIMARY_HEADER_SIZE] {
        let v = self.0;
        [
            (v >> 40) as u8,
            (v >> 32) as u8,
            (v >> 24) as u8,
            (v >> 16) as u8,
            (v >> 8) as u8,
            v as u8,
        ]
    }

    /// Actual data field length in bytes (secondary header + payload).
    pub fn data_length(&self) -> usize {
        self.data_length_minus_one() as usize + 1
    }

    /// Whole packet length including the primary header.
    pub fn total_length(&self) -> usize {
        PRIMARY_HEADER_SIZE + self.data_length()
    }
}

/// CCSDS day-segmented timecode from the front of a secondary header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdsTimecode {
    /// Days since the CCSDS epoch (1958-01-01).
    pub days: u16,
    pub millis: u32,
    pub micros: u16,
}

impl CdsTimecode {
    pub fn from_bytes(bytes: [u8; CDS_TIMECODE_SIZE]) -> Self {
        Self {
            days: u16::from_be_bytes([bytes[0], bytes[1]]),
            millis: u32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]),
            micros: u16::from_be_bytes([bytes[6], bytes[7]]),
        }
    }
}
