//! Bit numbering within a byte.

use core::str::FromStr;

/// Selects which physical bit of a byte is addressed by bit offset 0.
///
/// Byte order is always preserved left-to-right; only the numbering within
/// each byte changes. With [`BitOrder::MsbFirst`], `0x0F` reads as
/// `00001111`; with [`BitOrder::LsbFirst`] it reads as `11110000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Bit offset 0 addresses the most significant bit (0x80).
    #[default]
    MsbFirst,
    /// Bit offset 0 addresses the least significant bit (0x01).
    LsbFirst,
}

impl BitOrder {
    /// Mask selecting the bit at `offset` (0..8) within a byte.
    #[inline]
    pub fn mask(self, offset: u32) -> u8 {
        debug_assert!(offset < 8);
        match self {
            BitOrder::MsbFirst => 0x80 >> offset,
            BitOrder::LsbFirst => 1 << offset,
        }
    }
}

// Parsed from CLI arguments, so accept the spellings a user would type.
impl FromStr for BitOrder {
    type Err = alloc::string::String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "msb" | "msb-first" => Ok(BitOrder::MsbFirst),
            "lsb" | "lsb-first" => Ok(BitOrder::LsbFirst),
            _ => Err(alloc::format!(
                "Invalid bit order: {s}. Valid orders are: msb, lsb"
            )),
        }
    }
}
