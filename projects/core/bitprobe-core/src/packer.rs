//! Packing bit sequences back into bytes.

use crate::error::PackError;
use crate::order::BitOrder;
use alloc::vec::Vec;

/// Accumulates individual bits into packed bytes, 8 bits per byte,
/// placed per [`BitOrder`].
///
/// A trailing partial byte is padded with zero bits on [`BitPacker::finish`].
#[derive(Debug)]
pub struct BitPacker {
    order: BitOrder,
    bytes: Vec<u8>,
    current: u8,
    filled: u32,
}

impl BitPacker {
    pub fn new(order: BitOrder) -> Self {
        Self {
            order,
            bytes: Vec::new(),
            current: 0,
            filled: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, bit: bool) {
        if bit {
            self.current |= self.order.mask(self.filled);
        }
        self.filled += 1;
        if self.filled == 8 {
            self.bytes.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    /// Number of bits pushed so far.
    pub fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8 + self.filled as u64
    }

    pub fn finish(mut self) -> Vec<u8> {
        if self.filled > 0 {
            self.bytes.push(self.current);
        }
        self.bytes
    }
}

/// Pack a text of `'0'`/`'1'` symbols into a byte stream.
///
/// Whitespace, `','` and `';'` are skipped as separators; any other character
/// fails with [`PackError::UnrecognizedSymbol`] carrying its byte offset.
pub fn pack_bits(text: &str, order: BitOrder) -> Result<Vec<u8>, PackError> {
    let mut packer = BitPacker::new(order);
    for (position, symbol) in text.char_indices() {
        match symbol {
            '0' => packer.push(false),
            '1' => packer.push(true),
            c if c.is_whitespace() || c == ',' || c == ';' => {}
            _ => return Err(PackError::UnrecognizedSymbol { symbol, position }),
        }
    }
    Ok(packer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("00000000 00001111", BitOrder::MsbFirst, &[0x00, 0x0F])]
    #[case("00000000 00001111", BitOrder::LsbFirst, &[0x00, 0xF0])]
    #[case("1,0;1 0\n1010", BitOrder::MsbFirst, &[0xAA])]
    fn packs_bit_text(#[case] text: &str, #[case] order: BitOrder, #[case] expected: &[u8]) {
        assert_eq!(pack_bits(text, order).unwrap(), expected);
    }

    #[test]
    fn trailing_partial_byte_is_zero_padded() {
        assert_eq!(pack_bits("11", BitOrder::MsbFirst).unwrap(), [0xC0]);
        assert_eq!(pack_bits("11", BitOrder::LsbFirst).unwrap(), [0x03]);
    }

    #[test]
    fn empty_text_packs_to_nothing() {
        assert_eq!(pack_bits("  \n", BitOrder::MsbFirst).unwrap(), []);
    }

    #[test]
    fn unrecognized_symbol_reports_position() {
        assert_eq!(
            pack_bits("0101x", BitOrder::MsbFirst).unwrap_err(),
            PackError::UnrecognizedSymbol {
                symbol: 'x',
                position: 4
            }
        );
    }

    #[test]
    fn bit_len_counts_partial_bytes() {
        let mut packer = BitPacker::new(BitOrder::MsbFirst);
        for _ in 0..11 {
            packer.push(true);
        }
        assert_eq!(packer.bit_len(), 11);
        assert_eq!(packer.finish(), [0xFF, 0xE0]);
    }
}
