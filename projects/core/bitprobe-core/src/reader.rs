//! Checked bit-indexed reads over a byte buffer.

use crate::error::BitRangeError;
use crate::order::BitOrder;

/// A bit-addressable view over a byte buffer.
///
/// Bit address `i` maps to byte `i / 8`, bit offset `i % 8`, with the offset
/// interpreted per [`BitOrder`]. When `invert` is set every bit is XORed with
/// 1 before being returned. Reads are bounds-checked; the reader never
/// touches memory past the end of the buffer.
#[derive(Debug, Clone, Copy)]
pub struct BitReader<'a> {
    data: &'a [u8],
    order: BitOrder,
    invert: bool,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8], order: BitOrder, invert: bool) -> Self {
        Self {
            data,
            order,
            invert,
        }
    }

    /// Total number of addressable bits.
    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.data.len() as u64 * 8
    }

    /// Read the single bit at `index`.
    #[inline]
    pub fn bit(&self, index: u64) -> Result<bool, BitRangeError> {
        if index >= self.bit_len() {
            return Err(BitRangeError::OutOfRange {
                start: index,
                end: index + 1,
                available: self.bit_len(),
            });
        }
        Ok(self.bit_unchecked(index))
    }

    /// Iterate over `count` bits starting at `start`.
    ///
    /// The range is validated once up front; the returned iterator is
    /// infallible and exact-size.
    pub fn bits(&self, start: u64, count: u64) -> Result<BitIter<'a>, BitRangeError> {
        let end = start.checked_add(count).unwrap_or(u64::MAX);
        if end > self.bit_len() {
            return Err(BitRangeError::OutOfRange {
                start,
                end,
                available: self.bit_len(),
            });
        }
        Ok(BitIter {
            reader: *self,
            next: start,
            end,
        })
    }

    /// Read `count` bits (1..=64) starting at `start` as an unsigned value,
    /// first-addressed bit most significant.
    ///
    /// This is how pixel groups are assembled: with `count == 2` and
    /// MSB-first order, the bits `10` read as the value 2.
    pub fn read_value(&self, start: u64, count: u32) -> Result<u64, BitRangeError> {
        debug_assert!((1..=64).contains(&count));
        let mut value = 0u64;
        for bit in self.bits(start, count as u64)? {
            value = (value << 1) | bit as u64;
        }
        Ok(value)
    }

    // Caller guarantees index < bit_len().
    #[inline]
    fn bit_unchecked(&self, index: u64) -> bool {
        let byte = self.data[(index / 8) as usize];
        let set = byte & self.order.mask((index % 8) as u32) != 0;
        set != self.invert
    }
}

/// Exact-size iterator over a validated bit range.
#[derive(Debug, Clone)]
pub struct BitIter<'a> {
    reader: BitReader<'a>,
    next: u64,
    end: u64,
}

impl Iterator for BitIter<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.next >= self.end {
            return None;
        }
        let bit = self.reader.bit_unchecked(self.next);
        self.next += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIter<'_> {}
