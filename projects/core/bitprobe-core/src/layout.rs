//! Repeating block structure over a bit stream.

use crate::error::LayoutError;
use core::ops::Range;

/// Describes one prologue followed by `block_count` repetitions of
/// (header, body), all measured in bits.
///
/// `header_bits` may be zero (headerless blocks). The layout is only a
/// description; [`StreamLayout::segments`] validates it against an actual
/// bit length before anything is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamLayout {
    pub prologue_bits: u64,
    pub header_bits: u64,
    pub body_bits: u64,
    pub block_count: u64,
}

impl StreamLayout {
    /// Total bits the layout consumes, computed wide enough not to wrap.
    pub fn total_bits(&self) -> u128 {
        self.prologue_bits as u128
            + self.block_count as u128 * (self.header_bits as u128 + self.body_bits as u128)
    }

    /// Segment a stream of `available_bits` into per-block bit ranges.
    ///
    /// Fails with [`LayoutError::SizeMismatch`] when the layout's computed
    /// end exceeds `available_bits`. On success the returned iterator yields
    /// exactly `block_count` segments and can be recreated at any time; it is
    /// a pure function of the layout.
    pub fn segments(&self, available_bits: u64) -> Result<Segments, LayoutError> {
        let required = self.total_bits();
        if required > available_bits as u128 {
            return Err(LayoutError::SizeMismatch {
                required,
                available: available_bits,
            });
        }
        Ok(Segments {
            layout: *self,
            index: 0,
        })
    }
}

/// Bit ranges of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// 0-based block number.
    pub index: u64,
    /// Header bit range; empty when the layout has no block headers.
    pub header: Range<u64>,
    /// Body bit range.
    pub body: Range<u64>,
}

/// Finite iterator over the segments of a validated layout.
#[derive(Debug, Clone)]
pub struct Segments {
    layout: StreamLayout,
    index: u64,
}

impl Iterator for Segments {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.index >= self.layout.block_count {
            return None;
        }
        let stride = self.layout.header_bits + self.layout.body_bits;
        let start = self.layout.prologue_bits + self.index * stride;
        let body_start = start + self.layout.header_bits;
        let segment = Segment {
            index: self.index,
            header: start..body_start,
            body: body_start..start + stride,
        };
        self.index += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.layout.block_count - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments {}
