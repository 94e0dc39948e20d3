//! Block bodies rendered as '0'/'1' text grids.

use crate::error::AnalysisError;
use alloc::format;
use alloc::string::String;
use bitprobe_core::{BitOrder, BitReader, StreamLayout};

/// Emit the body bits of every block as rows of `row_bits` characters.
///
/// One row per `row_bits` bits, one section per block; a trailing short row
/// is emitted as-is. When the layout has more than one block each section is
/// introduced by a `block N` line so sections stay distinguishable.
pub fn bit_grid(
    data: &[u8],
    layout: &StreamLayout,
    row_bits: usize,
    order: BitOrder,
    invert: bool,
) -> Result<String, AnalysisError> {
    if row_bits == 0 {
        return Err(AnalysisError::ZeroRowWidth);
    }

    let reader = BitReader::new(data, order, invert);
    let mut out = String::new();
    for segment in layout.segments(reader.bit_len())? {
        if layout.block_count > 1 {
            out.push_str(&format!("block {}\n", segment.index));
        }
        let mut column = 0;
        for bit in reader.bits(segment.body.start, layout.body_bits)? {
            out.push(if bit { '1' } else { '0' });
            column += 1;
            if column == row_bits {
                out.push('\n');
                column = 0;
            }
        }
        if column > 0 {
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitprobe_core::pack_bits;
    use rstest::rstest;

    fn whole_stream(data: &[u8]) -> StreamLayout {
        StreamLayout {
            prologue_bits: 0,
            header_bits: 0,
            body_bits: data.len() as u64 * 8,
            block_count: 1,
        }
    }

    #[test]
    fn renders_rows_of_requested_width() {
        let data = [0b1010_1010, 0b1111_0000];
        let text = bit_grid(&data, &whole_stream(&data), 8, BitOrder::MsbFirst, false).unwrap();
        assert_eq!(text, "10101010\n11110000\n");
    }

    #[test]
    fn invert_flips_the_grid() {
        let data = [0x00, 0x0F];
        let text = bit_grid(&data, &whole_stream(&data), 16, BitOrder::MsbFirst, true).unwrap();
        assert_eq!(text, "1111111111110000\n");
    }

    #[test]
    fn blocks_are_emitted_as_separate_sections() {
        let data = [0xFF, 0x00];
        let layout = StreamLayout {
            prologue_bits: 0,
            header_bits: 0,
            body_bits: 8,
            block_count: 2,
        };
        let text = bit_grid(&data, &layout, 4, BitOrder::MsbFirst, false).unwrap();
        assert_eq!(text, "block 0\n1111\n1111\nblock 1\n0000\n0000\n");
    }

    #[test]
    fn headers_are_skipped() {
        // 4-bit header 1111, 4-bit body 0101
        let data = [0b1111_0101];
        let layout = StreamLayout {
            prologue_bits: 0,
            header_bits: 4,
            body_bits: 4,
            block_count: 1,
        };
        let text = bit_grid(&data, &layout, 4, BitOrder::MsbFirst, false).unwrap();
        assert_eq!(text, "0101\n");
    }

    #[test]
    fn short_trailing_row_is_kept() {
        let data = [0b1100_0000];
        let layout = StreamLayout {
            prologue_bits: 0,
            header_bits: 0,
            body_bits: 6,
            block_count: 1,
        };
        let text = bit_grid(&data, &layout, 4, BitOrder::MsbFirst, false).unwrap();
        assert_eq!(text, "1100\n00\n");
    }

    #[test]
    fn oversized_layout_fails_before_reading() {
        let data = [0x00];
        let layout = StreamLayout {
            prologue_bits: 0,
            header_bits: 0,
            body_bits: 16,
            block_count: 1,
        };
        assert!(matches!(
            bit_grid(&data, &layout, 8, BitOrder::MsbFirst, false),
            Err(AnalysisError::Layout(_))
        ));
    }

    // Grid text packed back with the same bit order reproduces the source.
    #[rstest]
    #[case(BitOrder::MsbFirst)]
    #[case(BitOrder::LsbFirst)]
    fn round_trips_through_pack_bits(#[case] order: BitOrder) {
        let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x42];
        let text = bit_grid(&data, &whole_stream(&data), 8, order, false).unwrap();
        assert_eq!(pack_bits(&text, order).unwrap(), data);
    }
}
