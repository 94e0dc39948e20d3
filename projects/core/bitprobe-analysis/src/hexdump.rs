//! Byte-level hex dump.

use crate::error::AnalysisError;
use alloc::format;
use alloc::string::String;

/// Emit fixed-width rows of `row_width` bytes as hex text, skipping
/// `skip_bytes` from the start of the buffer.
///
/// This is the one emitter with no bit-order concept; it works on whole
/// bytes. Each row is prefixed with the absolute byte offset.
pub fn hex_dump(data: &[u8], skip_bytes: usize, row_width: usize) -> Result<String, AnalysisError> {
    if row_width == 0 {
        return Err(AnalysisError::ZeroRowWidth);
    }
    if skip_bytes > data.len() {
        return Err(AnalysisError::SkipBeyondEnd {
            skip: skip_bytes,
            len: data.len(),
        });
    }

    let mut out = String::new();
    for (row, bytes) in data[skip_bytes..].chunks(row_width).enumerate() {
        out.push_str(&format!("{:08x}:", skip_bytes + row * row_width));
        for byte in bytes {
            out.push_str(&format!(" {byte:02x}"));
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dumps_fixed_width_rows_with_offsets() {
        let data = [0x00, 0x11, 0x22, 0x33, 0x44];
        let text = hex_dump(&data, 0, 4).unwrap();
        assert_eq!(text, "00000000: 00 11 22 33\n00000004: 44\n");
    }

    #[test]
    fn skip_offsets_the_first_row() {
        let data = [0xAA, 0xBB, 0xCC];
        let text = hex_dump(&data, 1, 8).unwrap();
        assert_eq!(text, "00000001: bb cc\n");
    }

    #[test]
    fn skipping_the_whole_file_yields_empty_output() {
        let data = [0xAA];
        assert_eq!(hex_dump(&data, 1, 16).unwrap(), "");
    }

    #[test]
    fn skip_past_end_is_rejected() {
        assert_eq!(
            hex_dump(&[0u8; 4], 5, 16).unwrap_err(),
            AnalysisError::SkipBeyondEnd { skip: 5, len: 4 }
        );
    }

    #[test]
    fn zero_row_width_is_rejected() {
        assert_eq!(
            hex_dump(&[0u8; 4], 0, 0).unwrap_err(),
            AnalysisError::ZeroRowWidth
        );
    }
}
