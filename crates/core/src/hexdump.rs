//! Hexdump (xxd-style) preview of decoded bytes.

use std::fmt::Write as _;

const BYTES_PER_LINE: usize = 16;

/// Width of a full line of hex pairs: two chars per byte plus a space
/// between every group of two bytes.
const HEX_WIDTH: usize = BYTES_PER_LINE * 2 + (BYTES_PER_LINE - 1) / 2;

/// Format bytes as an xxd-style hexdump.
///
/// At most `max_lines` lines of 16 bytes are shown; the rest is summarized.
///
/// ```text
/// 00000000: 6869 7420 7072 6f74 6f62 7566 0a0a 0a0a  hit protobuf....
/// 00000010: 0a0a 0a0a 0a0a                           ......
/// ```
#[must_use]
pub fn hexdump(bytes: &[u8], max_lines: usize) -> String {
    let mut output = String::new();

    for (line_idx, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        let offset = line_idx * BYTES_PER_LINE;

        if line_idx >= max_lines {
            let _ = writeln!(output, "... ({} more bytes)", bytes.len() - offset);
            break;
        }

        let mut hex = String::with_capacity(HEX_WIDTH);
        for (i, byte) in chunk.iter().enumerate() {
            let _ = write!(hex, "{byte:02x}");
            if i % 2 == 1 && i < chunk.len() - 1 {
                hex.push(' ');
            }
        }

        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();

        let _ = writeln!(output, "{offset:08x}: {hex:<width$}  {ascii}", width = HEX_WIDTH);
    }

    // Remove trailing newline
    output.pop();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexdump_short() {
        let output = hexdump(b"hello", 16);
        assert!(output.starts_with("00000000: 6865 6c6c 6f "));
        assert!(output.ends_with("  hello"));
    }

    #[test]
    fn test_hexdump_multiline() {
        let bytes: Vec<u8> = (0..32).collect();
        let output = hexdump(&bytes, 16);
        assert!(output.contains("00000000:"));
        assert!(output.contains("00000010:"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_hexdump_gutter_is_aligned() {
        let bytes: Vec<u8> = (0x41..0x41 + 18).collect();
        let output = hexdump(&bytes, 16);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "00000000: 4142 4344 4546 4748 494a 4b4c 4d4e 4f50  ABCDEFGHIJKLMNOP");
        assert_eq!(lines[1].find("  QR"), Some(10 + HEX_WIDTH));
    }

    #[test]
    fn test_hexdump_non_printable() {
        let output = hexdump(&[0x0a, 0x20, 0x00, 0xff], 16);
        assert!(output.starts_with("00000000: 0a20 00ff"));
        assert!(output.ends_with("  . .."));
    }

    #[test]
    fn test_hexdump_truncation() {
        let bytes: Vec<u8> = (0..=255).collect();
        let output = hexdump(&bytes, 4);
        assert!(output.ends_with("... (192 more bytes)"));
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn test_hexdump_empty() {
        assert_eq!(hexdump(&[], 16), "");
    }
}
