//! # Printer Text Encoding
//!
//! Converts Unicode strings to Windows-1252 (WPC1252), the single-byte table
//! selected with `ESC t 16`. It covers every Spanish letter, upper and lower
//! case, plus `¡ ¿ º ª €`.
//!
//! `encoding_rs` replaces unmappable characters with an HTML numeric
//! reference, which would break the fixed-width layout, so those characters
//! are re-encoded one by one and printed as `?` instead.

use tracing::warn;

/// Encode a Unicode string as WPC1252 bytes, one byte per character.
///
/// ```
/// use ticketera::protocol::encoding::encode;
///
/// assert_eq!(encode("Total"), b"Total".to_vec());
/// assert_eq!(encode("¡Gracias!")[0], 0xA1);
/// assert_eq!(encode("AZÚCAR")[2], 0xDA);
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    let (cow, _, had_errors) = encoding_rs::WINDOWS_1252.encode(s);
    if !had_errors {
        return cow.into_owned();
    }

    let mut out = Vec::with_capacity(s.len());
    let mut unmapped = String::new();
    let mut buf = [0u8; 4];
    for ch in s.chars() {
        let (bytes, _, failed) = encoding_rs::WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
        if failed {
            unmapped.push(ch);
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }

    warn!(chars = %unmapped, "replaced characters outside WPC1252 with '?'");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("RD$ 95.00"), b"RD$ 95.00".to_vec());
    }

    #[test]
    fn test_spanish_letters() {
        assert_eq!(encode("ñÑ¿¡"), vec![0xF1, 0xD1, 0xBF, 0xA1]);
        assert_eq!(encode("áéíóú"), vec![0xE1, 0xE9, 0xED, 0xF3, 0xFA]);
    }

    #[test]
    fn test_capital_accents_and_euro_keep_their_glyphs() {
        assert_eq!(
            encode("AZÚCAR ÁNGEL €5"),
            vec![
                b'A', b'Z', 0xDA, b'C', b'A', b'R', b' ', 0xC1, b'N', b'G', b'E', b'L', b' ', 0x80,
                b'5'
            ]
        );
        assert_eq!(encode("ÍÓÉ"), vec![0xCD, 0xD3, 0xC9]);
    }

    #[test]
    fn test_unmapped_become_question_mark() {
        assert_eq!(encode("★ok"), vec![b'?', b'o', b'k']);
        assert_eq!(encode("a→b→c"), b"a?b?c".to_vec());
    }

    #[test]
    fn test_one_byte_per_char() {
        let text = "¡Gracias por su compra! ★";
        assert_eq!(encode(text).len(), text.chars().count());
    }
}
