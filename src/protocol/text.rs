//! # ESC/POS Text Commands
//!
//! Alignment, print mode and line output for ESC/POS printers.
//!
//! ## Print Mode Overview
//!
//! `ESC ! n` selects several character attributes in one byte:
//!
//! | Bit | Value | Effect |
//! |-----|-------|--------|
//! | 3 | 0x08 | Emphasized (bold) |
//! | 4 | 0x10 | Double height |
//! | 5 | 0x20 | Double width |
//!
//! Because the whole mode is replaced on every call, [`set_style`] with
//! [`PrintStyle::NONE`] is also the reset.
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! ```

use super::commands::{ESC, LF};
use super::encoding;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
}

/// # Select Justification (ESC a n)
///
/// Sets the alignment for subsequent lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a n  |
/// | Hex     | 1B 61 n  |
/// | Decimal | 27 97 n  |
///
/// ## Behavior
///
/// - Only takes effect at the start of a line
/// - Reset to left by ESC @
///
/// ## Example
///
/// ```
/// use ticketera::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
#[inline]
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// PRINT MODE
// ============================================================================

/// Character attributes selectable through `ESC ! n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintStyle {
    pub bold: bool,
    pub double_height: bool,
    pub double_width: bool,
}

impl PrintStyle {
    /// Plain Font A text.
    pub const NONE: Self = Self {
        bold: false,
        double_height: false,
        double_width: false,
    };

    pub const BOLD: Self = Self {
        bold: true,
        double_height: false,
        double_width: false,
    };

    pub fn new(bold: bool, double_height: bool, double_width: bool) -> Self {
        Self {
            bold,
            double_height,
            double_width,
        }
    }

    /// The `n` parameter of `ESC ! n`.
    pub fn mode_byte(self) -> u8 {
        let mut n = 0u8;
        if self.bold {
            n |= 0x08;
        }
        if self.double_height {
            n |= 0x10;
        }
        if self.double_width {
            n |= 0x20;
        }
        n
    }
}

/// # Select Print Mode (ESC ! n)
///
/// Replaces the current print mode with `style`.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC ! n  |
/// | Hex     | 1B 21 n  |
/// | Decimal | 27 33 n  |
///
/// ## Example
///
/// ```
/// use ticketera::protocol::text::{set_style, PrintStyle};
///
/// assert_eq!(set_style(PrintStyle::BOLD), vec![0x1B, 0x21, 0x08]);
/// assert_eq!(set_style(PrintStyle::NONE), vec![0x1B, 0x21, 0x00]);
/// ```
#[inline]
pub fn set_style(style: PrintStyle) -> Vec<u8> {
    vec![ESC, b'!', style.mode_byte()]
}

// ============================================================================
// CODE PAGE
// ============================================================================

/// # Select Character Code Table (ESC t n)
///
/// `n = 16` selects WPC1252, which matches [`encoding::encode`].
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC t n   |
/// | Hex     | 1B 74 10  |
/// | Decimal | 27 116 16 |
#[inline]
pub fn codepage_wpc1252() -> Vec<u8> {
    vec![ESC, b't', 16]
}

// ============================================================================
// LINE OUTPUT
// ============================================================================

/// # Print Line
///
/// Encodes `text` as WPC1252 and terminates it with LF, which prints
/// the buffer and advances one line. An empty string prints a blank line.
///
/// ## Example
///
/// ```
/// use ticketera::protocol::text::print_line;
///
/// assert_eq!(print_line("OK"), vec![b'O', b'K', 0x0A]);
/// assert_eq!(print_line(""), vec![0x0A]);
/// ```
pub fn print_line(text: &str) -> Vec<u8> {
    let mut out = encoding::encode(text);
    out.push(LF);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
    }

    #[test]
    fn test_style_bits() {
        assert_eq!(PrintStyle::NONE.mode_byte(), 0x00);
        assert_eq!(PrintStyle::BOLD.mode_byte(), 0x08);
        assert_eq!(PrintStyle::new(true, true, false).mode_byte(), 0x18);
        assert_eq!(PrintStyle::new(true, true, true).mode_byte(), 0x38);
        assert_eq!(PrintStyle::new(false, false, true).mode_byte(), 0x20);
    }

    #[test]
    fn test_set_style() {
        assert_eq!(
            set_style(PrintStyle::new(true, true, true)),
            vec![0x1B, 0x21, 0x38]
        );
        assert_eq!(set_style(PrintStyle::default()), vec![0x1B, 0x21, 0x00]);
    }

    #[test]
    fn test_codepage() {
        assert_eq!(codepage_wpc1252(), vec![0x1B, 0x74, 0x10]);
    }

    #[test]
    fn test_print_line_encodes_spanish() {
        // ¡ = 0xA1, ñ = 0xF1, Ú = 0xDA in WPC1252
        assert_eq!(print_line("¡Año!"), vec![0xA1, b'A', 0xF1, b'o', b'!', 0x0A]);
        assert_eq!(print_line("AZÚCAR"), vec![b'A', b'Z', 0xDA, b'C', b'A', b'R', 0x0A]);
    }
}
