//! # ESC/POS Control Commands
//!
//! This module implements the printer-control subset of the Epson ESC/POS
//! command set used by 80mm network receipt printers (TM-T20, TM-T88 and
//! the many clones that speak the same dialect on TCP port 9100).
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC ! n`, `GS V m n`
//!
//! ## Statelessness
//!
//! Every builder returns a self-contained fragment. Fragments are appended
//! to the job buffer in call order and never reordered: the printer applies
//! them as a stream, so the caller owns mode changes and their resets.
//!
//! ## Reference
//!
//! Based on "ESC/POS Application Programming Guide" by Seiko Epson Corp.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Hex: 0x1B, Decimal: 27
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size, cutter and graphics commands.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets modes to their power-on defaults.
/// Sent at the start of every ticket.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print mode (bold, double height/width) cleared
/// - Alignment reset to left
/// - Character code table reset to the memory-switch default
///
/// ## Example
///
/// ```
/// use ticketera::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Feed, Then Partial Cut (GS V 66 n)
///
/// Feeds the paper `n` lines past the print position, then performs a
/// partial cut that leaves a small hinge so the ticket does not drop.
///
/// ## Protocol Details
///
/// | Format  | Bytes       |
/// |---------|-------------|
/// | ASCII   | GS V B n    |
/// | Hex     | 1D 56 42 n  |
/// | Decimal | 29 86 66 n  |
///
/// ## Example
///
/// ```
/// use ticketera::protocol::commands;
///
/// assert_eq!(commands::cut_partial_feed(5), vec![0x1D, 0x56, 0x42, 5]);
/// ```
#[inline]
pub fn cut_partial_feed(lines: u8) -> Vec<u8> {
    vec![GS, b'V', b'B', lines]
}

// ============================================================================
// TESTS
// ============================================================================
