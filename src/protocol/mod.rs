//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level, stateless command builders for the
//! ESC/POS protocol. Each builder returns an owned byte fragment; a job is
//! the concatenation of fragments in call order.
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer control (init, cut)
//! - [`text`]: Alignment, print mode, line output
//! - [`encoding`]: Text encoding for the WPC1252 code table
//!
//! ## Usage Example
//!
//! ```
//! use ticketera::protocol::{commands, text};
//! use ticketera::protocol::text::{Alignment, PrintStyle};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(Alignment::Center));
//! data.extend(text::set_style(PrintStyle::BOLD));
//! data.extend(text::print_line("RECIBO"));
//! data.extend(text::set_style(PrintStyle::NONE));
//! data.extend(commands::cut_partial_feed(5));
//!
//! assert_eq!(&data[..2], &[0x1B, 0x40]);
//! ```

pub mod commands;
pub mod encoding;
pub mod text;
