//! # ESC/POS Code Generation
//!
//! Converts ticket lines to a printer job. Alignment is emitted only when it
//! changes; every styled line is followed by an explicit style reset.
//!
//! ## Job Layout
//!
//! ```text
//! ESC @            initialize
//! ESC t 16         WPC1252
//! ESC ! 0          plain
//! ...lines...      [ESC a n] [ESC ! n] text LF [ESC ! 0]
//! LF LF            trailing blank lines
//! GS V B 5         feed 5 lines, partial cut
//! ```

use super::ticket::TicketLine;
use crate::protocol::text::{Alignment, PrintStyle};
use crate::protocol::{commands, text};

/// Lines fed between the last printed line and the cutter.
pub const CUT_FEED_LINES: u8 = 5;

/// Blank lines printed after the footer, before the cut.
const TRAILING_BLANK_LINES: usize = 2;

/// Compile ticket lines into ESC/POS bytes.
pub fn render(lines: &[TicketLine]) -> Vec<u8> {
    let mut fragments: Vec<Vec<u8>> = Vec::with_capacity(lines.len() * 2 + 8);

    fragments.push(commands::init());
    fragments.push(text::codepage_wpc1252());
    fragments.push(text::set_style(PrintStyle::NONE));

    let mut current_align: Option<Alignment> = None;
    for line in lines {
        if !line.is_blank() && current_align != Some(line.align) {
            fragments.push(text::align(line.align));
            current_align = Some(line.align);
        }

        if line.style == PrintStyle::NONE {
            fragments.push(text::print_line(&line.text));
        } else {
            fragments.push(text::set_style(line.style));
            fragments.push(text::print_line(&line.text));
            fragments.push(text::set_style(PrintStyle::NONE));
        }
    }

    for _ in 0..TRAILING_BLANK_LINES {
        fragments.push(text::print_line(""));
    }
    fragments.push(commands::cut_partial_feed(CUT_FEED_LINES));

    fragments.concat()
}
