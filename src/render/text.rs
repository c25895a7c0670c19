//! Plain-text ticket preview.
//!
//! Centered lines are padded to the full ticket width; left lines are
//! printed as they are. Every line ends in `\n`.

use super::ticket::TicketLine;
use crate::layout::{self, TICKET_WIDTH};
use crate::protocol::text::Alignment;

/// Render ticket lines as fixed-width text.
pub fn render(lines: &[TicketLine]) -> String {
    let mut out = String::with_capacity(lines.len() * (TICKET_WIDTH + 1));
    for line in lines {
        match line.align {
            Alignment::Center if !line.is_blank() => {
                out.push_str(&layout::center(&line.text, TICKET_WIDTH));
            }
            _ => out.push_str(&line.text),
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_left() {
        let out = render(&[TicketLine::center("ab"), TicketLine::left("x"), TicketLine::blank()]);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows[0].chars().count(), TICKET_WIDTH);
        assert_eq!(rows[0].trim(), "ab");
        assert_eq!(rows[1], "x");
        assert_eq!(rows[2], "");
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_blank_center_line_stays_empty() {
        assert_eq!(render(&[TicketLine::center("")]), "\n");
    }
}
