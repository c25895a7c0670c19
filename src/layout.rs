//! # Fixed-Width Text Layout
//!
//! Pure helpers for laying out text on a character-cell ticket. Lengths are
//! counted in characters, not bytes, so accented product names line up.
//!
//! All ticket builders take their width from [`TICKET_WIDTH`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Ticket width in characters (80mm paper, Font A).
pub const TICKET_WIDTH: usize = 42;

/// Prefix printed before every currency amount.
pub const CURRENCY_PREFIX: &str = "RD$ ";

/// Center `text` within `width` characters.
///
/// Text that does not fit is cut to exactly `width` characters with no
/// ellipsis. Otherwise the left padding is `(width - len) / 2` and the right
/// padding takes the remainder.
///
/// ```
/// use ticketera::layout::center;
///
/// assert_eq!(center("abc", 8), "  abc   ");
/// assert_eq!(center("abcdef", 4), "abcd");
/// ```
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }

    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Shorten `text` to at most `max_length` characters, ending in `...` when
/// anything was cut.
///
/// ```
/// use ticketera::layout::truncate;
///
/// assert_eq!(truncate("Chocolate", 20), "Chocolate");
/// assert_eq!(truncate("Chocolate Embajador", 10), "Chocola...");
/// ```
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    if max_length < 3 {
        return ".".repeat(max_length);
    }

    let mut out: String = text.chars().take(max_length - 3).collect();
    out.push_str("...");
    out
}

/// Format an amount with exactly two decimals, rounding half away from zero.
/// No thousands separators.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Format a percentage without decimals (`18.00` -> `18`).
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.0}", rounded)
}

/// Format a currency amount with the `RD$ ` prefix.
pub fn format_currency(amount: Decimal) -> String {
    format!("{}{}", CURRENCY_PREFIX, format_money(amount))
}

/// Label on the left, currency amount flush right, at least one space
/// between them.
///
/// Lines longer than `width` are left as they are; keep labels short.
///
/// ```
/// use rust_decimal::Decimal;
/// use ticketera::layout::format_total_line;
///
/// let line = format_total_line("TOTAL:", Decimal::new(9500, 2), 20);
/// assert_eq!(line, "TOTAL:     RD$ 95.00");
/// ```
pub fn format_total_line(label: &str, amount: Decimal, width: usize) -> String {
    let amount = format_currency(amount);
    let used = label.chars().count() + amount.chars().count();
    let spaces = width.saturating_sub(used).max(1);
    format!("{}{}{}", label, " ".repeat(spaces), amount)
}

/// A full-width rule made of `ch`.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_center_pads_to_width() {
        for text in ["", "a", "TEST BUSINESS", "*** FACTURA ***", "¡Gracias por su compra!"] {
            let out = center(text, TICKET_WIDTH);
            assert_eq!(len(&out), TICKET_WIDTH, "{:?}", text);
            assert!(out.contains(text));
        }
    }

    #[test]
    fn test_center_floor_on_left() {
        // 5 spare columns: 2 left, 3 right
        assert_eq!(center("abc", 8), "  abc   ");
        assert_eq!(center("ab", 6), "  ab  ");
    }

    #[test]
    fn test_center_cuts_long_text() {
        let long = "X".repeat(TICKET_WIDTH + 10);
        assert_eq!(center(&long, TICKET_WIDTH), "X".repeat(TICKET_WIDTH));
        assert_eq!(center("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("Chocolate Embajador", TICKET_WIDTH), "Chocolate Embajador");
        assert_eq!(truncate("12345", 5), "12345");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let name = "Galletas de chocolate con relleno de vainilla extra grande";
        let out = truncate(name, TICKET_WIDTH);
        assert_eq!(len(&out), TICKET_WIDTH);
        assert!(out.ends_with("..."));
        assert!(out.starts_with("Galletas de chocolate"));
    }

    #[test]
    fn test_truncate_counts_characters() {
        let out = truncate("Piña colada añejo español", 10);
        assert_eq!(out, "Piña co...");
        assert_eq!(len(&out), 10);
    }

    #[test]
    fn test_truncate_tiny_limit() {
        assert_eq!(truncate("abcdef", 2), "..");
        assert_eq!(truncate("abcdef", 3), "...");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(95, 0)), "95.00");
        assert_eq!(format_money(Decimal::new(8051, 2)), "80.51");
        assert_eq!(format_money(Decimal::new(12345, 3)), "12.35");
        assert_eq!(format_money(Decimal::new(1234567, 2)), "12345.67");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Decimal::new(18, 0)), "18");
        assert_eq!(format_percent(Decimal::new(1800, 2)), "18");
        assert_eq!(format_percent(Decimal::ZERO), "0");
    }

    #[test]
    fn test_format_total_line_right_aligns() {
        let line = format_total_line("SUBTOTAL:", Decimal::new(8051, 2), TICKET_WIDTH);
        assert_eq!(len(&line), TICKET_WIDTH);
        assert!(line.starts_with("SUBTOTAL:"));
        assert!(line.ends_with("RD$ 80.51"));
    }

    #[test]
    fn test_format_total_line_overflow_keeps_one_space() {
        let line = format_total_line("A VERY LONG LABEL", Decimal::new(100, 0), 10);
        assert_eq!(line, "A VERY LONG LABEL RD$ 100.00");
    }

    #[test]
    fn test_rule() {
        assert_eq!(rule('=', 4), "====");
        assert_eq!(len(&rule('-', TICKET_WIDTH)), TICKET_WIDTH);
    }
}
