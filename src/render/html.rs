//! Styled HTML ticket preview.
//!
//! A self-contained document (inline `<style>`, no external assets) meant
//! for an iframe or a new browser tab. Every caller-supplied string goes
//! through [`escape`].

use std::fmt::Write;

use chrono::NaiveDateTime;
use tracing::warn;

use super::ticket::{COME_BACK, THANK_YOU, TIMESTAMP_FORMAT};
use crate::invoice::{InvoiceSnapshot, LineItem};
use crate::layout::{format_currency, format_percent};
use crate::printer::PrinterProfile;

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
.ticket { width: 300px; max-width: 100%; margin: 0 auto; padding: 15px; font-family: 'Courier New', Courier, monospace; font-size: 12px; background: #fff; box-shadow: 0 0 10px rgba(0,0,0,0.15); border-radius: 3px; }
.ticket-header { text-align: center; border-bottom: 2px dashed #000; padding-bottom: 10px; margin-bottom: 10px; }
.business-name { font-size: 18px; font-weight: bold; margin-bottom: 5px; }
.business-info { font-size: 11px; color: #333; }
.invoice-title { font-size: 16px; font-weight: bold; margin-top: 10px; background: #000; color: #fff; padding: 5px; }
.invoice-info { margin: 10px 0; padding: 10px 0; border-bottom: 1px dashed #ccc; }
.invoice-info p { margin: 3px 0; }
.invoice-info strong { display: inline-block; min-width: 70px; }
.items-header { display: flex; justify-content: space-between; font-weight: bold; border-bottom: 1px solid #000; padding: 5px 0; margin-bottom: 5px; }
.item { border-bottom: 1px dotted #ccc; padding: 8px 0; }
.item-name { font-weight: bold; margin-bottom: 3px; }
.item-details { display: flex; justify-content: space-between; font-size: 11px; color: #555; }
.totals { margin-top: 10px; padding-top: 10px; border-top: 2px dashed #000; }
.total-line { display: flex; justify-content: space-between; margin: 5px 0; }
.total-line.grand-total { font-size: 16px; font-weight: bold; border-top: 2px solid #000; border-bottom: 2px solid #000; padding: 8px 0; margin-top: 10px; }
.footer { text-align: center; margin-top: 15px; padding-top: 10px; border-top: 2px dashed #000; }
.footer p { margin: 5px 0; }
.thank-you { font-size: 14px; font-weight: bold; }
.timestamp { font-size: 10px; color: #666; margin-top: 10px; }
"#;

/// Escape text for use in element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the HTML document.
pub fn render(
    invoice: &InvoiceSnapshot,
    profile: &PrinterProfile,
    printed_at: NaiveDateTime,
) -> String {
    let mut body = String::with_capacity(4096);
    if let Err(e) = write_body(&mut body, invoice, profile, printed_at) {
        warn!(error = %e, "HTML preview body incomplete");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>Factura {}</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"ticket\">\n{}</div>\n</body>\n</html>\n",
        invoice.invoice_number(),
        STYLE,
        body
    )
}

fn write_body(
    out: &mut String,
    invoice: &InvoiceSnapshot,
    profile: &PrinterProfile,
    printed_at: NaiveDateTime,
) -> std::fmt::Result {
    write_header(out, profile)?;
    write_info(out, invoice)?;
    write_items(out, &invoice.lines)?;
    write_totals(out, invoice)?;
    write_footer(out, printed_at)
}

fn write_header(out: &mut String, profile: &PrinterProfile) -> std::fmt::Result {
    writeln!(out, "<div class=\"ticket-header\">")?;
    writeln!(
        out,
        "<div class=\"business-name\">{}</div>",
        escape(&profile.business_name)
    )?;
    if let Some(address) = profile.address() {
        writeln!(out, "<div class=\"business-info\">{}</div>", escape(address))?;
    }
    if let Some(phone) = profile.phone() {
        writeln!(out, "<div class=\"business-info\">Tel: {}</div>", escape(phone))?;
    }
    if let Some(tax_id) = profile.tax_id() {
        writeln!(out, "<div class=\"business-info\">RNC: {}</div>", escape(tax_id))?;
    }
    writeln!(out, "<div class=\"invoice-title\">★ FACTURA ★</div>")?;
    writeln!(out, "</div>")
}

fn write_info(out: &mut String, invoice: &InvoiceSnapshot) -> std::fmt::Result {
    writeln!(out, "<div class=\"invoice-info\">")?;
    writeln!(
        out,
        "<p><strong>Caja:</strong> {} - {}</p>",
        escape(&invoice.register.code),
        escape(&invoice.register.name)
    )?;
    writeln!(out, "<p><strong>Tipo:</strong> {}</p>", escape(&invoice.type_name()))?;
    writeln!(
        out,
        "<p><strong>Estado:</strong> {}</p>",
        escape(&invoice.status_name())
    )?;
    writeln!(
        out,
        "<p><strong>Fecha:</strong> {}</p>",
        invoice.issued_at.format("%d/%m/%Y %H:%M")
    )?;
    writeln!(
        out,
        "<p><strong>Factura #:</strong> {}</p>",
        invoice.invoice_number()
    )?;
    writeln!(out, "</div>")
}

fn write_items(out: &mut String, items: &[LineItem]) -> std::fmt::Result {
    writeln!(
        out,
        "<div class=\"items-header\"><span>DESCRIPCIÓN</span><span>TOTAL</span></div>"
    )?;
    writeln!(out, "<div class=\"items\">")?;
    for item in items {
        writeln!(out, "<div class=\"item\">")?;
        writeln!(
            out,
            "<div class=\"item-name\">{}</div>",
            escape(&item.product_name)
        )?;
        writeln!(
            out,
            "<div class=\"item-details\"><span>{} x {}</span><span>{}</span></div>",
            item.quantity,
            format_currency(item.unit_price),
            format_currency(item.total)
        )?;
        writeln!(
            out,
            "<div class=\"item-details\"><span>ITBIS ({}%): {}</span></div>",
            format_percent(item.tax_percent),
            format_currency(item.tax)
        )?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")
}

fn write_totals(out: &mut String, invoice: &InvoiceSnapshot) -> std::fmt::Result {
    writeln!(out, "<div class=\"totals\">")?;
    for (class, label, amount) in [
        ("total-line", "SUBTOTAL:", invoice.subtotal),
        ("total-line", "ITBIS:", invoice.tax),
        ("total-line grand-total", "TOTAL:", invoice.total),
    ] {
        writeln!(
            out,
            "<div class=\"{}\"><span>{}</span><span>{}</span></div>",
            class,
            label,
            format_currency(amount)
        )?;
    }
    writeln!(out, "</div>")
}

fn write_footer(out: &mut String, printed_at: NaiveDateTime) -> std::fmt::Result {
    writeln!(out, "<div class=\"footer\">")?;
    writeln!(out, "<p class=\"thank-you\">{}</p>", THANK_YOU)?;
    writeln!(out, "<p>{}</p>", COME_BACK)?;
    writeln!(
        out,
        "<p class=\"timestamp\">Impreso: {}</p>",
        printed_at.format(TIMESTAMP_FORMAT)
    )?;
    writeln!(out, "</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::fixtures::sample_invoice;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("Piña"), "Piña");
    }

    #[test]
    fn test_document_shape() {
        let invoice = sample_invoice();
        let html = render(&invoice, &PrinterProfile::default(), invoice.issued_at);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("class=\"total-line grand-total\"><span>TOTAL:</span><span>RD$ 95.00</span>"));
        assert!(html.contains("ITBIS (18%): RD$ 14.49"));
        assert!(html.contains("Fecha:</strong> 05/12/2025 20:37</p>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_body_sections_in_order() {
        let invoice = sample_invoice();
        let mut body = String::new();
        write_body(&mut body, &invoice, &PrinterProfile::default(), invoice.issued_at).unwrap();

        let positions: Vec<usize> = [
            "class=\"ticket-header\"",
            "class=\"invoice-info\"",
            "class=\"items\"",
            "class=\"totals\"",
            "class=\"footer\"",
        ]
        .iter()
        .map(|needle| body.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_profile_fields_escaped() {
        let invoice = sample_invoice();
        let profile = PrinterProfile {
            business_name: "Bar <b>".into(),
            business_address: Some("A & B".into()),
            ..Default::default()
        };
        let html = render(&invoice, &profile, invoice.issued_at);
        assert!(html.contains("Bar &lt;b&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(!html.contains("Bar <b>"));
    }
}
