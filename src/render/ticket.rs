//! # Ticket Lines
//!
//! The logical ticket: an ordered list of lines, each with an alignment and
//! a print style. The plain-text and ESC/POS builders both consume this
//! list, so they always print the same content in the same order.
//!
//! ```text
//! InvoiceSnapshot + PrinterProfile → Vec<TicketLine> → text | ESC/POS bytes
//! ```

use chrono::NaiveDateTime;

use crate::invoice::{InvoiceSnapshot, LineItem};
use crate::layout::{self, TICKET_WIDTH};
use crate::printer::PrinterProfile;
use crate::protocol::text::{Alignment, PrintStyle};

/// Banner printed under the business header.
pub const TITLE_BANNER: &str = "*** FACTURA ***";

/// Items section header.
pub const DETAIL_HEADER: &str = "DESCRIPCION";

pub const THANK_YOU: &str = "¡Gracias por su compra!";
pub const COME_BACK: &str = "Vuelva pronto";

/// Timestamp layout on tickets (`05/12/2025 20:37:27`).
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One printed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketLine {
    pub text: String,
    pub align: Alignment,
    pub style: PrintStyle,
}

impl TicketLine {
    pub fn left(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Alignment::Left,
            style: PrintStyle::NONE,
        }
    }

    pub fn center(text: impl Into<String>) -> Self {
        Self {
            align: Alignment::Center,
            ..Self::left(text)
        }
    }

    pub fn blank() -> Self {
        Self::left("")
    }

    pub fn styled(mut self, style: PrintStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

fn heavy_rule() -> String {
    layout::rule('=', TICKET_WIDTH)
}

fn light_rule() -> String {
    layout::rule('-', TICKET_WIDTH)
}

/// Lay out the whole ticket.
pub fn ticket_lines(
    invoice: &InvoiceSnapshot,
    profile: &PrinterProfile,
    printed_at: NaiveDateTime,
) -> Vec<TicketLine> {
    let mut lines = Vec::with_capacity(32 + invoice.lines.len() * 2);

    push_header(&mut lines, profile);
    push_metadata(&mut lines, invoice);

    lines.push(TicketLine::left(DETAIL_HEADER).styled(PrintStyle::BOLD));
    lines.push(TicketLine::left(light_rule()));
    for item in &invoice.lines {
        push_item(&mut lines, item);
    }
    lines.push(TicketLine::left(light_rule()));

    push_totals(&mut lines, invoice);
    push_footer(&mut lines, printed_at);
    lines
}

fn push_header(lines: &mut Vec<TicketLine>, profile: &PrinterProfile) {
    lines.push(TicketLine::center(heavy_rule()));
    lines.push(
        TicketLine::center(profile.business_name.as_str())
            .styled(PrintStyle::new(true, true, true)),
    );

    if let Some(address) = profile.address() {
        lines.push(TicketLine::center(address));
    }
    if let Some(phone) = profile.phone() {
        lines.push(TicketLine::center(format!("Tel: {}", phone)));
    }
    if let Some(tax_id) = profile.tax_id() {
        lines.push(TicketLine::center(format!("RNC: {}", tax_id)));
    }

    lines.push(TicketLine::center(TITLE_BANNER).styled(PrintStyle::BOLD));
    lines.push(TicketLine::center(heavy_rule()));
    lines.push(TicketLine::blank());
}

fn push_metadata(lines: &mut Vec<TicketLine>, invoice: &InvoiceSnapshot) {
    lines.push(TicketLine::left(format!(
        "Caja: {} - {}",
        invoice.register.code, invoice.register.name
    )));
    lines.push(TicketLine::left(format!("Tipo: {}", invoice.type_name())));
    lines.push(TicketLine::left(format!("Estado: {}", invoice.status_name())));
    lines.push(TicketLine::left(format!(
        "Fecha: {}",
        invoice.issued_at.format(TIMESTAMP_FORMAT)
    )));
    lines.push(TicketLine::left(format!(
        "Factura #: {}",
        invoice.invoice_number()
    )));
    lines.push(TicketLine::left(light_rule()));
}

/// Product name on its own line, then `  qty x price = total (tax%)`.
fn push_item(lines: &mut Vec<TicketLine>, item: &LineItem) {
    lines.push(TicketLine::left(layout::truncate(
        &item.product_name,
        TICKET_WIDTH,
    )));
    lines.push(TicketLine::left(item_detail(item)));
}

pub(crate) fn item_detail(item: &LineItem) -> String {
    format!(
        "  {} x {} = {} ({}%)",
        item.quantity,
        layout::format_money(item.unit_price),
        layout::format_money(item.total),
        layout::format_percent(item.tax_percent)
    )
}

fn push_totals(lines: &mut Vec<TicketLine>, invoice: &InvoiceSnapshot) {
    lines.push(TicketLine::left(layout::format_total_line(
        "SUBTOTAL:",
        invoice.subtotal,
        TICKET_WIDTH,
    )));
    lines.push(TicketLine::left(layout::format_total_line(
        "ITBIS:",
        invoice.tax,
        TICKET_WIDTH,
    )));
    lines.push(TicketLine::left(heavy_rule()));
    lines.push(
        TicketLine::left(layout::format_total_line("TOTAL:", invoice.total, TICKET_WIDTH))
            .styled(PrintStyle::new(true, true, false)),
    );
    lines.push(TicketLine::left(heavy_rule()));
    lines.push(TicketLine::blank());
}

fn push_footer(lines: &mut Vec<TicketLine>, printed_at: NaiveDateTime) {
    lines.push(TicketLine::center(THANK_YOU));
    lines.push(TicketLine::center(COME_BACK));
    lines.push(TicketLine::blank());
    lines.push(TicketLine::center(format!(
        "Impreso: {}",
        printed_at.format(TIMESTAMP_FORMAT)
    )));
}
