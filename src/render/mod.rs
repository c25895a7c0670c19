//! # Invoice Renderer
//!
//! Produces the three representations of a ticket from an invoice snapshot:
//!
//! | Output | Builder | Consumer |
//! |--------|---------|----------|
//! | ESC/POS bytes | [`TicketRenderer::build_byte_protocol`] | printer |
//! | Plain text | [`TicketRenderer::build_text_preview`] | logs, API preview |
//! | HTML | [`TicketRenderer::build_html_preview`] | browser preview |
//!
//! All builders are pure: no I/O and no mutation. The bytes and the text
//! are generated from the same [`ticket::ticket_lines`] list.
//!
//! Callers are expected to have validated the snapshot (at least one line
//! item) first; see [`PrintingService`](crate::printing::PrintingService).
//!
//! ## Example
//!
//! ```no_run
//! use ticketera::printer::PrinterProfile;
//! use ticketera::render::TicketRenderer;
//! # fn load() -> ticketera::invoice::InvoiceSnapshot { unimplemented!() }
//!
//! let profile = PrinterProfile::default();
//! let invoice = load();
//!
//! let renderer = TicketRenderer::new(&profile);
//! let bytes = renderer.build_byte_protocol(&invoice);
//! let text = renderer.build_text_preview(&invoice);
//! ```

pub mod escpos;
pub mod html;
pub mod text;
pub mod ticket;

use chrono::{Local, NaiveDateTime};

use crate::invoice::InvoiceSnapshot;
use crate::printer::PrinterProfile;

pub use ticket::TicketLine;

/// Renders tickets for one printer profile.
#[derive(Debug, Clone, Copy)]
pub struct TicketRenderer<'a> {
    profile: &'a PrinterProfile,
    printed_at: NaiveDateTime,
}

impl<'a> TicketRenderer<'a> {
    /// Renderer stamped with the current local time.
    pub fn new(profile: &'a PrinterProfile) -> Self {
        Self {
            profile,
            printed_at: Local::now().naive_local(),
        }
    }

    /// Override the "Impreso:" timestamp.
    pub fn printed_at(mut self, printed_at: NaiveDateTime) -> Self {
        self.printed_at = printed_at;
        self
    }

    pub fn lines(&self, invoice: &InvoiceSnapshot) -> Vec<TicketLine> {
        ticket::ticket_lines(invoice, self.profile, self.printed_at)
    }

    /// Fixed-width plain text ticket.
    pub fn build_text_preview(&self, invoice: &InvoiceSnapshot) -> String {
        text::render(&self.lines(invoice))
    }

    /// ESC/POS job, ending in a partial cut.
    pub fn build_byte_protocol(&self, invoice: &InvoiceSnapshot) -> Vec<u8> {
        escpos::render(&self.lines(invoice))
    }

    /// Self-contained HTML document.
    pub fn build_html_preview(&self, invoice: &InvoiceSnapshot) -> String {
        html::render(invoice, self.profile, self.printed_at)
    }
}
