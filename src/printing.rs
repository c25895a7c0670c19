//! # Print Orchestration
//!
//! [`PrintingService`] runs one print request through
//!
//! ```text
//! Validating → Rendering → SelectingChannel → Delivering → Succeeded | Failed
//! ```
//!
//! Validation failures stop before any rendering or I/O. Delivery failures
//! are logged with the invoice id and returned to the caller; nothing is
//! retried here beyond what the profile's [`NetworkPolicy`] allows.
//!
//! Requests are independent. Two concurrent requests against the same
//! network printer are not serialized, and concurrent file deliveries race
//! on the same artifact (last writer wins).
//!
//! [`NetworkPolicy`]: crate::printer::NetworkPolicy

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::{TicketError, TicketResult};
use crate::invoice::{InvoiceSnapshot, PrintRequest};
use crate::printer::{HostEnvironment, PrinterProfile};
use crate::render::TicketRenderer;
use crate::transport::{self, file, ChannelKind};

/// Stages of a print request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStage {
    Validating,
    Rendering,
    SelectingChannel,
    Delivering,
}

impl fmt::Display for PrintStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validating => "validating",
            Self::Rendering => "rendering",
            Self::SelectingChannel => "selecting-channel",
            Self::Delivering => "delivering",
        };
        f.write_str(name)
    }
}

/// Result of a successful print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintReport {
    pub invoice_id: Uuid,
    pub channel: ChannelKind,
    /// Artifact path or `host:port`.
    pub destination: String,
    pub bytes: usize,
}

/// Current printing configuration, as reported by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterStatus {
    pub environment: String,
    pub is_development: bool,
    pub use_file_printer: bool,
    pub mode: String,
    pub printer_name: String,
    pub network_host: String,
    pub business_name: String,
    pub message: String,
}

/// Validates, renders and delivers invoices for one printer profile.
#[derive(Debug, Clone)]
pub struct PrintingService {
    profile: PrinterProfile,
    environment: HostEnvironment,
}

impl PrintingService {
    pub fn new(profile: PrinterProfile, environment: HostEnvironment) -> Self {
        Self {
            profile,
            environment,
        }
    }

    pub fn profile(&self) -> &PrinterProfile {
        &self.profile
    }

    pub fn environment(&self) -> &HostEnvironment {
        &self.environment
    }

    fn renderer(&self) -> TicketRenderer<'_> {
        TicketRenderer::new(&self.profile)
    }

    /// Print one invoice.
    ///
    /// ## Errors
    ///
    /// - [`TicketError::InvalidInvoice`]: no data or no line items; nothing
    ///   was rendered or written
    /// - [`TicketError::Unexpected`]: the renderer panicked
    /// - [`TicketError::IoFailure`] / [`TicketError::NetworkFailure`]: the
    ///   selected channel failed
    pub async fn print_invoice(&self, request: &PrintRequest) -> TicketResult<PrintReport> {
        let invoice = request.snapshot().inspect_err(|e| {
            let id = request.data.as_ref().map(|d| d.id.to_string());
            error!(
                invoice_id = id.as_deref().unwrap_or("-"),
                stage = %PrintStage::Validating,
                error = %e,
                "Rejected print request"
            );
        })?;

        info!(
            invoice_id = %invoice.id,
            printer = %self.profile.printer_name,
            environment = %self.environment.name,
            "Printing invoice"
        );

        let data = self
            .render_guarded(|r| r.build_byte_protocol(invoice), PrintStage::Rendering)
            .map_err(TicketError::Unexpected)
            .inspect_err(|e| self.log_failure(invoice, PrintStage::Rendering, e))?;
        debug!(invoice_id = %invoice.id, bytes = data.len(), "Rendered ticket");

        let channel = transport::select_channel(&self.profile, &self.environment);
        let channel_kind = channel.kind();
        let destination = channel.destination();
        info!(
            invoice_id = %invoice.id,
            stage = %PrintStage::SelectingChannel,
            channel = %channel_kind,
            destination = %destination,
            "Channel selected"
        );

        channel
            .deliver(&data)
            .await
            .inspect_err(|e| self.log_failure(invoice, PrintStage::Delivering, e))?;

        info!(
            invoice_id = %invoice.id,
            channel = %channel_kind,
            destination = %destination,
            "Invoice printed"
        );

        Ok(PrintReport {
            invoice_id: invoice.id,
            channel: channel_kind,
            destination,
            bytes: data.len(),
        })
    }

    /// Plain-text preview of the ticket.
    pub fn preview_text(&self, request: &PrintRequest) -> TicketResult<String> {
        let invoice = request.snapshot()?;
        self.render_guarded(|r| r.build_text_preview(invoice), PrintStage::Rendering)
            .map_err(TicketError::InvalidInvoice)
    }

    /// HTML preview of the ticket.
    pub fn preview_html(&self, request: &PrintRequest) -> TicketResult<String> {
        let invoice = request.snapshot()?;
        self.render_guarded(|r| r.build_html_preview(invoice), PrintStage::Rendering)
            .map_err(TicketError::InvalidInvoice)
    }

    /// Describe where tickets currently go.
    pub fn status(&self) -> PrinterStatus {
        let is_development = self.environment.is_development();
        let kind = ChannelKind::for_profile(&self.profile, &self.environment);
        let use_file_printer = kind == ChannelKind::File;
        let target = self.profile.network_target();

        let (mode, network_host, message) = match kind {
            ChannelKind::File => (
                "File (archivo local)",
                "(no aplica)".to_string(),
                format!(
                    "Los tickets se guardan en {}/{}",
                    file::OUTPUT_DIR,
                    file::ARTIFACT_NAME
                ),
            ),
            ChannelKind::Network => (
                "Network (impresora de red)",
                target.clone(),
                format!("Los tickets se envían a {}", target),
            ),
        };

        PrinterStatus {
            environment: self.environment.name.clone(),
            is_development,
            use_file_printer,
            mode: mode.to_string(),
            printer_name: self.profile.printer_name.clone(),
            network_host,
            business_name: self.profile.business_name.clone(),
            message,
        }
    }

    /// Run a renderer call, turning a panic into an error message.
    fn render_guarded<T>(
        &self,
        build: impl FnOnce(&TicketRenderer<'_>) -> T,
        stage: PrintStage,
    ) -> Result<T, String> {
        let renderer = self.renderer();
        panic::catch_unwind(AssertUnwindSafe(|| build(&renderer))).map_err(|payload| {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            format!("{} failed: {}", stage, detail)
        })
    }

    fn log_failure(&self, invoice: &InvoiceSnapshot, stage: PrintStage, err: &TicketError) {
        error!(
            invoice_id = %invoice.id,
            printer = %self.profile.printer_name,
            stage = %stage,
            error = %err,
            "Print failed"
        );
    }
}
