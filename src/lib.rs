//! # Ticketera - Invoice Ticket Printing Library
//!
//! Ticketera turns a finished invoice into a thermal-printer receipt. It
//! provides:
//!
//! - **Renderer**: one invoice, three outputs (ESC/POS bytes, plain text, HTML)
//! - **Protocol implementation**: ESC/POS command builders with WPC1252 text
//! - **Delivery**: last-ticket file artifact or raw TCP to a network printer
//! - **Orchestration**: validate → render → select channel → deliver
//!
//! ## Quick Start
//!
//! ```no_run
//! use ticketera::{
//!     invoice::PrintRequest,
//!     printer::{HostEnvironment, PrinterProfile},
//!     printing::PrintingService,
//! };
//!
//! # async fn example(json: &str) -> Result<(), ticketera::TicketError> {
//! let request: PrintRequest = serde_json::from_str(json)
//!     .map_err(|e| ticketera::TicketError::InvalidInvoice(e.to_string()))?;
//!
//! let service = PrintingService::new(
//!     PrinterProfile::from_env()?,
//!     HostEnvironment::from_env()?,
//! );
//!
//! println!("{}", service.preview_text(&request)?);
//! service.print_invoice(&request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`invoice`] | Invoice snapshot and request envelope |
//! | [`catalog`] | Invoice type and status code tables |
//! | [`layout`] | Fixed-width text helpers and money formatting |
//! | [`protocol`] | ESC/POS command builders |
//! | [`render`] | Ticket layout and the three output builders |
//! | [`transport`] | File and network delivery channels |
//! | [`printing`] | Print orchestration and status |
//! | [`printer`] | Printer profile and host environment |
//! | [`server`] | HTTP adapter |
//! | [`error`] | Error types |

pub mod catalog;
pub mod error;
pub mod invoice;
pub mod layout;
pub mod printer;
pub mod printing;
pub mod protocol;
pub mod render;
pub mod server;
pub mod transport;

// Re-exports for convenience
pub use error::{TicketError, TicketResult};
pub use invoice::{InvoiceSnapshot, PrintRequest};
pub use printer::{HostEnvironment, PrinterProfile};
pub use printing::PrintingService;
pub use render::TicketRenderer;
