//! # Error Types
//!
//! This module defines error types used throughout the ticketera library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ticket rendering and delivery
#[derive(Debug, Error)]
pub enum TicketError {
    /// The invoice is missing or has no line items
    #[error("Invalid invoice: {0}")]
    InvalidInvoice(String),

    /// Local filesystem failure while writing the ticket artifact
    #[error("I/O error at {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Connect or write failure against the network printer
    #[error("Network error ({addr}): {reason}")]
    NetworkFailure { addr: String, reason: String },

    /// Anything that should not happen (render panic, task failure)
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// Malformed configuration value
    #[error("Invalid config: {0}")]
    Config(String),
}

impl TicketError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoFailure {
            path: path.into(),
            source,
        }
    }

    /// Whether the caller supplied bad input (as opposed to a delivery or
    /// internal failure).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInvoice(_))
    }
}

/// Result type for ticket operations
pub type TicketResult<T> = Result<T, TicketError>;
