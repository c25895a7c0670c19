//! Server state and configuration.

use crate::printing::PrintingService;

/// Default listen address for `ticketera serve`.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub service: PrintingService,
}

impl AppState {
    pub fn new(service: PrintingService) -> Self {
        Self { service }
    }
}
