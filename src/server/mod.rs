//! # HTTP Server for Invoice Printing
//!
//! Thin adapter over [`PrintingService`]. Authentication is expected in
//! front of this server and is not handled here.
//!
//! ## Usage
//!
//! ```bash
//! ticketera serve --listen 0.0.0.0:8080
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | POST | `/api/printing/invoice` | 204, 400 or 500 |
//! | POST | `/api/printing/invoice/preview` | `{ "preview": text }` |
//! | POST | `/api/printing/invoice/preview/html` | `{ "html": html }` |
//! | POST | `/api/printing/invoice/render` | `text/html` page |
//! | GET | `/api/printing/status` | [`PrinterStatus`](crate::printing::PrinterStatus) |

mod handlers;
mod state;

pub use state::{DEFAULT_LISTEN_ADDR, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{TicketError, TicketResult};
use crate::printing::PrintingService;
use state::AppState;

/// Build the application router.
pub fn router(service: PrintingService) -> Router {
    let app_state = Arc::new(AppState::new(service));

    Router::new()
        .route("/api/printing/invoice", post(handlers::printing::print))
        .route(
            "/api/printing/invoice/preview",
            post(handlers::printing::preview),
        )
        .route(
            "/api/printing/invoice/preview/html",
            post(handlers::printing::preview_html),
        )
        .route(
            "/api/printing/invoice/render",
            post(handlers::printing::render),
        )
        .route("/api/printing/status", get(handlers::printing::status))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use ticketera::printer::{HostEnvironment, PrinterProfile};
/// use ticketera::printing::PrintingService;
/// use ticketera::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), ticketera::error::TicketError> {
/// let service = PrintingService::new(
///     PrinterProfile::default(),
///     HostEnvironment::development("."),
/// );
///
/// serve(ServerConfig::default(), service).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig, service: PrintingService) -> TicketResult<()> {
    let status = service.status();
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            TicketError::Unexpected(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!(
        listen = %config.listen_addr,
        environment = %status.environment,
        mode = %status.mode,
        printer = %status.printer_name,
        "Ticketera HTTP server starting"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| TicketError::Unexpected(format!("Server error: {}", e)))?;

    Ok(())
}
