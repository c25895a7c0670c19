//! # Ticketera CLI
//!
//! Command-line interface for invoice ticket printing.
//!
//! ## Usage
//!
//! ```bash
//! # Print an invoice (file or network, per TICKET_* settings)
//! ticketera print invoice.json
//!
//! # Show the plain-text ticket
//! ticketera preview invoice.json
//!
//! # Write the HTML preview to stdout
//! ticketera preview --html invoice.json > ticket.html
//!
//! # Show where tickets go
//! ticketera status
//!
//! # Start the HTTP API
//! ticketera serve --listen 0.0.0.0:8080
//! ```
//!
//! Configuration is read from the environment (and `.env` when present).

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use ticketera::{
    HostEnvironment, PrintRequest, PrinterProfile, PrintingService, TicketError,
    server::{self, DEFAULT_LISTEN_ADDR, ServerConfig},
};

/// Ticketera - Invoice ticket printer utility
#[derive(Parser, Debug)]
#[command(name = "ticketera")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render and deliver an invoice
    Print {
        /// Invoice request JSON (`{ "ok": true, "data": { ... } }`)
        file: PathBuf,
    },

    /// Print the ticket preview to stdout
    Preview {
        /// Invoice request JSON
        file: PathBuf,

        /// Emit the HTML document instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Show the current printing configuration
    Status,

    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
        listen: String,
    },
}

#[tokio::main]
async fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ticketera=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), TicketError> {
    let cli = Cli::parse();

    let service = PrintingService::new(PrinterProfile::from_env()?, HostEnvironment::from_env()?);

    match cli.command {
        Commands::Print { file } => {
            let request = read_request(&file)?;
            let report = service.print_invoice(&request).await?;
            println!(
                "Printed invoice {} via {} ({} bytes) -> {}",
                report.invoice_id, report.channel, report.bytes, report.destination
            );
        }
        Commands::Preview { file, html } => {
            let request = read_request(&file)?;
            let output = if html {
                service.preview_html(&request)?
            } else {
                service.preview_text(&request)?
            };
            print!("{}", output);
        }
        Commands::Status => {
            let status = service.status();
            let json = serde_json::to_string_pretty(&status)
                .map_err(|e| TicketError::Unexpected(e.to_string()))?;
            println!("{}", json);
        }
        Commands::Serve { listen } => {
            server::serve(ServerConfig { listen_addr: listen }, service).await?;
        }
    }

    Ok(())
}

fn read_request(path: &Path) -> Result<PrintRequest, TicketError> {
    let raw = std::fs::read_to_string(path).map_err(|source| TicketError::IoFailure {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| TicketError::InvalidInvoice(format!("{}: {}", path.display(), e)))
}
