//! # Printer Module
//!
//! This module provides the printer profile and hosting environment.
//!
//! ## Modules
//!
//! - [`config`]: Profile, network policy, environment indicator

pub mod config;

pub use config::{HostEnvironment, NetworkPolicy, PrinterProfile};
