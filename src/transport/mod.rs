//! # Delivery Channels
//!
//! Where a rendered job goes.
//!
//! ## Available Channels
//!
//! - [`file`]: overwrite `<content root>/PrinterOutput/ticket-ultimo.bin`
//! - [`network`]: raw TCP to the configured `host:port`
//!
//! ## Selection
//!
//! | `use_file_printer` | Environment | Channel |
//! |--------------------|-------------|---------|
//! | `true` | any | File |
//! | `false` | Development | File |
//! | `false` | other | Network |
//!
//! [`select_channel`] is pure; it only looks at the profile and the
//! environment.

pub mod file;
pub mod network;

use std::fmt;

use serde::Serialize;

use crate::error::TicketResult;
use crate::printer::{HostEnvironment, PrinterProfile};

pub use file::FileChannel;
pub use network::NetworkChannel;

/// Which channel a request was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelKind {
    File,
    Network,
}

impl ChannelKind {
    /// Choose the channel for a profile in an environment.
    pub fn for_profile(profile: &PrinterProfile, env: &HostEnvironment) -> Self {
        if profile.use_file_printer || env.is_development() {
            Self::File
        } else {
            Self::Network
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Network => f.write_str("network"),
        }
    }
}

/// A configured delivery target.
#[derive(Debug, Clone)]
pub enum DeliveryChannel {
    File(FileChannel),
    Network(NetworkChannel),
}

impl DeliveryChannel {
    pub fn kind(&self) -> ChannelKind {
        match self {
            Self::File(_) => ChannelKind::File,
            Self::Network(_) => ChannelKind::Network,
        }
    }

    /// Human-readable destination (artifact path or `host:port`).
    pub fn destination(&self) -> String {
        match self {
            Self::File(channel) => channel.artifact_path().display().to_string(),
            Self::Network(channel) => channel.target().to_string(),
        }
    }

    /// Send one complete job.
    pub async fn deliver(&self, data: &[u8]) -> TicketResult<()> {
        match self {
            Self::File(channel) => channel.deliver(data).await,
            Self::Network(channel) => channel.deliver(data).await,
        }
    }
}

/// Build the channel for a profile in an environment.
pub fn select_channel(profile: &PrinterProfile, env: &HostEnvironment) -> DeliveryChannel {
    match ChannelKind::for_profile(profile, env) {
        ChannelKind::File => DeliveryChannel::File(FileChannel::new(&env.content_root)),
        ChannelKind::Network => DeliveryChannel::Network(NetworkChannel::new(
            profile.network_target(),
            profile.network,
        )),
    }
}
