//! # Printer Configuration
//!
//! This module defines the printer profile (business identity plus
//! connection parameters) and the hosting environment indicator.
//!
//! Both are loaded once at startup and handed to
//! [`PrintingService`](crate::printing::PrintingService) by value; nothing
//! reads them as globals.
//!
//! ## Environment Variables
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `TICKET_PRINTER_HOST` | `host` | `192.168.0.50` |
//! | `TICKET_PRINTER_PORT` | `port` | `9100` |
//! | `TICKET_PRINTER_NAME` | `printer_name` | `Caja01` |
//! | `TICKET_BUSINESS_NAME` | `business_name` | `MI NEGOCIO` |
//! | `TICKET_BUSINESS_ADDRESS` | `business_address` | none |
//! | `TICKET_BUSINESS_PHONE` | `business_phone` | none |
//! | `TICKET_BUSINESS_TAX_ID` | `business_tax_id` | none |
//! | `TICKET_USE_FILE_PRINTER` | `use_file_printer` | `true` |
//! | `TICKET_NETWORK_TIMEOUT_MS` | `network.timeout` | `5000` |
//! | `TICKET_NETWORK_ATTEMPTS` | `network.attempts` | `1` |
//! | `TICKET_ENVIRONMENT` | `HostEnvironment::name` | `Production` |
//! | `TICKET_CONTENT_ROOT` | `HostEnvironment::content_root` | current dir |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{TicketError, TicketResult};

/// Default raw-printing port on network receipt printers.
pub const DEFAULT_PORT: u16 = 9100;

/// Default connect/write timeout for network delivery.
pub const DEFAULT_NETWORK_TIMEOUT: Duration = Duration::from_secs(5);

/// # Network Delivery Policy
///
/// Explicit bounds on a network delivery. `attempts = 1` is a single try
/// with no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPolicy {
    /// Applied separately to connect and to write.
    #[serde(with = "millis")]
    pub timeout: Duration,
    pub attempts: u32,
}

impl Default for NetworkPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_NETWORK_TIMEOUT,
            attempts: 1,
        }
    }
}

/// # Printer Profile
///
/// Business identity printed in the ticket header, and where to send the
/// byte stream.
///
/// `use_file_printer` defaults to `true` so a fresh install never writes to
/// a network address by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterProfile {
    pub host: String,
    pub port: u16,
    pub printer_name: String,
    pub business_name: String,
    pub business_address: Option<String>,
    pub business_phone: Option<String>,
    /// RNC
    pub business_tax_id: Option<String>,
    pub use_file_printer: bool,
    pub network: NetworkPolicy,
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self {
            host: "192.168.0.50".into(),
            port: DEFAULT_PORT,
            printer_name: "Caja01".into(),
            business_name: "MI NEGOCIO".into(),
            business_address: None,
            business_phone: None,
            business_tax_id: None,
            use_file_printer: true,
            network: NetworkPolicy::default(),
        }
    }
}

impl PrinterProfile {
    /// Load the profile from `TICKET_*` environment variables.
    ///
    /// # Errors
    ///
    /// [`TicketError::Config`] for unparsable numbers or booleans, or an
    /// empty business name.
    pub fn from_env() -> TicketResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> TicketResult<Self> {
        let defaults = Self::default();
        let text = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let profile = Self {
            host: text("TICKET_PRINTER_HOST").unwrap_or(defaults.host),
            port: parse_or("TICKET_PRINTER_PORT", text("TICKET_PRINTER_PORT"), defaults.port)?,
            printer_name: text("TICKET_PRINTER_NAME").unwrap_or(defaults.printer_name),
            business_name: text("TICKET_BUSINESS_NAME").unwrap_or(defaults.business_name),
            business_address: text("TICKET_BUSINESS_ADDRESS"),
            business_phone: text("TICKET_BUSINESS_PHONE"),
            business_tax_id: text("TICKET_BUSINESS_TAX_ID"),
            use_file_printer: parse_bool(
                "TICKET_USE_FILE_PRINTER",
                text("TICKET_USE_FILE_PRINTER"),
                defaults.use_file_printer,
            )?,
            network: NetworkPolicy {
                timeout: Duration::from_millis(parse_or(
                    "TICKET_NETWORK_TIMEOUT_MS",
                    text("TICKET_NETWORK_TIMEOUT_MS"),
                    defaults.network.timeout.as_millis() as u64,
                )?),
                attempts: parse_or(
                    "TICKET_NETWORK_ATTEMPTS",
                    text("TICKET_NETWORK_ATTEMPTS"),
                    defaults.network.attempts,
                )?,
            },
        };

        profile.validate()?;
        Ok(profile)
    }

    /// # Errors
    ///
    /// [`TicketError::Config`] when a required value is missing or out of
    /// range.
    pub fn validate(&self) -> TicketResult<()> {
        if self.business_name.trim().is_empty() {
            return Err(TicketError::Config("business name is required".into()));
        }
        if self.network.attempts == 0 {
            return Err(TicketError::Config("network attempts must be at least 1".into()));
        }
        if self.network.timeout.is_zero() {
            return Err(TicketError::Config("network timeout must be positive".into()));
        }
        Ok(())
    }

    /// `host:port` of the network printer. IPv6 literals are bracketed.
    pub fn network_target(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Optional header fields, skipping empty strings.
    pub fn address(&self) -> Option<&str> {
        present(&self.business_address)
    }

    pub fn phone(&self) -> Option<&str> {
        present(&self.business_phone)
    }

    pub fn tax_id(&self) -> Option<&str> {
        present(&self.business_tax_id)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> TicketResult<T> {
    match raw {
        None => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| TicketError::Config(format!("{key}: cannot parse {v:?}"))),
    }
}

fn parse_bool(key: &str, raw: Option<String>, default: bool) -> TicketResult<bool> {
    match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => Err(TicketError::Config(format!(
            "{key}: expected a boolean, got {other:?}"
        ))),
    }
}

/// # Hosting Environment
///
/// Which environment the process runs in, and the content root under which
/// `PrinterOutput/` is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEnvironment {
    pub name: String,
    pub content_root: PathBuf,
}

impl HostEnvironment {
    pub const DEVELOPMENT: &'static str = "Development";
    pub const PRODUCTION: &'static str = "Production";

    pub fn new(name: impl Into<String>, content_root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            content_root: content_root.into(),
        }
    }

    pub fn development(content_root: impl Into<PathBuf>) -> Self {
        Self::new(Self::DEVELOPMENT, content_root)
    }

    pub fn production(content_root: impl Into<PathBuf>) -> Self {
        Self::new(Self::PRODUCTION, content_root)
    }

    /// Read `TICKET_ENVIRONMENT` and `TICKET_CONTENT_ROOT`.
    ///
    /// # Errors
    ///
    /// [`TicketError::Config`] when no content root is set and the current
    /// directory cannot be determined.
    pub fn from_env() -> TicketResult<Self> {
        let name = std::env::var("TICKET_ENVIRONMENT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::PRODUCTION.into());

        let content_root = match std::env::var("TICKET_CONTENT_ROOT") {
            Ok(root) if !root.trim().is_empty() => PathBuf::from(root),
            _ => std::env::current_dir()
                .map_err(|e| TicketError::Config(format!("cannot resolve content root: {e}")))?,
        };

        Ok(Self { name, content_root })
    }

    pub fn is_development(&self) -> bool {
        self.name.eq_ignore_ascii_case(Self::DEVELOPMENT)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_favor_file_delivery() {
        let profile = PrinterProfile::from_lookup(lookup(&[])).unwrap();
        assert_eq!(profile, PrinterProfile::default());
        assert!(profile.use_file_printer);
        assert_eq!(profile.network_target(), "192.168.0.50:9100");
        assert_eq!(profile.network.attempts, 1);
    }

    #[test]
    fn test_from_lookup_reads_every_field() {
        let profile = PrinterProfile::from_lookup(lookup(&[
            ("TICKET_PRINTER_HOST", "10.1.1.7"),
            ("TICKET_PRINTER_PORT", "9101"),
            ("TICKET_PRINTER_NAME", "Caja02"),
            ("TICKET_BUSINESS_NAME", "COLMADO LA ESQUINA"),
            ("TICKET_BUSINESS_ADDRESS", "Calle 1 #23"),
            ("TICKET_BUSINESS_PHONE", "809-555-1234"),
            ("TICKET_BUSINESS_TAX_ID", "123456789"),
            ("TICKET_USE_FILE_PRINTER", "false"),
            ("TICKET_NETWORK_TIMEOUT_MS", "1500"),
            ("TICKET_NETWORK_ATTEMPTS", "3"),
        ]))
        .unwrap();

        assert_eq!(profile.network_target(), "10.1.1.7:9101");
        assert_eq!(profile.printer_name, "Caja02");
        assert_eq!(profile.phone(), Some("809-555-1234"));
        assert_eq!(profile.tax_id(), Some("123456789"));
        assert!(!profile.use_file_printer);
        assert_eq!(profile.network.timeout, Duration::from_millis(1500));
        assert_eq!(profile.network.attempts, 3);
    }

    #[test]
    fn test_empty_optional_fields_are_absent() {
        let profile =
            PrinterProfile::from_lookup(lookup(&[("TICKET_BUSINESS_ADDRESS", "   ")])).unwrap();
        assert_eq!(profile.address(), None);

        let profile = PrinterProfile {
            business_phone: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(profile.phone(), None);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let err = PrinterProfile::from_lookup(lookup(&[("TICKET_PRINTER_PORT", "abc")])).unwrap_err();
        assert!(matches!(err, TicketError::Config(_)));

        let err =
            PrinterProfile::from_lookup(lookup(&[("TICKET_USE_FILE_PRINTER", "maybe")])).unwrap_err();
        assert!(matches!(err, TicketError::Config(_)));

        let err =
            PrinterProfile::from_lookup(lookup(&[("TICKET_NETWORK_ATTEMPTS", "0")])).unwrap_err();
        assert!(matches!(err, TicketError::Config(_)));
    }

    #[test]
    fn test_profile_from_json() {
        let profile: PrinterProfile = serde_json::from_str(
            r#"{ "business_name": "TEST", "use_file_printer": false, "network": { "timeout": 250, "attempts": 2 } }"#,
        )
        .unwrap();
        assert_eq!(profile.business_name, "TEST");
        assert_eq!(profile.port, DEFAULT_PORT);
        assert_eq!(profile.network.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_network_target_brackets_ipv6() {
        let mut profile = PrinterProfile {
            host: "fe80::1".into(),
            ..Default::default()
        };
        assert_eq!(profile.network_target(), "[fe80::1]:9100");
        assert!(profile.network_target().parse::<std::net::SocketAddr>().is_ok());

        profile.host = "[::1]".into();
        assert_eq!(profile.network_target(), "[::1]:9100");

        profile.host = "printer.local".into();
        assert_eq!(profile.network_target(), "printer.local:9100");
    }

    #[test]
    fn test_environment_is_development() {
        assert!(HostEnvironment::development("/tmp").is_development());
        assert!(HostEnvironment::new("development", "/tmp").is_development());
        assert!(!HostEnvironment::production("/tmp").is_development());
        assert!(!HostEnvironment::new("Staging", "/tmp").is_development());
    }
}
