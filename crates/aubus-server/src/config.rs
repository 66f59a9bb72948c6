//! Server configuration.
//!
//! Holds the values the CLI surface exposes (`--host`, `--port`, `--log`)
//! plus their defaults, and validates them before the listener binds.

use std::net::{IpAddr, SocketAddr};

use aubus_core::error::{BusError, Result};

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port.
pub const DEFAULT_PORT: u16 = 6000;
/// Default logging level.
pub const DEFAULT_LOG: &str = "INFO";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host/IP to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Logging level name (DEBUG, INFO, WARNING, ERROR).
    pub log: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            log: DEFAULT_LOG.into(),
        }
    }
}

impl ServerConfig {
    /// Check the config before the listener binds.
    pub fn validate(&self) -> Result<()> {
        self.host
            .parse::<IpAddr>()
            .map_err(|e| BusError::BadRequest(format!("host must be an IP literal: {e}")))?;
        Ok(())
    }

    /// Combined bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| BusError::BadRequest(format!("host must be an IP literal: {e}")))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Map a severity name onto a tracing filter directive.
    ///
    /// Accepts the usual names case-insensitively; anything unrecognized
    /// falls back to `info`.
    pub fn log_directive(&self) -> &'static str {
        match self.log.to_ascii_uppercase().as_str() {
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARNING" | "WARN" => "warn",
            "ERROR" => "error",
            "CRITICAL" => "error",
            _ => "info",
        }
    }
}
