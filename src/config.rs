//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";
pub const DEFAULT_OUTPUT_NAME: &str = "rally";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid RALLY_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: IpAddr,
    pub port: u16,
    /// Directory holding the compiled `pkg/` assets (wasm, js, css).
    pub site_root: String,
    /// Base file name of the compiled client bundle.
    pub output_name: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `RALLY_ADDR`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `RALLY_SITE_ROOT`: default `target/site`
    /// - `RALLY_OUTPUT_NAME`: default `rally`
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = match std::env::var("RALLY_ADDR") {
            Ok(value) => value.parse().map_err(|source| ConfigError::InvalidAddr { value, source })?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => DEFAULT_PORT,
        };
        let site_root = env_or("RALLY_SITE_ROOT", DEFAULT_SITE_ROOT);
        let output_name = env_or("RALLY_OUTPUT_NAME", DEFAULT_OUTPUT_NAME);

        Ok(Self { addr, port, site_root, output_name })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}
