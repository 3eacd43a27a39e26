use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::utils::error::{PixifyError, PixifyResult};

/// Address used when `--address` is not given
pub const DEFAULT_ADDRESS: &str = "0.0.0.0:8000";

/// Development server options
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket the server binds to
    pub address: SocketAddr,

    /// Directory the generated site is written to and served from
    pub destination: PathBuf,
}

impl ServerConfig {
    /// Create a server configuration from a `host:port` string
    pub fn new<P: AsRef<Path>>(address: &str, destination: P) -> PixifyResult<Self> {
        Ok(ServerConfig {
            address: parse_address(address)?,
            destination: destination.as_ref().to_path_buf(),
        })
    }

    /// Get the full URL (e.g., "http://localhost:8000/")
    pub fn url(&self) -> String {
        let ip = self.address.ip();
        let host = if ip.is_loopback() || ip.is_unspecified() {
            "localhost".to_string()
        } else if ip.is_ipv6() {
            format!("[{}]", ip)
        } else {
            ip.to_string()
        };

        format!("http://{}:{}/", host, self.address.port())
    }
}

/// Parse a `host:port` string, accepting `localhost` for 127.0.0.1
pub fn parse_address(address: &str) -> PixifyResult<SocketAddr> {
    let address = address.trim();
    let resolved = match address.strip_prefix("localhost:") {
        Some(port) => format!("127.0.0.1:{}", port),
        None => address.to_string(),
    };

    resolved.parse().map_err(|e| {
        PixifyError::Config(format!(
            "Invalid address '{}', expected HOST:PORT ({})",
            address, e
        ))
    })
}
