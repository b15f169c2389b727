//! Server configuration from command line flags and environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fastener_core::DataSource;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;

/// Local development front ends
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 6] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
    "http://localhost:8000",
    "http://127.0.0.1:8000",
];

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "fastener-api")]
#[command(about = "HTTP API for fastener weights, HSN/GST codes and standards")]
pub struct ServerConfig {
    /// Bind address for the HTTP server.
    #[arg(short, long, default_value = "0.0.0.0", env = "FASTENER_BIND")]
    pub bind: String,

    /// HTTP port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "FASTENER_PORT")]
    pub port: u16,

    /// Read datasets from this directory instead of the bundled copies.
    #[arg(long, env = "FASTENER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Origin allowed to make cross-origin requests (repeatable).
    #[arg(
        long = "allowed-origin",
        env = "FASTENER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_ALLOWED_ORIGINS
    )]
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind
            .trim()
            .parse()
            .with_context(|| format!("invalid bind address: {}", self.bind))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn data_source(&self) -> DataSource {
        match &self.data_dir {
            Some(dir) => DataSource::Directory(dir.clone()),
            None => DataSource::Embedded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["fastener-api"]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.data_source(), DataSource::Embedded);
        assert_eq!(config.allowed_origins.len(), DEFAULT_ALLOWED_ORIGINS.len());
        assert_eq!(config.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::try_parse_from([
            "fastener-api",
            "--bind",
            "127.0.0.1",
            "--port",
            "9000",
            "--data-dir",
            "/srv/fastener-data",
            "--allowed-origin",
            "https://a.example,https://b.example",
        ])
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(
            config.data_source(),
            DataSource::Directory(PathBuf::from("/srv/fastener-data"))
        );
        assert_eq!(config.allowed_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_bad_bind_address() {
        let config = ServerConfig::try_parse_from(["fastener-api", "--bind", "not an address"]).unwrap();
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_ipv6_bind_address() {
        let config = ServerConfig::try_parse_from(["fastener-api", "--bind", "::", "--port", "8080"]).unwrap();
        let addr = config.socket_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.to_string(), "[::]:8080");

        let config = ServerConfig::try_parse_from(["fastener-api", "--bind", "::1"]).unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:8000");
    }
}
