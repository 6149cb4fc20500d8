//! Gateway Configuration
//!
//! Everything the gateway needs to run is passed in explicitly: the bind
//! address, the two collaborator base addresses, the backend service name,
//! and the partitioning scheme values. Nothing is derived from ambient
//! runtime context.

use anyhow::Result;
use std::net::SocketAddr;

pub const DEFAULT_SERVICE_NAME: &str = "roomstore";
pub const DEFAULT_PARTITION_COUNT: i64 = 4;
pub const DEFAULT_RANGE_WIDTH: i64 = 100;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    /// Reverse-proxy-style base address of the room store backend.
    pub backend_base: String,
    /// Base address of the topology service.
    pub directory_base: String,
    /// Backend service name the directory is asked about.
    pub service_name: String,
    /// Must match the values the backend's key ranges were provisioned
    /// with; a mismatch misroutes keyed operations silently.
    pub partition_count: i64,
    pub range_width: i64,
}

impl GatewayConfig {
    /// Parses the process arguments (`args[0]` being the program name).
    ///
    /// `--bind`, `--backend` and `--directory` are required; the service
    /// name and scheme values default to the stock provisioning.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut bind_addr: Option<SocketAddr> = None;
        let mut backend_base: Option<String> = None;
        let mut directory_base: Option<String> = None;
        let mut service_name = DEFAULT_SERVICE_NAME.to_string();
        let mut partition_count = DEFAULT_PARTITION_COUNT;
        let mut range_width = DEFAULT_RANGE_WIDTH;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind_addr = Some(required_value(args, i)?.parse()?);
                    i += 2;
                }
                "--backend" => {
                    backend_base = Some(required_value(args, i)?.to_string());
                    i += 2;
                }
                "--directory" => {
                    directory_base = Some(required_value(args, i)?.to_string());
                    i += 2;
                }
                "--service" => {
                    service_name = required_value(args, i)?.to_string();
                    i += 2;
                }
                "--partitions" => {
                    partition_count = required_value(args, i)?.parse()?;
                    i += 2;
                }
                "--range-width" => {
                    range_width = required_value(args, i)?.parse()?;
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        Ok(Self {
            bind_addr: bind_addr.ok_or_else(|| anyhow::anyhow!("--bind is required"))?,
            backend_base: backend_base
                .ok_or_else(|| anyhow::anyhow!("--backend is required"))?,
            directory_base: directory_base
                .ok_or_else(|| anyhow::anyhow!("--directory is required"))?,
            service_name,
            partition_count,
            range_width,
        })
    }
}

fn required_value<'a>(args: &'a [String], i: usize) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", args[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("room-gateway")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_full_argument_set() {
        let config = GatewayConfig::from_args(&args(&[
            "--bind",
            "127.0.0.1:4000",
            "--backend",
            "http://127.0.0.1:19081/rooms",
            "--directory",
            "http://127.0.0.1:19080",
            "--service",
            "gamerooms",
            "--partitions",
            "8",
            "--range-width",
            "250",
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 4000);
        assert_eq!(config.service_name, "gamerooms");
        assert_eq!(config.partition_count, 8);
        assert_eq!(config.range_width, 250);
    }

    #[test]
    fn test_scheme_defaults() {
        let config = GatewayConfig::from_args(&args(&[
            "--bind",
            "127.0.0.1:4000",
            "--backend",
            "http://127.0.0.1:19081/rooms",
            "--directory",
            "http://127.0.0.1:19080",
        ]))
        .unwrap();

        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
        assert_eq!(config.partition_count, DEFAULT_PARTITION_COUNT);
        assert_eq!(config.range_width, DEFAULT_RANGE_WIDTH);
    }

    #[test]
    fn test_missing_required_flags() {
        assert!(GatewayConfig::from_args(&args(&["--bind", "127.0.0.1:4000"])).is_err());
        assert!(GatewayConfig::from_args(&args(&["--bind"])).is_err());
    }
}
