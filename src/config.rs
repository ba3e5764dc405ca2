// src/config.rs

//! Manages client configuration: loading, defaults, and validation.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use tracing::info;

/// Connection settings for a SpinelDB-compatible store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// `host:port` of the store to talk to.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// How long to wait for the TCP connection to be established.
    #[serde(with = "humantime_serde", default = "default_connect_timeout")]
    pub connect_timeout: Duration,

    /// How long to wait for a single command reply.
    #[serde(with = "humantime_serde", default = "default_read_timeout")]
    pub read_timeout: Duration,
}

fn default_addr() -> String {
    "127.0.0.1:7878".to_string()
}
fn default_connect_timeout() -> Duration {
    Duration::from_secs(2)
}
fn default_read_timeout() -> Duration {
    Duration::from_secs(2)
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            addr: default_addr(),
            connect_timeout: default_connect_timeout(),
            read_timeout: default_read_timeout(),
        }
    }
}

impl ClientConfig {
    /// Creates a new `ClientConfig` instance by reading and parsing a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        let config: ClientConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from '{path}'"))?;

        config.validate()?;
        info!(addr = %config.addr, "loaded client configuration");
        Ok(config)
    }

    /// Validates the resolved configuration to ensure logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.addr.is_empty() {
            return Err(anyhow!("addr cannot be empty"));
        }
        if !self.addr.contains(':') {
            return Err(anyhow!("addr must be in host:port form"));
        }
        if self.connect_timeout.is_zero() {
            return Err(anyhow!("connect_timeout cannot be 0"));
        }
        if self.read_timeout.is_zero() {
            return Err(anyhow!("read_timeout cannot be 0"));
        }
        Ok(())
    }
}
