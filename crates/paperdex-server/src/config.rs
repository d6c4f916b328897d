//! Application configuration.

use anyhow::Context;
use paperdex_catalog::MarketDataMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Market data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDataConfig {
    /// `simulated` (offline jittered baselines) or `live` (DexScreener
    /// with baseline fallback).
    #[serde(default)]
    pub mode: MarketDataMode,
    /// DexScreener API base URL; only used in live mode.
    #[serde(default = "default_dexscreener_base_url")]
    pub dexscreener_base_url: String,
}

fn default_dexscreener_base_url() -> String {
    paperdex_catalog::dexscreener::DEFAULT_BASE_URL.to_string()
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            mode: MarketDataMode::default(),
            dexscreener_base_url: default_dexscreener_base_url(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub market_data: MarketDataConfig,
    /// User credited when requests carry no `userId`.
    #[serde(default = "default_demo_user_id")]
    pub demo_user_id: String,
}

fn default_demo_user_id() -> String {
    "user-1".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            market_data: MarketDataConfig::default(),
            demo_user_id: default_demo_user_id(),
        }
    }
}

impl AppConfig {
    /// Load configuration: `PAPERDEX_CONFIG` env var, then the default
    /// path, falling back to built-in defaults when no file exists.
    pub fn load() -> anyhow::Result<Self> {
        let config_path =
            std::env::var("PAPERDEX_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {path}"))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config from {path}"))
    }

    /// Bind address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
