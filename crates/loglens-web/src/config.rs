//! Configuration loading for Loglens.
//! Reads loglens.toml from the current directory or path in LOGLENS_CONFIG
//! env var; a missing file means stock defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on an uploaded log file, in mebibytes.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }
fn default_max_upload_mb() -> usize { 32 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_mb: default_max_upload_mb(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    #[serde(default = "default_detector_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_detector_url() -> String { "http://localhost:8000".to_string() }
fn default_timeout_secs() -> u64 { 120 }

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            base_url: default_detector_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from loglens.toml.
    /// Checks LOGLENS_CONFIG env var first, then the current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("LOGLENS_CONFIG")
            .unwrap_or_else(|_| "loglens.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.detector.base_url, "http://localhost:8000");
        assert_eq!(config.detector.timeout_secs, 120);
    }

    #[test]
    fn test_partial_file_fills_missing_keys() {
        let config: Config = toml::from_str(
            r#"
            [detector]
            base_url = "http://detector:8000"
            "#,
        )
        .unwrap();
        assert_eq!(config.detector.base_url, "http://detector:8000");
        assert_eq!(config.detector.timeout_secs, 120);
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.max_upload_mb, 32);
    }

    #[test]
    fn test_full_file() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            max_upload_mb = 64

            [detector]
            base_url = "http://10.0.0.5:8000"
            timeout_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_upload_mb, 64);
        assert_eq!(config.detector.timeout_secs, 30);
    }
}
