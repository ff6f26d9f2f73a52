//! PixelVault runtime configuration schema.
//!
//! Typed for serde YAML deserialization. Every field has a default so a
//! partial (or absent) config file still produces a runnable service.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for PixelVault.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Address to bind the listener to.
    #[serde(default = "default_bind")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Base address baked into stored asset URLs. When unset, derived from
    /// the port. Changing this does not rewrite URLs persisted earlier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_base_url: Option<String>,

    /// Single allowed CORS origin. `None` disables cross-origin access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors_origin: Option<String>,
}

/// Blob directory and metadata database locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    /// Directory holding uploaded blobs. Created on startup if absent.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// SQLite database path. The parent directory is created on startup.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for rolling NDJSON log files. `None` logs to console only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl ServerConfig {
    /// The base address used to build stored asset URLs.
    pub fn base_url(&self) -> String {
        match &self.public_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_db_path() -> PathBuf {
    PathBuf::from("database/images.db")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind(),
            port: default_port(),
            public_base_url: None,
            cors_origin: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            db_path: default_db_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_runnable() {
        let config = VaultConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.storage.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.storage.db_path, PathBuf::from("database/images.db"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn base_url_derived_from_port() {
        let server = ServerConfig::default();
        assert_eq!(server.base_url(), "http://localhost:3000");
    }

    #[test]
    fn base_url_prefers_configured_and_trims_slash() {
        let server = ServerConfig {
            public_base_url: Some("https://photos.example.com/".into()),
            ..Default::default()
        };
        assert_eq!(server.base_url(), "https://photos.example.com");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: VaultConfig =
            serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.storage.upload_dir, PathBuf::from("uploads"));
    }
}
