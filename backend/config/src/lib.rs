//! `pixelvault-config` — PixelVault runtime configuration management.
//!
//! Provides:
//! - Typed config schema (server, storage, logging)
//! - YAML read/write with atomic replace
//! - `PIXELVAULT_*` environment overrides
//! - Default value application for first runs

pub mod env;
pub mod io;
pub mod schema;

pub use env::apply_env_overrides;
pub use io::{config_file_path, data_dir, load_config, write_config};
pub use schema::{LoggingConfig, ServerConfig, StorageConfig, VaultConfig};

use anyhow::Result;
use std::path::Path;

/// Load a config file and apply environment overrides on top.
///
/// This is the main entry point for loading a config at runtime. A missing
/// file yields the built-in defaults, so a bare `pixelvault serve` works
/// without any setup.
pub async fn load_and_prepare(path: &Path) -> Result<VaultConfig> {
    let mut config = load_config(path).await?;
    apply_env_overrides(&mut config);
    Ok(config)
}
