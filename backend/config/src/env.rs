//! Environment variable overrides for config values.
//!
//! Applied after the YAML file is loaded, so deployments can adjust a single
//! knob without a config file edit.

use crate::schema::VaultConfig;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

/// Apply `PIXELVAULT_*` (and `RUST_LOG`) overrides from the process
/// environment.
pub fn apply_env_overrides(config: &mut VaultConfig) {
    apply_overrides_from(config, &std::env::vars().collect());
}

/// Apply overrides using a provided map (useful for testing).
pub fn apply_overrides_from(config: &mut VaultConfig, env: &HashMap<String, String>) {
    if let Some(bind) = env.get("PIXELVAULT_BIND") {
        config.server.bind_address = bind.clone();
    }
    if let Some(port) = env.get("PIXELVAULT_PORT") {
        match port.parse() {
            Ok(p) => config.server.port = p,
            Err(_) => warn!(value = %port, "Ignoring unparseable PIXELVAULT_PORT"),
        }
    }
    if let Some(url) = env.get("PIXELVAULT_BASE_URL") {
        config.server.public_base_url = Some(url.clone());
    }
    if let Some(origin) = env.get("PIXELVAULT_CORS_ORIGIN") {
        config.server.cors_origin = Some(origin.clone());
    }
    if let Some(dir) = env.get("PIXELVAULT_UPLOAD_DIR") {
        config.storage.upload_dir = PathBuf::from(dir);
    }
    if let Some(db) = env.get("PIXELVAULT_DB") {
        config.storage.db_path = PathBuf::from(db);
    }
    if let Some(level) = env.get("RUST_LOG") {
        config.logging.level = level.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply() {
        let mut config = VaultConfig::default();
        let env = HashMap::from([
            ("PIXELVAULT_PORT".to_string(), "8080".to_string()),
            ("PIXELVAULT_UPLOAD_DIR".to_string(), "/srv/blobs".to_string()),
            (
                "PIXELVAULT_BASE_URL".to_string(),
                "https://cdn.example.com".to_string(),
            ),
        ]);

        apply_overrides_from(&mut config, &env);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.upload_dir, PathBuf::from("/srv/blobs"));
        assert_eq!(config.server.base_url(), "https://cdn.example.com");
    }

    #[test]
    fn bad_port_is_ignored() {
        let mut config = VaultConfig::default();
        let env = HashMap::from([("PIXELVAULT_PORT".to_string(), "not-a-port".to_string())]);

        apply_overrides_from(&mut config, &env);

        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn empty_env_leaves_defaults() {
        let mut config = VaultConfig::default();
        apply_overrides_from(&mut config, &HashMap::new());
        assert_eq!(config.server.bind_address, "0.0.0.0");
    }
}
