//! # amparo-config
//!
//! Layered configuration loading for Amparo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AMPARO_*` prefix, `__` as separator)
//! 2. Project-level `.amparo/config.toml`
//! 3. User-level `~/.config/amparo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AMPARO_STORE__BASE_URL` -> `store.base_url`,
//! `AMPARO_SESSION__DIR` -> `session.dir`, etc. The `__` (double underscore)
//! separates nested config sections.

mod error;
mod session;
mod store;

pub use error::ConfigError;
pub use session::SessionConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AmparoConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl AmparoConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. This is the typical
    /// entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".amparo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("AMPARO_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("amparo").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or the current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = AmparoConfig::default();
        assert_eq!(config.store.base_url, "http://localhost:3001");
        assert_eq!(config.session.keyring_service, "amparo");
        assert!(config.session.dir.is_empty());
    }

    #[test]
    fn env_layer_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("AMPARO_STORE__BASE_URL", "http://records.internal:4000");
            jail.set_env("AMPARO_SESSION__KEYRING_SERVICE", "amparo-test");
            let config: AmparoConfig = AmparoConfig::figment().extract()?;
            assert_eq!(config.store.base_url, "http://records.internal:4000");
            assert_eq!(config.session.keyring_service, "amparo-test");
            Ok(())
        });
    }

    #[test]
    fn project_toml_layers_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".amparo")?;
            jail.create_file(
                ".amparo/config.toml",
                r#"
                    [store]
                    base_url = "http://from-toml:3001"

                    [session]
                    dir = "/var/lib/amparo"
                "#,
            )?;
            jail.set_env("AMPARO_STORE__BASE_URL", "http://from-env:3001");
            let config: AmparoConfig = AmparoConfig::figment().extract()?;
            assert_eq!(config.store.base_url, "http://from-env:3001");
            assert_eq!(config.session.dir, "/var/lib/amparo");
            Ok(())
        });
    }
}
