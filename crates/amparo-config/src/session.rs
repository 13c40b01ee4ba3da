//! Session persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default keyring service name.
fn default_keyring_service() -> String {
    "amparo".to_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Keyring service name for the persisted session keys. Override for
    /// testing to avoid touching production entries.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Vault directory for the file fallback. Empty means `~/.amparo`.
    #[serde(default)]
    pub dir: String,
}

impl SessionConfig {
    /// The configured vault directory, or the home default.
    #[must_use]
    pub fn vault_dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            dirs::home_dir().map(|home| home.join(".amparo"))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            dir: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins_over_home() {
        let config = SessionConfig {
            keyring_service: "amparo".into(),
            dir: "/tmp/amparo-test".into(),
        };
        assert_eq!(
            config.vault_dir(),
            Some(PathBuf::from("/tmp/amparo-test"))
        );
    }
}
