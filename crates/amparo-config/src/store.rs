//! Record store endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default collection endpoint, matching the local development store.
fn default_base_url() -> String {
    "http://localhost:3001".to_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Base URL of the record store; one collection path per entity hangs
    /// off it. No timeout is configured — the transport default applies.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_store() {
        assert_eq!(StoreConfig::default().base_url, "http://localhost:3001");
    }
}
