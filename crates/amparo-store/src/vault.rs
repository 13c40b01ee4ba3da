//! Durable session side channel.
//!
//! Two string keys — an authenticated flag and the serialized identity —
//! written at login, read on process start, removed at logout. Stored in the
//! OS keychain when available, with a file fallback under the vault
//! directory (0700 dir, 0600 files on unix).

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use amparo_core::identity::Identity;

const FLAG_KEY: &str = "authenticated";
const IDENTITY_KEY: &str = "identity";

/// Side-channel I/O failure.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store error: {0}")]
    Storage(String),

    #[error("failed to encode identity: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable key-value store for the session.
pub struct SessionVault {
    service: String,
    dir: PathBuf,
    use_keyring: bool,
}

impl SessionVault {
    /// Keychain-backed vault with a file fallback under `dir`.
    #[must_use]
    pub fn new(service: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            service: service.into(),
            dir: dir.into(),
            use_keyring: true,
        }
    }

    /// File-backed vault with the keyring disabled. Tests use this to stay
    /// isolated from the OS keychain.
    #[must_use]
    pub fn file_only(dir: impl Into<PathBuf>) -> Self {
        Self {
            service: String::new(),
            dir: dir.into(),
            use_keyring: false,
        }
    }

    /// Default vault directory (`~/.amparo`).
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".amparo"))
    }

    /// Persist the authenticated flag and the identity.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the identity cannot be encoded or neither
    /// keyring nor file storage succeeds.
    pub fn store(&self, identity: &Identity) -> Result<(), SessionError> {
        let payload = serde_json::to_string(identity)?;
        self.put(FLAG_KEY, "true")?;
        self.put(IDENTITY_KEY, &payload)
    }

    /// Read the persisted session back. Returns the identity only when both
    /// keys are present and the flag is set.
    #[must_use]
    pub fn load(&self) -> Option<Identity> {
        let flag = self.get(FLAG_KEY)?;
        if flag.trim() != "true" {
            return None;
        }
        serde_json::from_str(&self.get(IDENTITY_KEY)?).ok()
    }

    /// Remove both persisted keys from keyring and disk.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if a fallback file cannot be removed. Keyring
    /// deletion failures are ignored; the entry may not exist.
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.use_keyring {
            for key in [FLAG_KEY, IDENTITY_KEY] {
                if let Ok(entry) = keyring::Entry::new(&self.service, key) {
                    let _ = entry.delete_credential();
                }
            }
        }
        for key in [FLAG_KEY, IDENTITY_KEY] {
            let path = self.dir.join(key);
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    SessionError::Storage(format!("failed to delete {}: {e}", path.display()))
                })?;
            }
        }
        Ok(())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if self.use_keyring {
            match keyring::Entry::new(&self.service, key) {
                Ok(entry) => match entry.set_password(value) {
                    Ok(()) => return Ok(()),
                    Err(error) => {
                        tracing::warn!(%error, "keyring store failed; falling back to file");
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, "keyring unavailable; falling back to file");
                }
            }
        }
        self.put_file(key, value)
    }

    fn get(&self, key: &str) -> Option<String> {
        if self.use_keyring
            && let Ok(entry) = keyring::Entry::new(&self.service, key)
            && let Ok(value) = entry.get_password()
            && !value.is_empty()
        {
            return Some(value);
        }
        self.get_file(key)
    }

    fn put_file(&self, key: &str, value: &str) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            SessionError::Storage(format!("mkdir {}: {e}", self.dir.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        let path = self.dir.join(key);
        fs::write(&path, value)
            .map_err(|e| SessionError::Storage(format!("write {}: {e}", path.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| SessionError::Storage(format!("chmod {}: {e}", path.display())))?;
        }
        Ok(())
    }

    fn get_file(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key))
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use amparo_core::enums::{Permission, StaffRole};

    use super::*;

    fn identity() -> Identity {
        Identity {
            id: "f1".into(),
            full_name: "Sandra Lima".into(),
            email: "sandra@x.com".into(),
            role: StaffRole::ConsultoraDeRh,
            permissions: vec![Permission::Users, Permission::Basic],
        }
    }

    #[test]
    fn file_store_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let vault = SessionVault::file_only(tmp.path().join("session"));

        assert!(vault.load().is_none());

        vault.store(&identity()).expect("store");
        let restored = vault.load().expect("load");
        assert_eq!(restored.email, "sandra@x.com");
        assert_eq!(restored.permissions, vec![Permission::Users, Permission::Basic]);

        vault.clear().expect("clear");
        assert!(vault.load().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn fallback_files_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let dir = tmp.path().join("session");
        let vault = SessionVault::file_only(&dir);
        vault.store(&identity()).expect("store");

        let mode = fs::metadata(dir.join("identity"))
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "identity file should be 0600");
    }

    #[test]
    fn load_requires_the_flag() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let dir = tmp.path().join("session");
        let vault = SessionVault::file_only(&dir);
        vault.store(&identity()).expect("store");

        fs::write(dir.join("authenticated"), "   \n").expect("overwrite flag");
        assert!(vault.load().is_none(), "blank flag should not restore");
    }
}
