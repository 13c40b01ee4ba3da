//! Authentication state container.

use amparo_client::Collection;
use amparo_core::entities::Employee;
use amparo_core::identity::Identity;
use amparo_core::validate;

use crate::error::StoreError;
use crate::vault::SessionVault;

/// Authentication status gating all other views.
///
/// The "store" behind this container is the staff collection, repurposed for
/// credential lookup: every login attempt fetches the full collection and
/// scans it linearly for a plaintext email+password match. Acceptable only
/// because the collection is small.
pub struct SessionStore {
    staff: Collection<Employee>,
    vault: SessionVault,
    authenticated: bool,
    identity: Option<Identity>,
    loading: bool,
    error: Option<String>,
}

impl SessionStore {
    #[must_use]
    pub fn new(staff: Collection<Employee>, vault: SessionVault) -> Self {
        Self {
            staff,
            vault,
            authenticated: false,
            identity: None,
            loading: false,
            error: None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismiss a recorded failure message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Attempt a login.
    ///
    /// Form validation short-circuits locally. A transport failure and a
    /// credential mismatch record the same fixed message; the transport
    /// cause is logged, not shown.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.loading = true;
        self.error = None;
        if let Err(message) = validate::login_form(email, password) {
            self.loading = false;
            self.error = Some(message);
            return false;
        }

        let result = self.staff.list_all().await;
        self.loading = false;
        let staff = match result {
            Ok(staff) => staff,
            Err(error) => {
                tracing::warn!(%error, "staff fetch failed during login");
                self.authenticated = false;
                self.error = Some(StoreError::Credential.to_string());
                return false;
            }
        };

        match staff
            .iter()
            .find(|member| member.email == email && member.password == password)
        {
            Some(member) => {
                let identity = Identity::from_employee(member);
                if let Err(error) = self.vault.store(&identity) {
                    tracing::warn!(%error, "failed to persist session");
                    self.error = Some(error.to_string());
                }
                self.authenticated = true;
                self.identity = Some(identity);
                true
            }
            None => {
                self.authenticated = false;
                self.identity = None;
                self.error = Some(StoreError::Credential.to_string());
                false
            }
        }
    }

    /// Drop the session and remove both persisted keys.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.identity = None;
        self.error = None;
        if let Err(error) = self.vault.clear() {
            tracing::warn!(%error, "failed to clear persisted session");
        }
    }

    /// Restore a persisted session on process start. Trust-on-read: the
    /// stored identity is not re-validated against the staff collection.
    pub fn restore(&mut self) -> bool {
        if let Some(identity) = self.vault.load() {
            self.authenticated = true;
            self.identity = Some(identity);
        }
        self.authenticated
    }
}
