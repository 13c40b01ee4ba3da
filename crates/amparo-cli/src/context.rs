//! Application context: every container, built once at startup.

use anyhow::Context as _;

use amparo_client::RecordStore;
use amparo_config::AmparoConfig;
use amparo_core::entities::{
    Company, Employee, Evaluation, FollowUpVisit, ParentInterview, Participant, WorkPlacement,
};
use amparo_store::{ChildStore, EntityStore, SessionStore, SessionVault};

/// The containers are constructed here and passed by reference into command
/// handlers — no ambient global lookup.
pub struct AppContext {
    pub session: SessionStore,
    pub participants: EntityStore<Participant>,
    pub companies: EntityStore<Company>,
    pub staff: EntityStore<Employee>,
    pub evaluations: ChildStore<Evaluation>,
    pub interviews: ChildStore<ParentInterview>,
    pub placements: ChildStore<WorkPlacement>,
    pub visits: ChildStore<FollowUpVisit>,
}

impl AppContext {
    /// Build the record store and all containers from configuration.
    ///
    /// # Errors
    ///
    /// Fails when no vault directory can be resolved.
    pub fn init(config: &AmparoConfig) -> anyhow::Result<Self> {
        let store = RecordStore::new(config.store.base_url.clone());
        let vault_dir = config
            .session
            .vault_dir()
            .context("home directory not found — cannot persist the session")?;
        let vault = SessionVault::new(config.session.keyring_service.clone(), vault_dir);

        Ok(Self {
            session: SessionStore::new(store.staff(), vault),
            participants: EntityStore::new(store.participants()),
            companies: EntityStore::new(store.companies()),
            staff: EntityStore::new(store.staff()),
            evaluations: ChildStore::new(store.evaluations()),
            interviews: ChildStore::new(store.interviews()),
            placements: ChildStore::new(store.placements()),
            visits: ChildStore::new(store.visits()),
        })
    }

    /// Restore the persisted session; fail when none is present.
    ///
    /// # Errors
    ///
    /// Returns an error telling the user to log in.
    pub fn require_session(&mut self) -> anyhow::Result<()> {
        if self.session.restore() {
            Ok(())
        } else {
            anyhow::bail!("not logged in — run `amparo login`")
        }
    }
}
