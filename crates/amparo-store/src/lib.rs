//! # amparo-store
//!
//! Entity state containers for Amparo.
//!
//! [`EntityStore`] is the single source of truth for one collection's
//! client-visible state (`items`, `loading`, `error`, `current`) and the sole
//! authority for reconciling mutation results into it. The same state machine
//! serves every entity type; [`ChildStore`] layers the participant-name
//! denormalization rule on top for the four child collections.
//!
//! [`SessionStore`] follows the same shape for authentication, with the staff
//! collection as its "store" and a durable [`SessionVault`] side channel for
//! persistence across restarts.
//!
//! Failures never propagate out of a container: each operation records a
//! human-readable message in its error slot and the caller reads state.

pub mod children;
pub mod dashboard;
pub mod entity;
pub mod error;
pub mod session;
pub mod vault;

pub use children::ChildStore;
pub use dashboard::DashboardStats;
pub use entity::EntityStore;
pub use error::StoreError;
pub use session::SessionStore;
pub use vault::{SessionError, SessionVault};
