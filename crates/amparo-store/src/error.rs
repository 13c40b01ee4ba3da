//! Container error taxonomy.

use thiserror::Error;

use amparo_client::TransportError;

/// Failures a container can record into its error slot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record store request failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A required related record is not present in already-loaded state.
    /// Checked locally, before any network call.
    #[error("{entity} {id} is not loaded")]
    ReferenceNotFound { entity: &'static str, id: String },

    /// A local form-level check failed.
    #[error("{0}")]
    Validation(String),

    /// No staff record matched the supplied credentials. Deliberately the
    /// same message for a transport failure during login.
    #[error("invalid email or password")]
    Credential,
}
