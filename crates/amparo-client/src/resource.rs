//! The typed contract between an entity and its remote collection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// An entity persisted in a named remote collection.
///
/// Implementations tie a persisted record type to its collection path, its
/// draft (pre-persist) and partial-update payload types, and the store-level
/// defaults the client stamps into every create request.
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Collection path segment under the store base URL.
    const COLLECTION: &'static str;

    /// Singular label used in user-facing messages.
    const LABEL: &'static str;

    /// Pre-persist record shape, without an id.
    type Draft: Serialize + Send + Sync;

    /// Partial-update payload; only set fields are serialized.
    type Update: Serialize + Send + Sync;

    /// The store-assigned identifier.
    fn id(&self) -> &str;

    /// Defaults merged over the serialized draft before submission
    /// (initial status, zeroed counters, creation timestamp). Defaults win
    /// over draft fields of the same name.
    fn creation_defaults(now: DateTime<Utc>) -> Vec<(&'static str, serde_json::Value)>;

    /// Local draft checks, run by the containers before any request.
    ///
    /// # Errors
    ///
    /// Returns the first failed check's user-facing message.
    fn validate_draft(_draft: &Self::Draft) -> Result<(), String> {
        Ok(())
    }
}

/// An entity that references a participant and denormalizes its display name.
pub trait ChildResource: Resource {
    /// Document key used for the equality filter query.
    const PARENT_FIELD: &'static str = "usuarioId";

    /// The referenced participant's id on a persisted record.
    fn parent_id(&self) -> &str;

    /// The referenced participant's id on a draft.
    fn draft_parent_id(draft: &Self::Draft) -> &str;

    /// Write the resolved participant display name into the draft.
    fn set_parent_name(draft: &mut Self::Draft, name: &str);
}
