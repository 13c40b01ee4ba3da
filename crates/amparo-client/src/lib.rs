//! # amparo-client
//!
//! Record Store Client for the Amparo remote collections.
//!
//! [`RecordStore`] wraps one HTTP client and hands out a typed
//! [`Collection`] per entity. A collection translates the CRUD contract
//! (`list_all`, `get`, `list_where`, `create`, `update`, `delete`) into
//! conventional REST verbs against `{base_url}/{collection}` and maps every
//! non-success outcome to [`TransportError`]. The client stamps store-level
//! creation defaults (initial status, zeroed counters, creation timestamp)
//! into the POST payload before submission.
//!
//! No retries, no explicit timeout; every failure surfaces immediately.

pub mod collection;
pub mod error;
pub mod resource;
mod resources;
pub mod stub;
pub mod updates;

pub use collection::{Collection, RecordStore};
pub use error::TransportError;
pub use resource::{ChildResource, Resource};
