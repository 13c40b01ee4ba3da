//! Generic REST client over one remote collection.

use std::marker::PhantomData;

use chrono::Utc;
use serde_json::Value;

use amparo_core::entities::{
    Company, Employee, Evaluation, FollowUpVisit, ParentInterview, Participant, WorkPlacement,
};

use crate::error::TransportError;
use crate::resource::{ChildResource, Resource};

/// Root handle over the record store.
///
/// Owns one `reqwest::Client`; collections share it by cheap clone.
#[derive(Debug, Clone)]
pub struct RecordStore {
    http: reqwest::Client,
    base_url: String,
}

impl RecordStore {
    /// Point the store at a base URL (e.g. `http://localhost:3001`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Typed handle over one collection.
    #[must_use]
    pub fn collection<T: Resource>(&self) -> Collection<T> {
        Collection {
            http: self.http.clone(),
            url: format!("{}/{}", self.base_url, T::COLLECTION),
            _entity: PhantomData,
        }
    }

    #[must_use]
    pub fn participants(&self) -> Collection<Participant> {
        self.collection()
    }

    #[must_use]
    pub fn companies(&self) -> Collection<Company> {
        self.collection()
    }

    #[must_use]
    pub fn staff(&self) -> Collection<Employee> {
        self.collection()
    }

    #[must_use]
    pub fn evaluations(&self) -> Collection<Evaluation> {
        self.collection()
    }

    #[must_use]
    pub fn interviews(&self) -> Collection<ParentInterview> {
        self.collection()
    }

    #[must_use]
    pub fn placements(&self) -> Collection<WorkPlacement> {
        self.collection()
    }

    #[must_use]
    pub fn visits(&self) -> Collection<FollowUpVisit> {
        self.collection()
    }
}

/// CRUD operations against one collection endpoint.
#[derive(Debug, Clone)]
pub struct Collection<T: Resource> {
    http: reqwest::Client,
    url: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Resource> Collection<T> {
    /// Fetch the entire collection. No pagination; the store is small by
    /// assumption.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on any network failure or non-success status.
    pub async fn list_all(&self) -> Result<Vec<T>, TransportError> {
        let resp = self.http.get(&self.url).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when the id does not resolve (the store's 404
    /// is not discriminated from other failures) or the request fails.
    pub async fn get(&self, id: &str) -> Result<T, TransportError> {
        let url = format!("{}/{id}", self.url);
        let resp = self.http.get(&url).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    /// Fetch records matching an equality filter on a named document field.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on any network failure or non-success status.
    pub async fn list_where(&self, field: &str, value: &str) -> Result<Vec<T>, TransportError> {
        let url = format!("{}?{field}={}", self.url, urlencoding::encode(value));
        let resp = self.http.get(&url).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    /// Create a record from a draft.
    ///
    /// The draft is serialized and [`Resource::creation_defaults`] are merged
    /// over it (defaults win), then the payload is POSTed. Returns the
    /// store's version of the record, including its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on encoding failure, network failure, or
    /// non-success status.
    pub async fn create(&self, draft: &T::Draft) -> Result<T, TransportError> {
        let mut payload = match serde_json::to_value(draft)? {
            Value::Object(fields) => fields,
            _ => {
                return Err(TransportError::Encode(<serde_json::Error as serde::ser::Error>::custom(
                    "draft must serialize to an object",
                )));
            }
        };
        for (key, value) in T::creation_defaults(Utc::now()) {
            payload.insert(key.to_owned(), value);
        }
        let resp = self.http.post(&self.url).json(&payload).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    /// Partially update a record. Only set fields of the update payload are
    /// serialized; the store merges them into the stored document.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on any failure, including an unknown id.
    pub async fn update(&self, id: &str, update: &T::Update) -> Result<T, TransportError> {
        let url = format!("{}/{id}", self.url);
        let resp = self.http.patch(&url).json(update).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on any failure, including an unknown id.
    pub async fn delete(&self, id: &str) -> Result<(), TransportError> {
        let url = format!("{}/{id}", self.url);
        let resp = self.http.delete(&url).send().await?;
        expect_success(resp).await?;
        Ok(())
    }
}

impl<T: ChildResource> Collection<T> {
    /// Fetch the records referencing one participant.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on any network failure or non-success status.
    pub async fn list_for_parent(&self, parent_id: &str) -> Result<Vec<T>, TransportError> {
        self.list_where(T::PARENT_FIELD, parent_id).await
    }
}

async fn expect_success(resp: reqwest::Response) -> Result<reqwest::Response, TransportError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(TransportError::Status { status, body })
}
