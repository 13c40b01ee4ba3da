//! Generic entity state container.

use amparo_client::{Collection, Resource};

use crate::error::StoreError;

/// Client-visible state of one collection, plus the operations that
/// reconcile record store results into it.
///
/// Each operation is an atomic state transition around one collection call:
/// loading is raised and the error slot cleared on entry, and the result is
/// reconciled on completion. `&mut self` receivers keep at most one
/// operation in flight per container.
pub struct EntityStore<T: Resource> {
    collection: Collection<T>,
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    current: Option<T>,
}

impl<T: Resource> EntityStore<T> {
    /// Empty container over a collection: no items, not loading, no error,
    /// no current selection.
    #[must_use]
    pub fn new(collection: Collection<T>) -> Self {
        Self {
            collection,
            items: Vec::new(),
            loading: false,
            error: None,
            current: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Select (or deselect) the record the views are focused on.
    pub fn set_current(&mut self, record: Option<T>) {
        self.current = record;
    }

    /// Dismiss a recorded failure message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replace `items` with the full collection.
    pub async fn fetch_all(&mut self) {
        self.begin();
        let result = self.collection.list_all().await;
        self.loading = false;
        match result {
            Ok(records) => self.items = records,
            Err(error) => self.record_failure("fetch", &StoreError::from(error)),
        }
    }

    /// Fetch one record into `current`. `items` is untouched.
    pub async fn fetch_one(&mut self, id: &str) {
        self.begin();
        let result = self.collection.get(id).await;
        self.loading = false;
        match result {
            Ok(record) => self.current = Some(record),
            Err(error) => self.record_failure("fetch", &StoreError::from(error)),
        }
    }

    /// Create a record and append the store's version to `items`.
    ///
    /// Draft validation runs first and short-circuits into the error slot
    /// without issuing a request. Returns the created record on success.
    pub async fn create(&mut self, draft: T::Draft) -> Option<T> {
        self.begin();
        if let Err(message) = T::validate_draft(&draft) {
            self.loading = false;
            self.record_failure("create", &StoreError::Validation(message));
            return None;
        }
        let result = self.collection.create(&draft).await;
        self.loading = false;
        match result {
            Ok(record) => {
                self.items.push(record.clone());
                Some(record)
            }
            Err(error) => {
                self.record_failure("create", &StoreError::from(error));
                None
            }
        }
    }

    /// Partially update a record and replace the matching list entry.
    ///
    /// When the updated record is not in the loaded list the list stays
    /// unchanged; the miss is logged rather than treated as a failure. A
    /// matching `current` selection is refreshed either way.
    pub async fn update(&mut self, id: &str, update: T::Update) -> Option<T> {
        self.begin();
        let result = self.collection.update(id, &update).await;
        self.loading = false;
        match result {
            Ok(record) => {
                match self.items.iter_mut().find(|item| item.id() == record.id()) {
                    Some(slot) => *slot = record.clone(),
                    None => tracing::warn!(
                        entity = T::LABEL,
                        id = record.id(),
                        "updated record is not in the loaded list"
                    ),
                }
                if self
                    .current
                    .as_ref()
                    .is_some_and(|current| current.id() == record.id())
                {
                    self.current = Some(record.clone());
                }
                Some(record)
            }
            Err(error) => {
                self.record_failure("update", &StoreError::from(error));
                None
            }
        }
    }

    /// Delete a record and drop every matching list entry.
    pub async fn delete(&mut self, id: &str) -> bool {
        self.begin();
        let result = self.collection.delete(id).await;
        self.loading = false;
        match result {
            Ok(()) => {
                self.items.retain(|item| item.id() != id);
                if self
                    .current
                    .as_ref()
                    .is_some_and(|current| current.id() == id)
                {
                    self.current = None;
                }
                true
            }
            Err(error) => {
                self.record_failure("delete", &StoreError::from(error));
                false
            }
        }
    }

    pub(crate) fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn finish(&mut self) {
        self.loading = false;
    }

    pub(crate) fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub(crate) const fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub(crate) fn record_failure(&mut self, op: &str, error: &StoreError) {
        tracing::warn!(entity = T::LABEL, %error, "{op} failed");
        self.error = Some(format!("failed to {op} {}: {error}", T::LABEL));
    }
}
