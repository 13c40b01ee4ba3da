//! Containers for the participant-referencing collections.

use amparo_client::{ChildResource, Collection};
use amparo_core::entities::Participant;

use crate::entity::EntityStore;
use crate::error::StoreError;

/// [`EntityStore`] for a child collection, with the denormalization rule:
/// `create` resolves the participant's display name from the already-loaded
/// participant list before submission, and fails locally when the reference
/// is not present.
pub struct ChildStore<T: ChildResource> {
    inner: EntityStore<T>,
}

impl<T: ChildResource> ChildStore<T> {
    #[must_use]
    pub fn new(collection: Collection<T>) -> Self {
        Self {
            inner: EntityStore::new(collection),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        self.inner.items()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.inner.error()
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.inner.current()
    }

    pub fn set_current(&mut self, record: Option<T>) {
        self.inner.set_current(record);
    }

    pub fn clear_error(&mut self) {
        self.inner.clear_error();
    }

    pub async fn fetch_all(&mut self) {
        self.inner.fetch_all().await;
    }

    pub async fn fetch_one(&mut self, id: &str) {
        self.inner.fetch_one(id).await;
    }

    /// Replace `items` with the records referencing one participant.
    pub async fn fetch_for_participant(&mut self, participant_id: &str) {
        self.inner.begin();
        let result = self.inner.collection().list_for_parent(participant_id).await;
        self.inner.finish();
        match result {
            Ok(records) => self.inner.set_items(records),
            Err(error) => self
                .inner
                .record_failure("fetch", &StoreError::from(error)),
        }
    }

    /// Create a child record, denormalizing the referenced participant's
    /// display name into the draft first.
    ///
    /// When the participant id is absent from the loaded list, the failure
    /// is recorded locally and no request is issued.
    pub async fn create(&mut self, participants: &[Participant], mut draft: T::Draft) -> Option<T> {
        let parent_id = T::draft_parent_id(&draft).to_owned();
        let Some(parent) = participants
            .iter()
            .find(|participant| participant.id == parent_id)
        else {
            self.inner.begin();
            self.inner.finish();
            self.inner.record_failure(
                "create",
                &StoreError::ReferenceNotFound {
                    entity: "participant",
                    id: parent_id,
                },
            );
            return None;
        };
        T::set_parent_name(&mut draft, &parent.full_name);
        self.inner.create(draft).await
    }

    pub async fn update(&mut self, id: &str, update: T::Update) -> Option<T> {
        self.inner.update(id, update).await
    }

    pub async fn delete(&mut self, id: &str) -> bool {
        self.inner.delete(id).await
    }
}
