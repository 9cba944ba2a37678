use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::{
    error::{Result, TourError},
    store::ItineraryStore,
    types::{ItineraryPatch, ItineraryRecord},
};

/// Process-local store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryItineraryStore {
    records: RwLock<Vec<ItineraryRecord>>,
}

impl InMemoryItineraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn not_found(id: &str) -> TourError {
    TourError::NotFound(format!("Tour with ID {id} not found"))
}

#[async_trait]
impl ItineraryStore for InMemoryItineraryStore {
    async fn create(&self, mut record: ItineraryRecord) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        record.id = id.clone();

        self.records.write().await.push(record);
        debug!(target: "tour_agent::store", %id, "itinerary created");
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<ItineraryRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list(&self) -> Result<Vec<ItineraryRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn update(&self, id: &str, patch: ItineraryPatch) -> Result<ItineraryRecord> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| not_found(id))?;

        patch.apply(record);
        debug!(target: "tour_agent::store", %id, "itinerary updated");
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| not_found(id))?;

        records.remove(index);
        debug!(target: "tour_agent::store", %id, "itinerary deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItineraryDraft;
    use chrono::Utc;

    fn record(title: &str) -> ItineraryRecord {
        ItineraryRecord::from_draft(
            ItineraryDraft {
                title: title.to_string(),
                ..ItineraryDraft::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_create_assigns_unique_ids_in_order() {
        let store = InMemoryItineraryStore::new();

        let first = tokio_test::block_on(store.create(record("a"))).unwrap();
        let second = tokio_test::block_on(store.create(record("b"))).unwrap();
        assert_ne!(first, second);

        let all = tokio_test::block_on(store.list()).unwrap();
        let titles: Vec<_> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(all[0].id, first);
    }

    #[test]
    fn test_create_replaces_caller_id() {
        let store = InMemoryItineraryStore::new();
        let mut rec = record("a");
        rec.id = "chosen-by-caller".to_string();

        let id = tokio_test::block_on(store.create(rec)).unwrap();
        assert_ne!(id, "chosen-by-caller");
        assert!(tokio_test::block_on(store.get("chosen-by-caller")).is_err());
    }

    #[test]
    fn test_get_returns_independent_copy() {
        let store = InMemoryItineraryStore::new();
        let id = tokio_test::block_on(store.create(record("a"))).unwrap();

        let mut copy = tokio_test::block_on(store.get(&id)).unwrap();
        copy.title = "mutated".to_string();

        assert_eq!(tokio_test::block_on(store.get(&id)).unwrap().title, "a");
    }

    #[test]
    fn test_update_and_delete() {
        let store = InMemoryItineraryStore::new();
        let id = tokio_test::block_on(store.create(record("a"))).unwrap();
        let created_at = tokio_test::block_on(store.get(&id)).unwrap().created_at;

        let patch = ItineraryPatch {
            title: Some("b".to_string()),
            ..ItineraryPatch::default()
        };
        let updated = tokio_test::block_on(store.update(&id, patch)).unwrap();
        assert_eq!(updated.title, "b");
        assert_eq!(updated.id, id);
        assert_eq!(updated.created_at, created_at);

        tokio_test::block_on(store.delete(&id)).unwrap();
        assert!(tokio_test::block_on(store.is_empty()));
        assert!(matches!(
            tokio_test::block_on(store.delete(&id)),
            Err(TourError::NotFound(_))
        ));
        assert!(matches!(
            tokio_test::block_on(store.update(&id, ItineraryPatch::default())),
            Err(TourError::NotFound(_))
        ));
    }
}
