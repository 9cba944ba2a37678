//! Itinerary persistence seam.

pub mod memory;

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{ItineraryPatch, ItineraryRecord},
};

pub use memory::InMemoryItineraryStore;

/// Keyed collection of itinerary records.
///
/// The store owns the canonical copy; callers always receive clones.
/// Operations are independent of each other and concurrent writers to one
/// id resolve last-writer-wins.
#[async_trait]
pub trait ItineraryStore: Send + Sync {
    /// Persist a new record under a fresh id and return that id.
    ///
    /// Any id already set on `record` is replaced.
    async fn create(&self, record: ItineraryRecord) -> Result<String>;

    /// `NotFound` for an unknown id.
    async fn get(&self, id: &str) -> Result<ItineraryRecord>;

    /// All records in creation order.
    async fn list(&self) -> Result<Vec<ItineraryRecord>>;

    /// Apply a patch and return the updated record.
    async fn update(&self, id: &str, patch: ItineraryPatch) -> Result<ItineraryRecord>;

    async fn delete(&self, id: &str) -> Result<()>;
}
