use async_trait::async_trait;

use crate::entities::{
    ClockInPatch,
    ClockInRecord,
    ItemFields,
    ItemFilter,
    ItemRecord,
    NewClockIn,
    NewItem,
};
use crate::value_objects::RecordId;

/// Update and delete return the store's modified/deleted document count.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn insert_item(&self, item: &NewItem) -> anyhow::Result<RecordId>;
    async fn find_item(&self, id: &RecordId) -> anyhow::Result<Option<ItemRecord>>;
    async fn find_items(&self, filter: &ItemFilter) -> anyhow::Result<Vec<ItemRecord>>;
    async fn replace_item(&self, id: &RecordId, fields: &ItemFields) -> anyhow::Result<u64>;
    async fn delete_item(&self, id: &RecordId) -> anyhow::Result<u64>;
}

#[async_trait]
pub trait ClockInRepository: Send + Sync {
    async fn insert_clock_in(&self, clock_in: &NewClockIn) -> anyhow::Result<RecordId>;
    async fn find_clock_in(&self, id: &RecordId) -> anyhow::Result<Option<ClockInRecord>>;
    async fn patch_clock_in(&self, id: &RecordId, patch: &ClockInPatch) -> anyhow::Result<u64>;
    async fn delete_clock_in(&self, id: &RecordId) -> anyhow::Result<u64>;
}
