use anyhow::Result;
use async_trait::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use backend_domain::ports::{ClockInRepository, ItemRepository};
use backend_domain::{
    clock_in_update_document,
    id_selector,
    item_filter_document,
    item_update_document,
    ClockInPatch,
    ClockInRecord,
    DbConfig,
    ItemFields,
    ItemFilter,
    ItemRecord,
    NewClockIn,
    NewItem,
    RecordId,
};

use super::documents::{
    clock_in_from_document,
    inserted_record_id,
    item_from_document,
    new_clock_in_document,
    new_item_document,
};

/// One client per process, shared by both collections.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
    items: Collection<Document>,
    clock_ins: Collection<Document>,
}

impl MongoStore {
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(config.mongo_uri.as_str()).await?;
        if let Some(app_name) = &config.app_name {
            options.app_name = Some(app_name.clone());
        }
        let client = Client::with_options(options)?;
        info!(
            "using mongo database '{}' (items: '{}', clock-ins: '{}')",
            config.mongo_database, config.items_collection, config.clock_in_collection
        );
        Ok(Self::new(client, config))
    }

    pub fn new(client: Client, config: &DbConfig) -> Self {
        let database = client.database(&config.mongo_database);
        let items = database.collection::<Document>(&config.items_collection);
        let clock_ins = database.collection::<Document>(&config.clock_in_collection);
        Self {
            client,
            database,
            items,
            clock_ins,
        }
    }

    pub async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl ItemRepository for MongoStore {
    async fn insert_item(&self, item: &NewItem) -> Result<RecordId> {
        let result = self.items.insert_one(new_item_document(item)).await?;
        inserted_record_id(&result.inserted_id)
    }

    async fn find_item(&self, id: &RecordId) -> Result<Option<ItemRecord>> {
        let document = self.items.find_one(id_selector(id)).await?;
        document.as_ref().map(item_from_document).transpose()
    }

    async fn find_items(&self, filter: &ItemFilter) -> Result<Vec<ItemRecord>> {
        let cursor = self.items.find(item_filter_document(filter)).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        documents.iter().map(item_from_document).collect()
    }

    async fn replace_item(&self, id: &RecordId, fields: &ItemFields) -> Result<u64> {
        let result = self
            .items
            .update_one(id_selector(id), item_update_document(fields))
            .await?;
        Ok(result.modified_count)
    }

    async fn delete_item(&self, id: &RecordId) -> Result<u64> {
        let result = self.items.delete_one(id_selector(id)).await?;
        Ok(result.deleted_count)
    }
}

#[async_trait]
impl ClockInRepository for MongoStore {
    async fn insert_clock_in(&self, clock_in: &NewClockIn) -> Result<RecordId> {
        let result = self
            .clock_ins
            .insert_one(new_clock_in_document(clock_in))
            .await?;
        inserted_record_id(&result.inserted_id)
    }

    async fn find_clock_in(&self, id: &RecordId) -> Result<Option<ClockInRecord>> {
        let document = self.clock_ins.find_one(id_selector(id)).await?;
        document.as_ref().map(clock_in_from_document).transpose()
    }

    async fn patch_clock_in(&self, id: &RecordId, patch: &ClockInPatch) -> Result<u64> {
        let result = self
            .clock_ins
            .update_one(id_selector(id), clock_in_update_document(patch))
            .await?;
        Ok(result.modified_count)
    }

    async fn delete_clock_in(&self, id: &RecordId) -> Result<u64> {
        let result = self.clock_ins.delete_one(id_selector(id)).await?;
        Ok(result.deleted_count)
    }
}
