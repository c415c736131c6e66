// In-memory repositories that follow the document store's modified/deleted count rules

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::ports::{ClockInRepository, HealthCheckService, ItemRepository};
use backend_domain::{
    ClockInPatch,
    ClockInRecord,
    ItemFields,
    ItemFilter,
    ItemRecord,
    NewClockIn,
    NewItem,
    RecordId,
    RuntimeConfig,
};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct InMemoryItemRepository {
    records: RwLock<Vec<ItemRecord>>,
    unavailable: bool,
}

impl InMemoryItemRepository {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    pub async fn records(&self) -> Vec<ItemRecord> {
        self.records.read().await.clone()
    }

    pub async fn seed(&self, record: ItemRecord) {
        self.records.write().await.push(record);
    }

    fn ensure_available(&self) -> anyhow::Result<()> {
        if self.unavailable {
            return Err(anyhow!("connection refused: localhost:27017"));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn insert_item(&self, item: &NewItem) -> anyhow::Result<RecordId> {
        self.ensure_available()?;
        let id = RecordId::generate();
        self.records.write().await.push(item.clone().into_record(id));
        Ok(id)
    }

    async fn find_item(&self, id: &RecordId) -> anyhow::Result<Option<ItemRecord>> {
        self.ensure_available()?;
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id == *id).cloned())
    }

    async fn find_items(&self, filter: &ItemFilter) -> anyhow::Result<Vec<ItemRecord>> {
        self.ensure_available()?;
        let records = self.records.read().await;
        Ok(records.iter().filter(|record| filter.matches(record)).cloned().collect())
    }

    async fn replace_item(&self, id: &RecordId, fields: &ItemFields) -> anyhow::Result<u64> {
        self.ensure_available()?;
        let mut records = self.records.write().await;
        let modified = records
            .iter_mut()
            .find(|record| record.id == *id)
            .map(|record| fields.replace_into(record))
            .unwrap_or(false);
        Ok(u64::from(modified))
    }

    async fn delete_item(&self, id: &RecordId) -> anyhow::Result<u64> {
        self.ensure_available()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.id != *id);
        Ok((before - records.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryClockInRepository {
    records: RwLock<Vec<ClockInRecord>>,
    unavailable: bool,
}

impl InMemoryClockInRepository {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    pub async fn records(&self) -> Vec<ClockInRecord> {
        self.records.read().await.clone()
    }

    fn ensure_available(&self) -> anyhow::Result<()> {
        if self.unavailable {
            return Err(anyhow!("connection refused: localhost:27017"));
        }
        Ok(())
    }
}

#[async_trait]
impl ClockInRepository for InMemoryClockInRepository {
    async fn insert_clock_in(&self, clock_in: &NewClockIn) -> anyhow::Result<RecordId> {
        self.ensure_available()?;
        let id = RecordId::generate();
        self.records.write().await.push(clock_in.clone().into_record(id));
        Ok(id)
    }

    async fn find_clock_in(&self, id: &RecordId) -> anyhow::Result<Option<ClockInRecord>> {
        self.ensure_available()?;
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id == *id).cloned())
    }

    async fn patch_clock_in(&self, id: &RecordId, patch: &ClockInPatch) -> anyhow::Result<u64> {
        self.ensure_available()?;
        let mut records = self.records.write().await;
        let modified = records
            .iter_mut()
            .find(|record| record.id == *id)
            .map(|record| patch.merge_into(record))
            .unwrap_or(false);
        Ok(u64::from(modified))
    }

    async fn delete_clock_in(&self, id: &RecordId) -> anyhow::Result<u64> {
        self.ensure_available()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.id != *id);
        Ok((before - records.len()) as u64)
    }
}

pub struct StaticHealth(pub bool);

#[async_trait]
impl HealthCheckService for StaticHealth {
    async fn check_database(&self) -> anyhow::Result<bool> {
        if self.0 {
            Ok(true)
        } else {
            Err(anyhow!("ping failed"))
        }
    }
}

pub struct InMemoryBackend {
    pub state: AppState,
    pub items: Arc<InMemoryItemRepository>,
    pub clock_ins: Arc<InMemoryClockInRepository>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::with_repositories(
            InMemoryItemRepository::default(),
            InMemoryClockInRepository::default(),
            true,
        )
    }

    pub fn unavailable() -> Self {
        Self::with_repositories(
            InMemoryItemRepository::unavailable(),
            InMemoryClockInRepository::unavailable(),
            false,
        )
    }

    fn with_repositories(
        items: InMemoryItemRepository,
        clock_ins: InMemoryClockInRepository,
        healthy: bool,
    ) -> Self {
        let items = Arc::new(items);
        let clock_ins = Arc::new(clock_ins);
        let state = AppState {
            config: RuntimeConfig {
                bind_addr: "127.0.0.1:0".to_string(),
                max_body_bytes: 1024 * 1024,
                request_timeout_seconds: 5,
            },
            item_repo: items.clone(),
            clock_in_repo: clock_ins.clone(),
            health: Arc::new(StaticHealth(healthy)),
            metrics: Arc::new(Metrics::default()),
        };
        Self {
            state,
            items,
            clock_ins,
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}
