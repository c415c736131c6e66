use async_trait::async_trait;
use backend_domain::ports::HealthCheckService;

use crate::MongoStore;

pub struct DefaultHealthService {
    store: MongoStore,
}

impl DefaultHealthService {
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_database(&self) -> anyhow::Result<bool> {
        self.store.ping().await.map(|_| true)
    }
}
