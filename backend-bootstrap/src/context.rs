use std::sync::Arc;

use anyhow::Result;

use backend_application::{AppState, Metrics};
use backend_infrastructure::{AppConfig, DefaultHealthService, MongoStore};

pub struct AppContext {
    pub state: AppState,
    pub store: MongoStore,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let store = MongoStore::connect(&db_config).await?;
        let repo = Arc::new(store.clone());

        let state = AppState {
            config: runtime_config,
            item_repo: repo.clone(),
            clock_in_repo: repo,
            health: Arc::new(DefaultHealthService::new(store.clone())),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state, store })
    }
}
