use std::sync::Arc;

use backend_domain::ports::{ClockInRepository, HealthCheckService, ItemRepository};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub item_repo: Arc<dyn ItemRepository>,
    pub clock_in_repo: Arc<dyn ClockInRepository>,
    pub health: Arc<dyn HealthCheckService>,
    pub metrics: Arc<Metrics>,
}
