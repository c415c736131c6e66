use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    records_created: AtomicU64,
    records_updated: AtomicU64,
    records_deleted: AtomicU64,
    lookups_not_found: AtomicU64,
    store_errors: AtomicU64,
}

impl Metrics {
    pub fn record_created(&self) {
        self.records_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_updated(&self) {
        self.records_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_deleted(&self) {
        self.records_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.lookups_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let created = self.records_created.load(Ordering::Relaxed);
        let updated = self.records_updated.load(Ordering::Relaxed);
        let deleted = self.records_deleted.load(Ordering::Relaxed);
        let not_found = self.lookups_not_found.load(Ordering::Relaxed);
        let errors = self.store_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE stockroom_records_created_total counter\n\
stockroom_records_created_total {}\n\
# TYPE stockroom_records_updated_total counter\n\
stockroom_records_updated_total {}\n\
# TYPE stockroom_records_deleted_total counter\n\
stockroom_records_deleted_total {}\n\
# TYPE stockroom_not_found_total counter\n\
stockroom_not_found_total {}\n\
# TYPE stockroom_store_errors_total counter\n\
stockroom_store_errors_total {}\n",
            created, updated, deleted, not_found, errors
        )
    }
}
