use backend_domain::ClockInRecord;

use crate::error::{parse_record_id, store_failure};
use crate::{AppError, AppState};

pub async fn get_clock_in(state: &AppState, id: &str) -> Result<ClockInRecord, AppError> {
    let id = parse_record_id(id, "clock-in")?;
    let record = state
        .clock_in_repo
        .find_clock_in(&id)
        .await
        .map_err(|err| store_failure(&state.metrics, "fetch clock-in", err))?;
    record.ok_or_else(|| {
        state.metrics.record_not_found();
        AppError::NotFound("Clock-in record not found".to_string())
    })
}
