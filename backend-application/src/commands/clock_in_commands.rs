use chrono::Utc;
use tracing::info;

use backend_domain::{ClockInPatch, ClockInPayload, NewClockIn, RecordId};

use crate::error::{parse_record_id, store_failure};
use crate::{AppError, AppState};

const NOT_MODIFIED: &str = "Clock-in record not found or no changes made";

pub async fn create_clock_in(
    state: &AppState,
    payload: ClockInPayload,
) -> Result<RecordId, AppError> {
    let clock_in = NewClockIn {
        email: payload.email,
        location: payload.location,
        insert_date_time: Utc::now(),
    };
    let id = state
        .clock_in_repo
        .insert_clock_in(&clock_in)
        .await
        .map_err(|err| store_failure(&state.metrics, "insert clock-in", err))?;
    state.metrics.record_created();
    info!("created clock-in {}", id);
    Ok(id)
}

pub async fn update_clock_in(
    state: &AppState,
    id: &str,
    patch: ClockInPatch,
) -> Result<(), AppError> {
    let id = parse_record_id(id, "clock-in")?;
    // An empty $set is rejected by the store; nothing to write means nothing modified.
    if patch.is_empty() {
        state.metrics.record_not_found();
        return Err(AppError::NotFound(NOT_MODIFIED.to_string()));
    }
    let modified = state
        .clock_in_repo
        .patch_clock_in(&id, &patch)
        .await
        .map_err(|err| store_failure(&state.metrics, "update clock-in", err))?;
    if modified == 0 {
        state.metrics.record_not_found();
        return Err(AppError::NotFound(NOT_MODIFIED.to_string()));
    }
    state.metrics.record_updated();
    Ok(())
}

pub async fn delete_clock_in(state: &AppState, id: &str) -> Result<(), AppError> {
    let id = parse_record_id(id, "clock-in")?;
    let deleted = state
        .clock_in_repo
        .delete_clock_in(&id)
        .await
        .map_err(|err| store_failure(&state.metrics, "delete clock-in", err))?;
    if deleted == 0 {
        state.metrics.record_not_found();
        return Err(AppError::NotFound("Clock-in record not found".to_string()));
    }
    state.metrics.record_deleted();
    info!("deleted clock-in {}", id);
    Ok(())
}
