use chrono::Utc;
use tracing::info;

use backend_domain::{ItemFields, ItemPayload, NewItem, RecordId};

use crate::error::{parse_record_id, store_failure};
use crate::{AppError, AppState};

pub async fn create_item(state: &AppState, payload: ItemPayload) -> Result<RecordId, AppError> {
    let item = NewItem {
        fields: ItemFields::from(payload),
        insert_date: Utc::now(),
    };
    let id = state
        .item_repo
        .insert_item(&item)
        .await
        .map_err(|err| store_failure(&state.metrics, "insert item", err))?;
    state.metrics.record_created();
    info!("created item {}", id);
    Ok(id)
}

pub async fn update_item(state: &AppState, id: &str, payload: ItemPayload) -> Result<(), AppError> {
    let id = parse_record_id(id, "item")?;
    let fields = ItemFields::from(payload);
    let modified = state
        .item_repo
        .replace_item(&id, &fields)
        .await
        .map_err(|err| store_failure(&state.metrics, "update item", err))?;
    if modified == 0 {
        state.metrics.record_not_found();
        return Err(AppError::NotFound("Item not found or no changes made".to_string()));
    }
    state.metrics.record_updated();
    Ok(())
}

pub async fn delete_item(state: &AppState, id: &str) -> Result<(), AppError> {
    let id = parse_record_id(id, "item")?;
    let deleted = state
        .item_repo
        .delete_item(&id)
        .await
        .map_err(|err| store_failure(&state.metrics, "delete item", err))?;
    if deleted == 0 {
        state.metrics.record_not_found();
        return Err(AppError::NotFound("Item not found".to_string()));
    }
    state.metrics.record_deleted();
    info!("deleted item {}", id);
    Ok(())
}
