use tracing::debug;

use backend_domain::{ItemFilter, ItemFilterQuery, ItemRecord};

use crate::error::{parse_record_id, store_failure};
use crate::{AppError, AppState};

pub async fn get_item(state: &AppState, id: &str) -> Result<ItemRecord, AppError> {
    let id = parse_record_id(id, "item")?;
    let record = state
        .item_repo
        .find_item(&id)
        .await
        .map_err(|err| store_failure(&state.metrics, "fetch item", err))?;
    record.ok_or_else(|| {
        state.metrics.record_not_found();
        AppError::NotFound("Item not found".to_string())
    })
}

pub async fn filter_items(
    state: &AppState,
    query: ItemFilterQuery,
) -> Result<Vec<ItemRecord>, AppError> {
    let filter = ItemFilter::try_from(query)
        .map_err(|_| AppError::InvalidIdentifier("Invalid item ID format".to_string()))?;
    if filter.is_unconstrained() {
        debug!("item filter has no criteria, listing every item");
    } else {
        debug!("item filter criteria: {:?}", filter);
    }

    let items = state
        .item_repo
        .find_items(&filter)
        .await
        .map_err(|err| store_failure(&state.metrics, "filter items", err))?;
    if items.is_empty() {
        state.metrics.record_not_found();
        return Err(AppError::NotFound(
            "No items found matching the criteria".to_string(),
        ));
    }
    debug!("item filter matched {} records", items.len());
    Ok(items)
}
