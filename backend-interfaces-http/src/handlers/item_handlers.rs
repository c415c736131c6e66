use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

use backend_application::commands::item_commands;
use backend_application::queries::item_queries;
use backend_application::AppState;
use backend_domain::{ItemFilterQuery, ItemPayload, ItemRecord};

use crate::error::HttpError;
use crate::responses::{CreatedBody, MessageBody};

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<CreatedBody>, HttpError> {
    let Json(payload) = payload?;
    let id = item_commands::create_item(&state, payload).await?;
    Ok(Json(CreatedBody { id: id.to_string() }))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemRecord>, HttpError> {
    let record = item_queries::get_item(&state, &id).await?;
    Ok(Json(record))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<MessageBody>, HttpError> {
    let Json(payload) = payload?;
    item_commands::update_item(&state, &id, payload).await?;
    Ok(Json(MessageBody::new("Item updated successfully")))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, HttpError> {
    item_commands::delete_item(&state, &id).await?;
    Ok(Json(MessageBody::new("Item deleted successfully")))
}

pub async fn filter_items(
    State(state): State<AppState>,
    query: Result<Query<ItemFilterQuery>, QueryRejection>,
) -> Result<Json<Vec<ItemRecord>>, HttpError> {
    let Query(query) = query?;
    let items = item_queries::filter_items(&state, query).await?;
    Ok(Json(items))
}
