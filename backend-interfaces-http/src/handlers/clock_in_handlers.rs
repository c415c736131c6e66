use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use backend_application::commands::clock_in_commands;
use backend_application::queries::clock_in_queries;
use backend_application::AppState;
use backend_domain::{ClockInPatch, ClockInPayload, ClockInRecord};

use crate::error::HttpError;
use crate::responses::{CreatedBody, MessageBody};

pub async fn create_clock_in(
    State(state): State<AppState>,
    payload: Result<Json<ClockInPayload>, JsonRejection>,
) -> Result<Json<CreatedBody>, HttpError> {
    let Json(payload) = payload?;
    let id = clock_in_commands::create_clock_in(&state, payload).await?;
    Ok(Json(CreatedBody { id: id.to_string() }))
}

pub async fn get_clock_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClockInRecord>, HttpError> {
    let record = clock_in_queries::get_clock_in(&state, &id).await?;
    Ok(Json(record))
}

pub async fn update_clock_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
    patch: Result<Json<ClockInPatch>, JsonRejection>,
) -> Result<Json<MessageBody>, HttpError> {
    let Json(patch) = patch?;
    clock_in_commands::update_clock_in(&state, &id, patch).await?;
    Ok(Json(MessageBody::new("Clock-in record updated successfully")))
}

pub async fn delete_clock_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, HttpError> {
    clock_in_commands::delete_clock_in(&state, &id).await?;
    Ok(Json(MessageBody::new("Clock-in record deleted successfully")))
}
