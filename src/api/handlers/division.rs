use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::DivisionRequest;
use crate::api::dtos::responses::ApiResponse;
use crate::api::extractors::{json::ApiJson, path::ApiPath};
use std::sync::Arc;
use tracing::info;

pub async fn list_divisions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let divisions = state.division_repo.list().await?;
    Ok(Json(ApiResponse::data(divisions)))
}

pub async fn get_division(
    State(state): State<Arc<AppState>>,
    ApiPath(division_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let division = state.division_repo.find_by_id(division_id).await?
        .ok_or_else(|| AppError::NotFound("Division not found".into()))?;
    Ok(Json(ApiResponse::data(division)))
}

pub async fn create_division(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<DivisionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = payload.into_draft()?;
    let id = state.division_repo.create(&draft).await?;
    info!("Created division {} ({})", id, draft.name);
    Ok((StatusCode::CREATED, Json(ApiResponse::created(id, "Division created successfully"))))
}

pub async fn update_division(
    State(state): State<Arc<AppState>>,
    ApiPath(division_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<DivisionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = payload.into_draft()?;
    state.division_repo.update(division_id, &draft).await?;
    info!("Updated division {}", division_id);
    Ok(Json(ApiResponse::message("Division updated successfully")))
}

pub async fn delete_division(
    State(state): State<Arc<AppState>>,
    ApiPath(division_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.division_repo.delete(division_id).await?;
    info!("Deleted division {}", division_id);
    Ok(Json(ApiResponse::message("Division deleted successfully")))
}
