use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{required, UpdatePasswordRequest, UpdateUsernameRequest};
use crate::api::dtos::responses::ApiResponse;
use crate::api::extractors::json::ApiJson;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn update_username(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UpdateUsernameRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = payload.user_id
        .ok_or_else(|| AppError::Validation("userId and newUsername are required".into()))?;
    let new_username = required(payload.new_username, "userId and newUsername are required")?;

    let user = state.user_repo.find_by_id(user_id).await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if let Some(existing) = state.user_repo.find_by_username(&new_username).await? {
        if existing.id != user.id {
            return Err(AppError::Conflict("Username already taken".into()));
        }
    }

    state.user_repo.update_username(user.id, &new_username).await?;
    info!("User {} renamed from '{}' to '{}'", user.id, user.username, new_username);

    Ok(Json(ApiResponse::message("Username updated successfully")))
}

pub async fn update_password(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UpdatePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let missing = || AppError::Validation("userId, oldPassword and newPassword are required".into());
    let user_id = payload.user_id.ok_or_else(missing)?;
    let old_password = payload.old_password.filter(|p| !p.is_empty()).ok_or_else(missing)?;
    let new_password = payload.new_password.filter(|p| !p.is_empty()).ok_or_else(missing)?;

    let user = state.user_repo.find_by_id(user_id).await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if !user.password_matches(&old_password) {
        warn!("Password change rejected for user {}: old password mismatch", user.id);
        return Err(AppError::Unauthorized("Old password is incorrect".into()));
    }

    state.user_repo.update_password(user.id, &new_password).await?;
    info!("Password updated for user {}", user.id);

    Ok(Json(ApiResponse::message("Password updated successfully")))
}
