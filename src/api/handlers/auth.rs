use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::LoginRequest;
use crate::api::dtos::responses::ApiResponse;
use crate::api::extractors::json::ApiJson;
use crate::domain::models::user::UserProfile;
use std::sync::Arc;
use tracing::{info, warn};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let username = payload.username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Validation("Username and password are required".into()))?;
    let password = payload.password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("Username and password are required".into()))?;

    let user = match state.user_repo.find_by_username(&username).await? {
        Some(user) if user.password_matches(&password) => user,
        _ => {
            warn!("Failed login attempt for username: {}", username);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
        }
    };

    info!("User logged in: {}", user.id);

    Ok(Json(ApiResponse::data(UserProfile::from(user))))
}
