use axum::{response::IntoResponse, Json};
use crate::error::AppError;

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}
