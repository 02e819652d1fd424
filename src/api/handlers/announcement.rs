use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::responses::ApiResponse;
use crate::domain::services::contracts::{build_announcements, window_end};
use std::sync::Arc;

pub async fn contract_announcements(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let records = state.employee_repo.list_contracts_until(window_end(today)).await?;
    Ok(Json(ApiResponse::data(build_announcements(records, today))))
}
