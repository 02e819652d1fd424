use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use crate::state::AppState;
use crate::api::dtos::responses::ApiResponse;
use crate::domain::services::statistics::gather_dashboard;
use std::sync::Arc;

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let stats = gather_dashboard(state.employee_repo.as_ref(), state.division_repo.as_ref(), today).await;
    Json(ApiResponse::data(stats))
}
