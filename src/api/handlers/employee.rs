use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{parse_status, EmployeeFilter, EmployeeRequest, StatusRequest};
use crate::api::dtos::responses::ApiResponse;
use crate::api::extractors::{json::ApiJson, path::ApiPath, query::ApiQuery};
use std::sync::Arc;
use tracing::info;

pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<EmployeeFilter>,
) -> Result<impl IntoResponse, AppError> {
    let employees = state.employee_repo.list(filter.division).await?;
    Ok(Json(ApiResponse::data(employees)))
}

pub async fn list_by_division(
    State(state): State<Arc<AppState>>,
    ApiPath(division_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let employees = state.employee_repo.list(Some(division_id)).await?;
    Ok(Json(ApiResponse::data(employees)))
}

pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    ApiPath(employee_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let employee = state.employee_repo.find_by_id(employee_id).await?
        .ok_or_else(|| AppError::NotFound("Employee not found".into()))?;
    Ok(Json(ApiResponse::data(employee)))
}

pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<EmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = payload.into_draft()?;
    let id = state.employee_repo.create(&draft).await?;
    info!("Created employee {} ({}) in division {:?}", id, draft.name, draft.division_id);
    Ok((StatusCode::CREATED, Json(ApiResponse::created(id, "Employee created successfully"))))
}

pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    ApiPath(employee_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<EmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = payload.into_draft()?;
    state.employee_repo.update(employee_id, &draft).await?;
    info!("Updated employee {}", employee_id);
    Ok(Json(ApiResponse::message("Employee updated successfully")))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    ApiPath(employee_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<StatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let raw = payload.status
        .ok_or_else(|| AppError::Validation("Status is required".into()))?;
    let status = parse_status(&raw)?;
    state.employee_repo.update_status(employee_id, status).await?;
    info!("Employee {} status set to {}", employee_id, status);
    Ok(Json(ApiResponse::message("Employee status updated successfully")))
}

pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    ApiPath(employee_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.employee_repo.delete(employee_id).await?;
    info!("Deleted employee {}", employee_id);
    Ok(Json(ApiResponse::message("Employee deleted successfully")))
}
