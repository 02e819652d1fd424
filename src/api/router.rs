use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, user, division, employee, announcement, statistics};
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/auth/login", post(auth::login))

        // Users
        .route("/api/users/update-username", put(user::update_username))
        .route("/api/users/update-password", put(user::update_password))

        // Divisions
        .route("/api/divisions", get(division::list_divisions).post(division::create_division))
        .route("/api/divisions/{division_id}", get(division::get_division).put(division::update_division).delete(division::delete_division))

        // Employees
        .route("/api/employees", get(employee::list_employees).post(employee::create_employee))
        .route("/api/employees/division/{division_id}", get(employee::list_by_division))
        .route("/api/employees/{employee_id}", get(employee::get_employee).put(employee::update_employee).delete(employee::delete_employee))
        .route("/api/employees/{employee_id}/status", put(employee::update_status))

        // Read-only views
        .route("/api/announcements/contracts", get(announcement::contract_announcements))
        .route("/api/statistics/dashboard", get(statistics::dashboard))
        .fallback(health::not_found)

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
