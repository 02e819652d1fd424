mod common;

use axum::http::StatusCode;
use common::{days_from_today, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_dashboard_counts_only_active_employees() {
    let app = TestApp::new().await;

    for name in ["A", "B", "C"] {
        app.create_employee(json!({ "name": name, "status": "Active" })).await;
    }
    for name in ["D", "E"] {
        app.create_employee(json!({ "name": name, "status": "Inactive" })).await;
    }

    let (status, body) = app.request("GET", "/api/statistics/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalEmployees"], 3);
    assert_eq!(body["data"]["totalDivisions"], 1);
    assert_eq!(body["data"]["contractsEndingSoon"], 0);
    assert_eq!(body["data"]["expiredContracts"], 0);
}

#[tokio::test]
async fn test_dashboard_contract_counts() {
    let app = TestApp::new().await;
    app.create_division("IT").await;
    app.create_division("HR").await;

    app.create_employee(json!({ "name": "Soon", "contract_end_date": days_from_today(3) })).await;
    app.create_employee(json!({ "name": "Today", "contract_end_date": days_from_today(0) })).await;
    app.create_employee(json!({ "name": "Edge", "contract_end_date": days_from_today(30) })).await;
    app.create_employee(json!({ "name": "Later", "contract_end_date": days_from_today(31) })).await;
    app.create_employee(json!({ "name": "Gone", "contract_end_date": days_from_today(-5) })).await;
    app.create_employee(json!({ "name": "GoneInactive", "contract_end_date": days_from_today(-5), "status": "Inactive" })).await;

    let (_, body) = app.request("GET", "/api/statistics/dashboard", None).await;
    let stats = &body["data"];
    assert_eq!(stats["totalEmployees"], 5);
    assert_eq!(stats["totalDivisions"], 3);
    assert_eq!(stats["contractsEndingSoon"], 3);
    assert_eq!(stats["expiredContracts"], 1);
}

#[tokio::test]
async fn test_dashboard_reports_zero_when_queries_fail() {
    let app = TestApp::new().await;
    app.create_employee(json!({ "name": "Someone" })).await;

    app.pool.close().await;

    let (status, body) = app.request("GET", "/api/statistics/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalEmployees"], 0);
    assert_eq!(body["data"]["totalDivisions"], 0);
    assert_eq!(body["data"]["contractsEndingSoon"], 0);
    assert_eq!(body["data"]["expiredContracts"], 0);
}
