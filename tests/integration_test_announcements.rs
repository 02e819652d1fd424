mod common;

use axum::http::StatusCode;
use common::{days_from_today, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_contract_bucketing() {
    let app = TestApp::new().await;
    let it = app.create_division("IT").await;

    let expired = app.create_employee(json!({ "name": "Expired", "contract_end_date": days_from_today(-1), "division_id": it })).await;
    let urgent = app.create_employee(json!({ "name": "Urgent", "contract_end_date": days_from_today(5) })).await;
    let warning = app.create_employee(json!({ "name": "Warning", "contract_end_date": days_from_today(10) })).await;
    let normal = app.create_employee(json!({ "name": "Normal", "contract_end_date": days_from_today(20) })).await;
    let far = app.create_employee(json!({ "name": "Far", "contract_end_date": days_from_today(40) })).await;

    let (status, body) = app.request("GET", "/api/announcements/contracts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert!(data.iter().all(|a| a["id"] != far), "40-day contract must not be announced");

    let ids: Vec<i64> = data.iter().map(|a| a["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![expired, urgent, warning, normal]);

    let urgencies: Vec<&str> = data.iter().map(|a| a["urgency"].as_str().unwrap()).collect();
    assert_eq!(urgencies, vec!["expired", "urgent", "warning", "normal"]);

    let days: Vec<i64> = data.iter().map(|a| a["days_remaining"].as_i64().unwrap()).collect();
    assert_eq!(days, vec![-1, 5, 10, 20]);

    assert_eq!(data[0]["division_name"], "IT");
    assert_eq!(data[0]["contract_end_date"], days_from_today(-1));
    assert_eq!(data[1]["message"], "Contract ends in 5 days");
}

#[tokio::test]
async fn test_window_edges_and_exclusions() {
    let app = TestApp::new().await;

    app.create_employee(json!({ "name": "Today", "contract_end_date": days_from_today(0) })).await;
    app.create_employee(json!({ "name": "Seven", "contract_end_date": days_from_today(7) })).await;
    app.create_employee(json!({ "name": "Eight", "contract_end_date": days_from_today(8) })).await;
    app.create_employee(json!({ "name": "Thirty", "contract_end_date": days_from_today(30) })).await;
    app.create_employee(json!({ "name": "ThirtyOne", "contract_end_date": days_from_today(31) })).await;
    app.create_employee(json!({ "name": "LongGone", "contract_end_date": days_from_today(-200) })).await;
    app.create_employee(json!({ "name": "Inactive", "contract_end_date": days_from_today(3), "status": "Inactive" })).await;
    app.create_employee(json!({ "name": "Permanent" })).await;

    let (_, body) = app.request("GET", "/api/announcements/contracts", None).await;
    let data = body["data"].as_array().unwrap();

    let summary: Vec<(&str, &str)> = data.iter()
        .map(|a| (a["name"].as_str().unwrap(), a["urgency"].as_str().unwrap()))
        .collect();
    assert_eq!(summary, vec![
        ("LongGone", "expired"),
        ("Today", "urgent"),
        ("Seven", "urgent"),
        ("Eight", "warning"),
        ("Thirty", "normal"),
    ]);
}

#[tokio::test]
async fn test_no_announcements_when_no_contracts() {
    let app = TestApp::new().await;
    app.create_employee(json!({ "name": "Permanent" })).await;

    let (status, body) = app.request("GET", "/api/announcements/contracts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
}
