mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_division_lifecycle() {
    let app = TestApp::new().await;

    // Seeded default division
    let (status, body) = app.request("GET", "/api/divisions", None).await;
    assert_eq!(status, StatusCode::OK);
    let divisions = body["data"].as_array().unwrap();
    assert_eq!(divisions.len(), 1);
    assert_eq!(divisions[0]["id"], 1);
    assert_eq!(divisions[0]["name"], "General");

    // Create with defaults
    let (status, body) = app.request("POST", "/api/divisions", Some(json!({ "name": "Finance" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["id"].as_i64().unwrap();

    let (status, body) = app.request("GET", &format!("/api/divisions/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Finance");
    assert_eq!(body["data"]["description"], "");
    assert_eq!(body["data"]["color"], "#1d04d9");
    assert_eq!(body["data"]["icon"], "people");
    assert_eq!(body["data"]["employee_count"], 0);

    // Full replace
    let (status, _) = app.request("PUT", &format!("/api/divisions/{}", id), Some(json!({
        "name": "Finance & Tax",
        "description": "Money matters",
        "color": "#27ae60",
        "icon": "cash"
    }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.request("GET", &format!("/api/divisions/{}", id), None).await;
    assert_eq!(body["data"]["name"], "Finance & Tax");
    assert_eq!(body["data"]["icon"], "cash");

    // Delete
    let (status, _) = app.request("DELETE", &format!("/api/divisions/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.request("GET", &format!("/api/divisions/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Division not found");
}

#[tokio::test]
async fn test_division_validation_and_missing_rows() {
    let app = TestApp::new().await;

    let (status, body) = app.request("POST", "/api/divisions", Some(json!({ "description": "No name" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Division name is required");

    let (status, _) = app.request("POST", "/api/divisions", Some(json!({ "name": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.request("PUT", "/api/divisions/999", Some(json!({ "name": "Ghost" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.request("DELETE", "/api/divisions/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.request("GET", "/api/divisions", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_employee_count_only_counts_active() {
    let app = TestApp::new().await;
    let it = app.create_division("IT").await;
    let hr = app.create_division("HR").await;

    app.create_employee(json!({ "name": "Andi", "division_id": it })).await;
    app.create_employee(json!({ "name": "Budi", "division_id": it })).await;
    app.create_employee(json!({ "name": "Citra", "division_id": it, "status": "Inactive" })).await;
    let dewi = app.create_employee(json!({ "name": "Dewi", "division_id": hr })).await;

    let (_, body) = app.request("GET", "/api/divisions", None).await;
    let divisions = body["data"].as_array().unwrap();
    let count_of = |id: i64| divisions.iter().find(|d| d["id"] == id).unwrap()["employee_count"].as_i64().unwrap();
    assert_eq!(count_of(it), 2);
    assert_eq!(count_of(hr), 1);
    assert_eq!(count_of(1), 0);

    // Counts follow status changes without any stored counter
    let (status, _) = app.request("PUT", &format!("/api/employees/{}/status", dewi), Some(json!({ "status": "Inactive" }))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.request("GET", &format!("/api/divisions/{}", hr), None).await;
    assert_eq!(body["data"]["employee_count"], 0);
}

#[tokio::test]
async fn test_deleting_division_leaves_dangling_employees_readable() {
    let app = TestApp::new().await;
    let ops = app.create_division("Operations").await;
    let eko = app.create_employee(json!({ "name": "Eko", "division_id": ops })).await;

    let (_, body) = app.request("GET", &format!("/api/employees/{}", eko), None).await;
    assert_eq!(body["data"]["division_name"], "Operations");

    let (status, _) = app.request("DELETE", &format!("/api/divisions/{}", ops), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.request("GET", "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    let employees = body["data"].as_array().unwrap();
    let row = employees.iter().find(|e| e["id"] == eko).expect("Employee vanished with its division");
    assert_eq!(row["division_id"], ops);
    assert!(row["division_name"].is_null());
    assert!(row["division_color"].is_null());

    let (status, body) = app.request("GET", &format!("/api/employees/division/{}", ops), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
