//! Typed HTTP client for the HRD API.
//!
//! Transport failures (no response at all) are reported separately from
//! errors the server answered with, so callers can tell "server down" from
//! "request rejected".

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::api::dtos::responses::{ApiResponse, ErrorResponse};
use crate::domain::models::{
    announcement::ContractAnnouncement,
    division::Division,
    employee::{Employee, EmployeeStatus},
    statistics::DashboardStats,
    user::UserProfile,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Server unreachable: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Status code the server answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Default, Clone)]
pub struct DivisionPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Default, Clone)]
pub struct EmployeePayload {
    pub name: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contract_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i64>,
}

#[derive(Clone)]
pub struct HrdClient {
    http: Client,
    base_url: String,
}

impl HrdClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Network)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<ApiResponse<T>, ClientError> {
        let response = request.send().await.map_err(ClientError::Network)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::Network)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&bytes)
                .map(|body| body.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
            return Err(ClientError::Server { status: status.as_u16(), message });
        }

        serde_json::from_slice::<ApiResponse<T>>(&bytes)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        self.send::<T>(request)
            .await?
            .data
            .ok_or_else(|| ClientError::Decode("response carried no data".into()))
    }

    async fn created(&self, request: RequestBuilder) -> Result<i64, ClientError> {
        self.send::<()>(request)
            .await?
            .id
            .ok_or_else(|| ClientError::Decode("response carried no id".into()))
    }

    async fn acknowledge(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.send::<()>(request).await.map(|_| ())
    }

    // Auth

    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, ClientError> {
        let body = json!({ "username": username, "password": password });
        self.fetch(self.http.post(self.url("/auth/login")).json(&body)).await
    }

    // Users

    pub async fn update_username(&self, user_id: i64, new_username: &str) -> Result<(), ClientError> {
        let body = json!({ "userId": user_id, "newUsername": new_username });
        self.acknowledge(self.http.put(self.url("/users/update-username")).json(&body)).await
    }

    pub async fn update_password(&self, user_id: i64, old_password: &str, new_password: &str) -> Result<(), ClientError> {
        let body = json!({ "userId": user_id, "oldPassword": old_password, "newPassword": new_password });
        self.acknowledge(self.http.put(self.url("/users/update-password")).json(&body)).await
    }

    // Divisions

    pub async fn list_divisions(&self) -> Result<Vec<Division>, ClientError> {
        self.fetch(self.http.get(self.url("/divisions"))).await
    }

    pub async fn get_division(&self, division_id: i64) -> Result<Division, ClientError> {
        self.fetch(self.http.get(self.url(&format!("/divisions/{}", division_id)))).await
    }

    pub async fn create_division(&self, payload: &DivisionPayload) -> Result<i64, ClientError> {
        self.created(self.http.post(self.url("/divisions")).json(payload)).await
    }

    pub async fn update_division(&self, division_id: i64, payload: &DivisionPayload) -> Result<(), ClientError> {
        self.acknowledge(self.http.put(self.url(&format!("/divisions/{}", division_id))).json(payload)).await
    }

    pub async fn delete_division(&self, division_id: i64) -> Result<(), ClientError> {
        self.acknowledge(self.http.delete(self.url(&format!("/divisions/{}", division_id)))).await
    }

    // Employees

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        self.fetch(self.http.get(self.url("/employees"))).await
    }

    pub async fn list_employees_by_division(&self, division_id: i64) -> Result<Vec<Employee>, ClientError> {
        self.fetch(self.http.get(self.url(&format!("/employees/division/{}", division_id)))).await
    }

    pub async fn get_employee(&self, employee_id: i64) -> Result<Employee, ClientError> {
        self.fetch(self.http.get(self.url(&format!("/employees/{}", employee_id)))).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<i64, ClientError> {
        self.created(self.http.post(self.url("/employees")).json(payload)).await
    }

    pub async fn update_employee(&self, employee_id: i64, payload: &EmployeePayload) -> Result<(), ClientError> {
        self.acknowledge(self.http.put(self.url(&format!("/employees/{}", employee_id))).json(payload)).await
    }

    pub async fn update_employee_status(&self, employee_id: i64, status: EmployeeStatus) -> Result<(), ClientError> {
        let body = json!({ "status": status });
        self.acknowledge(self.http.put(self.url(&format!("/employees/{}/status", employee_id))).json(&body)).await
    }

    pub async fn delete_employee(&self, employee_id: i64) -> Result<(), ClientError> {
        self.acknowledge(self.http.delete(self.url(&format!("/employees/{}", employee_id)))).await
    }

    // Read-only views

    pub async fn contract_announcements(&self) -> Result<Vec<ContractAnnouncement>, ClientError> {
        self.fetch(self.http.get(self.url("/announcements/contracts"))).await
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, ClientError> {
        self.fetch(self.http.get(self.url("/statistics/dashboard"))).await
    }
}
