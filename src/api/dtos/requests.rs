use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::models::division::DivisionDraft;
use crate::domain::models::employee::{EmployeeDraft, EmployeeStatus};
use crate::error::AppError;

/// Fields are optional so a missing value surfaces as a 400 with a readable message.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsernameRequest {
    pub user_id: Option<i64>,
    pub new_username: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub user_id: Option<i64>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Deserialize)]
pub struct DivisionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl DivisionRequest {
    pub fn into_draft(self) -> Result<DivisionDraft, AppError> {
        let name = required(self.name, "Division name is required")?;
        Ok(DivisionDraft::new(name, self.description, self.color, self.icon))
    }
}

#[derive(Deserialize)]
pub struct EmployeeRequest {
    pub name: Option<String>,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contract_end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub division_id: Option<i64>,
}

impl EmployeeRequest {
    pub fn into_draft(self) -> Result<EmployeeDraft, AppError> {
        let name = required(self.name, "Employee name is required")?;
        let mut draft = EmployeeDraft::new(name);
        draft.position = self.position;
        draft.age = self.age;
        draft.email = self.email;
        draft.phone = self.phone;
        draft.address = self.address;
        draft.contract_end_date = self.contract_end_date;
        if let Some(status) = self.status {
            draft.status = parse_status(&status)?;
        }
        if self.division_id.is_some() {
            draft.division_id = self.division_id;
        }
        Ok(draft)
    }
}

#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct EmployeeFilter {
    pub division: Option<i64>,
}

/// Trims and rejects absent or blank values.
pub fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(message.to_string()))
}

pub fn parse_status(raw: &str) -> Result<EmployeeStatus, AppError> {
    raw.parse::<EmployeeStatus>()
        .map_err(|err| AppError::Validation(err.to_string()))
}
