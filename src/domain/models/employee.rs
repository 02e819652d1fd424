use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::models::division::DEFAULT_DIVISION_ID;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid status '{0}', expected Active or Inactive")]
pub struct InvalidStatus(pub String);

impl FromStr for EmployeeStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EmployeeStatus::Active),
            "Inactive" => Ok(EmployeeStatus::Inactive),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// Decodes the `status` column.
impl TryFrom<String> for EmployeeStatus {
    type Error = InvalidStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Employee row joined with its division. The division columns are null
/// when `division_id` points at a division that no longer exists.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contract_end_date: Option<NaiveDate>,
    #[sqlx(try_from = "String")]
    pub status: EmployeeStatus,
    pub division_id: Option<i64>,
    pub division_name: Option<String>,
    pub division_color: Option<String>,
}

/// Writable employee fields. Updates replace every column with these values.
#[derive(Debug, Clone)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contract_end_date: Option<NaiveDate>,
    pub status: EmployeeStatus,
    pub division_id: Option<i64>,
}

impl EmployeeDraft {
    pub fn new(name: String) -> Self {
        Self {
            name,
            position: None,
            age: None,
            email: None,
            phone: None,
            address: None,
            contract_end_date: None,
            status: EmployeeStatus::Active,
            division_id: Some(DEFAULT_DIVISION_ID),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("Active".parse::<EmployeeStatus>(), Ok(EmployeeStatus::Active));
        assert_eq!("Inactive".parse::<EmployeeStatus>(), Ok(EmployeeStatus::Inactive));
        assert!("active".parse::<EmployeeStatus>().is_err());
        assert!("".parse::<EmployeeStatus>().is_err());
        assert_eq!(" Active ".parse::<EmployeeStatus>(), Err(InvalidStatus(" Active ".into())));
        assert_eq!(EmployeeStatus::Inactive.to_string(), "Inactive");
    }

    #[test]
    fn test_status_column_decoding() {
        assert_eq!(EmployeeStatus::try_from("Inactive".to_string()), Ok(EmployeeStatus::Inactive));
        let err = EmployeeStatus::try_from("Retired".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid status 'Retired', expected Active or Inactive");
    }

    #[test]
    fn test_employee_serializes_status_as_text() {
        let employee = Employee {
            id: 7,
            name: "Sari".into(),
            position: None,
            age: None,
            email: None,
            phone: None,
            address: None,
            contract_end_date: None,
            status: EmployeeStatus::Inactive,
            division_id: Some(1),
            division_name: Some("General".into()),
            division_color: None,
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["status"], "Inactive");
    }

    #[test]
    fn test_draft_defaults() {
        let draft = EmployeeDraft::new("Budi".into());
        assert_eq!(draft.status, EmployeeStatus::Active);
        assert_eq!(draft.division_id, Some(DEFAULT_DIVISION_ID));
        assert!(draft.contract_end_date.is_none());
    }
}
