use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContractUrgency {
    Expired,
    Urgent,
    Warning,
    Normal,
}

/// Active employee with a known contract end, as read for announcements.
#[derive(Debug, FromRow, Clone)]
pub struct ContractRecord {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub division_name: Option<String>,
    pub contract_end_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContractAnnouncement {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub division_name: Option<String>,
    pub contract_end_date: NaiveDate,
    pub days_remaining: i64,
    pub urgency: ContractUrgency,
    pub message: String,
}
