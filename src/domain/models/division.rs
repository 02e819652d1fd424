use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_DIVISION_ID: i64 = 1;
pub const DEFAULT_COLOR: &str = "#1d04d9";
pub const DEFAULT_ICON: &str = "people";

/// A division row with its live count of active employees.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Division {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub employee_count: i64,
}

/// Writable division fields, used for both create and full-replace update.
#[derive(Debug, Clone)]
pub struct DivisionDraft {
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
}

impl DivisionDraft {
    pub fn new(name: String, description: Option<String>, color: Option<String>, icon: Option<String>) -> Self {
        Self {
            name,
            description: description.unwrap_or_default(),
            color: color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            icon: icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
        }
    }
}
