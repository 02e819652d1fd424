use crate::domain::models::{
    announcement::ContractRecord,
    division::{Division, DivisionDraft},
    employee::{Employee, EmployeeDraft, EmployeeStatus},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn update_username(&self, id: i64, username: &str) -> Result<(), AppError>;
    async fn update_password(&self, id: i64, password: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait DivisionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Division>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Division>, AppError>;
    async fn create(&self, draft: &DivisionDraft) -> Result<i64, AppError>;
    async fn update(&self, id: i64, draft: &DivisionDraft) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self, division_id: Option<i64>) -> Result<Vec<Employee>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;
    async fn create(&self, draft: &EmployeeDraft) -> Result<i64, AppError>;
    async fn update(&self, id: i64, draft: &EmployeeDraft) -> Result<(), AppError>;
    async fn update_status(&self, id: i64, status: EmployeeStatus) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn count_active(&self) -> Result<i64, AppError>;
    /// Active employees whose contract ends on or before `until`, expired ones included.
    async fn list_contracts_until(&self, until: NaiveDate) -> Result<Vec<ContractRecord>, AppError>;
    async fn count_contracts_between(&self, from: NaiveDate, to: NaiveDate) -> Result<i64, AppError>;
    async fn count_contracts_before(&self, date: NaiveDate) -> Result<i64, AppError>;
}
