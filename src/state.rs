use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{DivisionRepository, EmployeeRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub division_repo: Arc<dyn DivisionRepository>,
    pub employee_repo: Arc<dyn EmployeeRepository>,
}
