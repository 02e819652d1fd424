pub mod sqlite_user_repo;
pub mod sqlite_division_repo;
pub mod sqlite_employee_repo;

pub mod postgres_user_repo;
pub mod postgres_division_repo;
pub mod postgres_employee_repo;
