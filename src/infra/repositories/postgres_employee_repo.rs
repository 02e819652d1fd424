use crate::domain::models::announcement::ContractRecord;
use crate::domain::models::employee::{Employee, EmployeeDraft, EmployeeStatus};
use crate::domain::ports::EmployeeRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::error;

const EMPLOYEE_SELECT: &str = "SELECT e.id, e.name, e.position, e.age, e.email, e.phone, e.address, \
     e.contract_end_date, e.status, e.division_id, d.name AS division_name, d.color AS division_color \
     FROM employees e LEFT JOIN divisions d ON d.id = e.division_id";

pub struct PostgresEmployeeRepo {
    pool: PgPool,
}

impl PostgresEmployeeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepo {
    async fn list(&self, division_id: Option<i64>) -> Result<Vec<Employee>, AppError> {
        let sql = match division_id {
            Some(_) => format!("{} WHERE e.division_id = $1 ORDER BY e.name ASC", EMPLOYEE_SELECT),
            None => format!("{} ORDER BY e.name ASC", EMPLOYEE_SELECT),
        };

        let mut query = sqlx::query_as::<_, Employee>(&sql);
        if let Some(division_id) = division_id {
            query = query.bind(division_id);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let sql = format!("{} WHERE e.id = $1", EMPLOYEE_SELECT);
        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row)
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO employees (name, position, age, email, phone, address, contract_end_date, status, division_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id"
        )
            .bind(&draft.name)
            .bind(&draft.position)
            .bind(draft.age)
            .bind(&draft.email)
            .bind(&draft.phone)
            .bind(&draft.address)
            .bind(draft.contract_end_date)
            .bind(draft.status.as_str())
            .bind(draft.division_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Postgres employee insert failed: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, id: i64, draft: &EmployeeDraft) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE employees SET name = $1, position = $2, age = $3, email = $4, phone = $5, address = $6, \
             contract_end_date = $7, status = $8, division_id = $9 WHERE id = $10"
        )
            .bind(&draft.name)
            .bind(&draft.position)
            .bind(draft.age)
            .bind(&draft.email)
            .bind(&draft.phone)
            .bind(&draft.address)
            .bind(draft.contract_end_date)
            .bind(draft.status.as_str())
            .bind(draft.division_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Employee not found".into()));
        }
        Ok(())
    }

    async fn update_status(&self, id: i64, status: EmployeeStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE employees SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Employee not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Employee not found".into()));
        }
        Ok(())
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE status = 'Active'")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_contracts_until(&self, until: NaiveDate) -> Result<Vec<ContractRecord>, AppError> {
        sqlx::query_as::<_, ContractRecord>(
            "SELECT e.id, e.name, e.position, d.name AS division_name, e.contract_end_date \
             FROM employees e LEFT JOIN divisions d ON d.id = e.division_id \
             WHERE e.status = 'Active' AND e.contract_end_date IS NOT NULL AND e.contract_end_date <= $1 \
             ORDER BY e.contract_end_date ASC, e.name ASC"
        )
            .bind(until)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_contracts_between(&self, from: NaiveDate, to: NaiveDate) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employees WHERE status = 'Active' AND contract_end_date >= $1 AND contract_end_date <= $2"
        )
            .bind(from)
            .bind(to)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_contracts_before(&self, date: NaiveDate) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employees WHERE status = 'Active' AND contract_end_date < $1"
        )
            .bind(date)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
