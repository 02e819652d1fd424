use crate::domain::{models::division::{Division, DivisionDraft}, ports::DivisionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

const DIVISION_WITH_COUNT: &str = "SELECT d.id, d.name, d.description, d.color, d.icon, COUNT(e.id) AS employee_count \
     FROM divisions d \
     LEFT JOIN employees e ON e.division_id = d.id AND e.status = 'Active'";

const GROUP_BY: &str = "GROUP BY d.id, d.name, d.description, d.color, d.icon";

pub struct PostgresDivisionRepo {
    pool: PgPool,
}

impl PostgresDivisionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DivisionRepository for PostgresDivisionRepo {
    async fn list(&self) -> Result<Vec<Division>, AppError> {
        let sql = format!("{} {} ORDER BY d.id ASC", DIVISION_WITH_COUNT, GROUP_BY);
        let rows = sqlx::query_as::<_, Division>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Division>, AppError> {
        let sql = format!("{} WHERE d.id = $1 {}", DIVISION_WITH_COUNT, GROUP_BY);
        let row = sqlx::query_as::<_, Division>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row)
    }

    async fn create(&self, draft: &DivisionDraft) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO divisions (name, description, color, icon) VALUES ($1, $2, $3, $4) RETURNING id"
        )
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(&draft.color)
            .bind(&draft.icon)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: i64, draft: &DivisionDraft) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE divisions SET name = $1, description = $2, color = $3, icon = $4 WHERE id = $5"
        )
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(&draft.color)
            .bind(&draft.icon)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Division not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM divisions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Division not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM divisions")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
