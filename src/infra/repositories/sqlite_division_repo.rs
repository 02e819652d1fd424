use crate::domain::{models::division::{Division, DivisionDraft}, ports::DivisionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

const DIVISION_WITH_COUNT: &str = "SELECT d.id, d.name, d.description, d.color, d.icon, COUNT(e.id) AS employee_count \
     FROM divisions d \
     LEFT JOIN employees e ON e.division_id = d.id AND e.status = 'Active'";

const GROUP_BY: &str = "GROUP BY d.id, d.name, d.description, d.color, d.icon";

pub struct SqliteDivisionRepo {
    pool: SqlitePool,
}

impl SqliteDivisionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DivisionRepository for SqliteDivisionRepo {
    async fn list(&self) -> Result<Vec<Division>, AppError> {
        let sql = format!("{} {} ORDER BY d.id ASC", DIVISION_WITH_COUNT, GROUP_BY);
        let rows = sqlx::query_as::<_, Division>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Division>, AppError> {
        let sql = format!("{} WHERE d.id = ? {}", DIVISION_WITH_COUNT, GROUP_BY);
        let row = sqlx::query_as::<_, Division>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row)
    }

    async fn create(&self, draft: &DivisionDraft) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO divisions (name, description, color, icon) VALUES (?, ?, ?, ?) RETURNING id"
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
            "UPDATE divisions SET name = ?, description = ?, color = ?, icon = ? WHERE id = ?"
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
        let result = sqlx::query("DELETE FROM divisions WHERE id = ?")
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
