use chrono::NaiveDate;
use tracing::warn;

use crate::domain::models::statistics::DashboardStats;
use crate::domain::ports::{DivisionRepository, EmployeeRepository};
use crate::domain::services::contracts::window_end;
use crate::error::AppError;

fn or_zero(metric: &str, result: Result<i64, AppError>) -> i64 {
    result.unwrap_or_else(|e| {
        warn!("Dashboard query '{}' failed, reporting 0: {:?}", metric, e);
        0
    })
}

/// Runs the four dashboard counts concurrently. A failed count is reported as zero.
pub async fn gather_dashboard(
    employees: &dyn EmployeeRepository,
    divisions: &dyn DivisionRepository,
    today: NaiveDate,
) -> DashboardStats {
    let (active, division_count, ending_soon, expired) = tokio::join!(
        employees.count_active(),
        divisions.count(),
        employees.count_contracts_between(today, window_end(today)),
        employees.count_contracts_before(today),
    );

    DashboardStats {
        total_employees: or_zero("total_employees", active),
        total_divisions: or_zero("total_divisions", division_count),
        contracts_ending_soon: or_zero("contracts_ending_soon", ending_soon),
        expired_contracts: or_zero("expired_contracts", expired),
    }
}
