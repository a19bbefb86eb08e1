//! Read-only aggregates for the dashboard. Empty tables produce zero counts,
//! empty lists, or `None` averages; never an error.

use sqlx::PgPool;

use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveStatus;
use crate::models::report::{
    DashboardSummary, DayCount, DepartmentHeadcount, DepartmentRating, LeaveTrend, StatusCount,
};

pub async fn total_employees(pool: &PgPool) -> AppResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn total_departments(pool: &PgPool) -> AppResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Mean rating over all reviews, two decimals. `None` when there are no reviews.
pub async fn average_rating(pool: &PgPool) -> AppResult<Option<f64>> {
    let average: Option<f64> = sqlx::query_scalar(
        "SELECT ROUND(AVG(rating)::numeric, 2)::float8 FROM performance_reviews",
    )
    .fetch_one(pool)
    .await?;
    Ok(average)
}

pub async fn leave_status_breakdown(pool: &PgPool) -> AppResult<Vec<StatusCount>> {
    let counts = sqlx::query_as::<_, StatusCount>(
        "SELECT status, COUNT(*) AS count FROM leave_requests GROUP BY status ORDER BY status",
    )
    .fetch_all(pool)
    .await?;
    Ok(counts)
}

/// Bucket for employees without a department.
pub const UNASSIGNED: &str = "Unassigned";

/// Headcount per department, largest first. Employees without a department
/// are counted under [`UNASSIGNED`], so the counts sum to the total.
pub async fn employees_by_department(pool: &PgPool) -> AppResult<Vec<DepartmentHeadcount>> {
    let headcounts = sqlx::query_as::<_, DepartmentHeadcount>(
        r#"
        SELECT COALESCE(d.name, $1) AS department, COUNT(e.id) AS count
        FROM employees e
        LEFT JOIN departments d ON e.department_id = d.id
        GROUP BY 1
        ORDER BY count DESC, department
        "#,
    )
    .bind(UNASSIGNED)
    .fetch_all(pool)
    .await?;
    Ok(headcounts)
}

pub async fn top_departments(pool: &PgPool) -> AppResult<Vec<DepartmentRating>> {
    let ratings = sqlx::query_as::<_, DepartmentRating>(
        r#"
        SELECT d.name AS department, ROUND(AVG(r.rating)::numeric, 2)::float8 AS average_rating
        FROM performance_reviews r
        JOIN employees e ON r.employee_id = e.id
        JOIN departments d ON e.department_id = d.id
        GROUP BY d.name
        ORDER BY average_rating DESC, d.name
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(ratings)
}

fn leave_trends_sql(day_count: DayCount) -> String {
    let span = match day_count {
        DayCount::Exclusive => "l.end_date - l.start_date",
        DayCount::Inclusive => "l.end_date - l.start_date + 1",
    };
    format!(
        "SELECT EXTRACT(YEAR FROM l.start_date)::int4 AS year, \
         EXTRACT(MONTH FROM l.start_date)::int4 AS month, \
         SUM({})::int8 AS total_days \
         FROM leave_requests l GROUP BY 1, 2 ORDER BY 1, 2",
        span
    )
}

/// Leave days per (year, month) of the start date.
pub async fn leave_trends(pool: &PgPool, day_count: DayCount) -> AppResult<Vec<LeaveTrend>> {
    let trends = sqlx::query_as::<_, LeaveTrend>(&leave_trends_sql(day_count))
        .fetch_all(pool)
        .await?;
    Ok(trends)
}

/// Always unsupported: employees carry no employment-end date.
pub fn turnover_rate() -> AppResult<f64> {
    Err(AppError::Unsupported(
        "turnover rate requires an employment end date, which employee records do not have"
            .to_string(),
    ))
}

pub async fn pending_leave_requests(pool: &PgPool) -> AppResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leave_requests WHERE status = $1")
        .bind(LeaveStatus::Pending.as_str())
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn summary(pool: &PgPool) -> AppResult<DashboardSummary> {
    Ok(DashboardSummary {
        total_employees: total_employees(pool).await?,
        total_departments: total_departments(pool).await?,
        average_rating: average_rating(pool).await?,
        pending_leave_requests: pending_leave_requests(pool).await?,
    })
}
