use sqlx::PgPool;

use crate::errors::AppResult;
use crate::models::leave::{LeaveRequest, LeaveStatus, NewLeaveRequest};

/// Inserts with status `Pending`. End dates before the start date are stored
/// as given.
pub async fn create_leave_request(pool: &PgPool, request: &NewLeaveRequest) -> AppResult<i32> {
    let mut tx = pool.begin().await?;

    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO leave_requests (employee_id, leave_type, start_date, end_date, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(request.employee_id)
    .bind(&request.leave_type)
    .bind(request.start_date)
    .bind(request.end_date)
    .bind(LeaveStatus::Pending.as_str())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    log::info!("Created leave request {} for employee {}", id, request.employee_id);
    Ok(id)
}

pub async fn read_leave_requests(pool: &PgPool) -> AppResult<Vec<LeaveRequest>> {
    let requests = sqlx::query_as::<_, LeaveRequest>(
        r#"
        SELECT l.id, l.employee_id, e.first_name || ' ' || e.last_name AS employee_name,
               l.leave_type, l.start_date, l.end_date, l.status
        FROM leave_requests l
        JOIN employees e ON l.employee_id = e.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(requests)
}

/// Overwrites the status. An id matching no row is not an error.
pub async fn update_leave_status(pool: &PgPool, id: i32, status: LeaveStatus) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("UPDATE leave_requests SET status = $1 WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    log::info!(
        "Set leave request {} to {} ({} row(s))",
        id,
        status,
        result.rows_affected()
    );
    Ok(())
}
