use sqlx::PgPool;

use crate::errors::AppResult;
use crate::models::department::Department;

pub async fn create_department(pool: &PgPool, name: &str) -> AppResult<i32> {
    let mut tx = pool.begin().await?;

    let id: i32 = sqlx::query_scalar("INSERT INTO departments (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    log::info!("Created department {} ({})", id, name);
    Ok(id)
}

pub async fn read_departments(pool: &PgPool) -> AppResult<Vec<Department>> {
    let departments = sqlx::query_as::<_, Department>("SELECT id, name FROM departments")
        .fetch_all(pool)
        .await?;
    Ok(departments)
}
