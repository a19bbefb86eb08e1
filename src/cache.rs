use std::future::Future;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::errors::AppResult;
use crate::models::choice::Choice;

/// Memoized employee and department lists for selection controls.
///
/// Nothing here watches the database: after a mutation that adds, renames or
/// removes an employee or department, call [`SelectionCache::invalidate`].
#[derive(Default)]
pub struct SelectionCache {
    employees: RwLock<Option<Vec<Choice>>>,
    departments: RwLock<Option<Vec<Choice>>>,
}

impl SelectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn employees(&self, pool: &PgPool) -> AppResult<Vec<Choice>> {
        get_or_load(&self.employees, "employees", || load_employees(pool)).await
    }

    pub async fn departments(&self, pool: &PgPool) -> AppResult<Vec<Choice>> {
        get_or_load(&self.departments, "departments", || load_departments(pool)).await
    }

    pub async fn invalidate(&self) {
        *self.employees.write().await = None;
        *self.departments.write().await = None;
        log::debug!("Selection cache invalidated");
    }
}

async fn get_or_load<F, Fut>(
    slot: &RwLock<Option<Vec<Choice>>>,
    name: &str,
    load: F,
) -> AppResult<Vec<Choice>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = AppResult<Vec<Choice>>>,
{
    if let Some(cached) = slot.read().await.as_ref() {
        return Ok(cached.clone());
    }

    let mut guard = slot.write().await;
    // Another caller may have filled the slot while we waited for the lock.
    if let Some(cached) = guard.as_ref() {
        return Ok(cached.clone());
    }
    let loaded = load().await?;
    log::debug!("Loaded {} {} into selection cache", loaded.len(), name);
    *guard = Some(loaded.clone());
    Ok(loaded)
}

async fn load_employees(pool: &PgPool) -> AppResult<Vec<Choice>> {
    let choices = sqlx::query_as::<_, Choice>(
        "SELECT id, first_name || ' ' || last_name AS label FROM employees ORDER BY last_name, first_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(choices)
}

async fn load_departments(pool: &PgPool) -> AppResult<Vec<Choice>> {
    let choices =
        sqlx::query_as::<_, Choice>("SELECT id, name AS label FROM departments ORDER BY name")
            .fetch_all(pool)
            .await?;
    Ok(choices)
}
