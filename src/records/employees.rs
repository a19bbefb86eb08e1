use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeeFilter, NewEmployee};

const SELECT_EMPLOYEES: &str = "SELECT e.id, e.first_name, e.last_name, e.contact_info, e.job_title, \
     e.start_date, e.department_id, d.name AS department \
     FROM employees e LEFT JOIN departments d ON e.department_id = d.id";

pub async fn create_employee(pool: &PgPool, employee: &NewEmployee) -> AppResult<i32> {
    let mut tx = pool.begin().await?;

    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO employees (first_name, last_name, contact_info, job_title, start_date, department_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(&employee.contact_info)
    .bind(&employee.job_title)
    .bind(employee.start_date)
    .bind(employee.department_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    log::info!("Created employee {}", id);
    Ok(id)
}

fn push_clause(query_builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    query_builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

pub(crate) fn employee_query(filter: &EmployeeFilter) -> QueryBuilder<'_, Postgres> {
    let mut query_builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(SELECT_EMPLOYEES);
    let mut has_where = false;

    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = format!("%{}%", search);
        push_clause(&mut query_builder, &mut has_where);
        query_builder
            .push("(e.first_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR e.last_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR e.contact_info ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(department) = filter.department.as_ref().filter(|s| !s.trim().is_empty()) {
        push_clause(&mut query_builder, &mut has_where);
        query_builder.push("d.name = ").push_bind(department.clone());
    }
    if let Some(job_title) = filter.job_title.as_ref().filter(|s| !s.trim().is_empty()) {
        push_clause(&mut query_builder, &mut has_where);
        query_builder.push("e.job_title = ").push_bind(job_title.clone());
    }
    if let Some(sort) = filter.sort {
        query_builder.push(" ORDER BY ").push(sort.order_by());
    }

    query_builder
}

pub async fn read_employees(pool: &PgPool, filter: &EmployeeFilter) -> AppResult<Vec<Employee>> {
    let mut query_builder = employee_query(filter);
    let employees = query_builder
        .build_query_as::<Employee>()
        .fetch_all(pool)
        .await?;
    Ok(employees)
}

pub async fn update_employee(pool: &PgPool, id: i32, employee: &NewEmployee) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE employees
        SET first_name = $1, last_name = $2, contact_info = $3, job_title = $4,
            start_date = $5, department_id = $6
        WHERE id = $7
        "#,
    )
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(&employee.contact_info)
    .bind(&employee.job_title)
    .bind(employee.start_date)
    .bind(employee.department_id)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Employee {} not found", id)));
    }

    tx.commit().await?;
    log::info!("Updated employee {}", id);
    Ok(())
}

/// Hard delete. Reviews and leave requests referencing the employee are
/// handled by the database's foreign-key rules.
pub async fn delete_employee(pool: &PgPool, id: i32) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Employee {} not found", id)));
    }

    tx.commit().await?;
    log::info!("Deleted employee {}", id);
    Ok(())
}

pub async fn job_titles(pool: &PgPool) -> AppResult<Vec<String>> {
    let titles: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT job_title FROM employees WHERE job_title IS NOT NULL ORDER BY job_title",
    )
    .fetch_all(pool)
    .await?;
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::EmployeeSort;

    #[test]
    fn unfiltered_query_has_no_where_or_order() {
        let filter = EmployeeFilter::default();
        let query_builder = employee_query(&filter);
        let sql = query_builder.sql();
        assert_eq!(sql, SELECT_EMPLOYEES);
    }

    #[test]
    fn search_matches_each_field_independently() {
        let filter = EmployeeFilter {
            search: Some("ada".into()),
            ..Default::default()
        };
        let query_builder = employee_query(&filter);
        let sql = query_builder.sql();
        assert!(sql.ends_with(
            " WHERE (e.first_name ILIKE $1 OR e.last_name ILIKE $2 OR e.contact_info ILIKE $3)"
        ));
    }

    #[test]
    fn empty_search_is_ignored() {
        let filter = EmployeeFilter {
            search: Some(String::new()),
            ..Default::default()
        };
        let query_builder = employee_query(&filter);
        assert!(!query_builder.sql().contains("WHERE"));
    }

    #[test]
    fn blank_department_and_job_title_are_ignored() {
        let filter = EmployeeFilter {
            department: Some(String::new()),
            job_title: Some("  ".into()),
            ..Default::default()
        };
        let query_builder = employee_query(&filter);
        assert_eq!(query_builder.sql(), SELECT_EMPLOYEES);
    }

    #[test]
    fn filters_are_anded_and_sorted() {
        let filter = EmployeeFilter {
            search: Some("ada".into()),
            department: Some("Engineering".into()),
            job_title: Some("Analyst".into()),
            sort: Some(EmployeeSort::ByDepartment),
        };
        let query_builder = employee_query(&filter);
        let sql = query_builder.sql();
        assert!(sql.contains(") AND d.name = $4 AND e.job_title = $5 ORDER BY d.name"));
    }

    #[test]
    fn department_filter_alone_starts_the_where_clause() {
        let filter = EmployeeFilter {
            department: Some("Engineering".into()),
            sort: Some(EmployeeSort::ByStartDate),
            ..Default::default()
        };
        let query_builder = employee_query(&filter);
        let sql = query_builder.sql();
        assert!(sql.ends_with(" WHERE d.name = $1 ORDER BY e.start_date"));
    }
}
