use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::cache::SelectionCache;
use crate::errors::AppError;
use crate::models::employee::{EmployeeFilter, EmployeeSort, NewEmployee};
use crate::models::outcome::Outcome;
use crate::records::employees;
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Debug, Default)]
pub struct EmployeeQueryParams {
    search: Option<String>,
    department: Option<String>,
    job_title: Option<String>,
    sort_by: Option<String>,
}

impl EmployeeQueryParams {
    fn into_filter(self) -> EmployeeFilter {
        let sort = self.sort_by.as_deref().and_then(|key| {
            let sort = EmployeeSort::parse(key);
            if sort.is_none() {
                log::debug!("Ignoring unknown employee sort key '{}'", key);
            }
            sort
        });
        EmployeeFilter {
            search: non_blank(self.search),
            department: non_blank(self.department),
            job_title: non_blank(self.job_title),
            sort,
        }
    }
}

// Forms submit an empty value for "All".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

pub async fn create_employee(
    pool: web::Data<PgPool>,
    cache: web::Data<SelectionCache>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;

    let id = employees::create_employee(&pool, &new_employee).await?;
    cache.invalidate().await;

    Ok(HttpResponse::Created().json(Outcome::message_with(
        "Employee added successfully",
        json!({ "id": id }),
    )))
}

pub async fn get_employees(
    pool: web::Data<PgPool>,
    query: web::Query<EmployeeQueryParams>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter();
    let employees = employees::read_employees(&pool, &filter).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(employees)))
}

pub async fn update_employee(
    pool: web::Data<PgPool>,
    cache: web::Data<SelectionCache>,
    employee_id: web::Path<i32>,
    updates: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*updates)?;

    employees::update_employee(&pool, employee_id.into_inner(), &updates).await?;
    cache.invalidate().await;

    Ok(HttpResponse::Ok().json(Outcome::message("Employee updated successfully")))
}

pub async fn delete_employee(
    pool: web::Data<PgPool>,
    cache: web::Data<SelectionCache>,
    employee_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    employees::delete_employee(&pool, employee_id.into_inner()).await?;
    cache.invalidate().await;

    Ok(HttpResponse::Ok().json(Outcome::message("Employee deleted successfully")))
}

pub async fn get_job_titles(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let titles = employees::job_titles(&pool).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(titles)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_key_reads_unsorted() {
        let params = EmployeeQueryParams {
            sort_by: Some("salary".into()),
            ..Default::default()
        };
        assert_eq!(params.into_filter().sort, None);
    }

    #[test]
    fn empty_filters_read_unfiltered() {
        let params = web::Query::<EmployeeQueryParams>::from_query("search=&department=&job_title=")
            .unwrap()
            .into_inner();
        let filter = params.into_filter();
        assert_eq!(filter.department, None);
        assert_eq!(filter.job_title, None);

        let query_builder = employees::employee_query(&filter);
        assert!(!query_builder.sql().contains("WHERE"));
    }

    #[test]
    fn known_sort_key_is_kept() {
        let params = EmployeeQueryParams {
            department: Some("Engineering".into()),
            sort_by: Some("job_title".into()),
            ..Default::default()
        };
        let filter = params.into_filter();
        assert_eq!(filter.sort, Some(EmployeeSort::ByJobTitle));
        assert_eq!(filter.department.as_deref(), Some("Engineering"));
    }
}
