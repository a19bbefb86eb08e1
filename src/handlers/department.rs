use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::cache::SelectionCache;
use crate::errors::AppError;
use crate::models::department::NewDepartment;
use crate::models::outcome::Outcome;
use crate::records::departments;
use crate::utils::validation::validate_payload;

pub async fn create_department(
    pool: web::Data<PgPool>,
    cache: web::Data<SelectionCache>,
    new_department: web::Json<NewDepartment>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_department)?;

    let id = departments::create_department(&pool, &new_department.name).await?;
    cache.invalidate().await;

    Ok(HttpResponse::Created().json(Outcome::message_with(
        "Department added successfully",
        json!({ "id": id }),
    )))
}

pub async fn get_departments(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let departments = departments::read_departments(&pool).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(departments)))
}
