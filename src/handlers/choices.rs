use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::cache::SelectionCache;
use crate::errors::AppError;
use crate::models::outcome::Outcome;

pub async fn get_employee_choices(
    pool: web::Data<PgPool>,
    cache: web::Data<SelectionCache>,
) -> Result<HttpResponse, AppError> {
    let choices = cache.employees(&pool).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(choices)))
}

pub async fn get_department_choices(
    pool: web::Data<PgPool>,
    cache: web::Data<SelectionCache>,
) -> Result<HttpResponse, AppError> {
    let choices = cache.departments(&pool).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(choices)))
}

pub async fn refresh_choices(cache: web::Data<SelectionCache>) -> HttpResponse {
    cache.invalidate().await;
    HttpResponse::Ok().json(Outcome::message("Selection lists refreshed"))
}
