use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::outcome::Outcome;
use crate::models::report::DayCount;
use crate::reports;

#[derive(Deserialize)]
pub struct LeaveTrendParams {
    #[serde(default)]
    inclusive: bool,
}

pub async fn get_summary(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let summary = reports::summary(&pool).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(summary)))
}

pub async fn get_leave_status(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let breakdown = reports::leave_status_breakdown(&pool).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(breakdown)))
}

pub async fn get_department_distribution(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let headcounts = reports::employees_by_department(&pool).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(headcounts)))
}

pub async fn get_top_departments(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let ratings = reports::top_departments(&pool).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(ratings)))
}

pub async fn get_leave_trends(
    pool: web::Data<PgPool>,
    query: web::Query<LeaveTrendParams>,
) -> Result<HttpResponse, AppError> {
    let day_count = if query.inclusive {
        DayCount::Inclusive
    } else {
        DayCount::Exclusive
    };
    let trends = reports::leave_trends(&pool, day_count).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(trends)))
}

pub async fn get_turnover() -> Result<HttpResponse, AppError> {
    let rate = reports::turnover_rate()?;
    Ok(HttpResponse::Ok().json(Outcome::data(rate)))
}
