use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::leave::{LeaveStatusUpdate, NewLeaveRequest};
use crate::models::outcome::Outcome;
use crate::records::leave;
use crate::utils::validation::validate_payload;

pub async fn create_leave_request(
    pool: web::Data<PgPool>,
    new_request: web::Json<NewLeaveRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_request)?;

    if new_request.ends_before_start() {
        log::warn!(
            "Leave request for employee {} ends ({}) before it starts ({})",
            new_request.employee_id,
            new_request.end_date,
            new_request.start_date
        );
    }

    let id = leave::create_leave_request(&pool, &new_request).await?;

    Ok(HttpResponse::Created().json(Outcome::message_with(
        "Leave request submitted successfully",
        json!({ "id": id }),
    )))
}

pub async fn get_leave_requests(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let requests = leave::read_leave_requests(&pool).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(requests)))
}

pub async fn update_leave_status(
    pool: web::Data<PgPool>,
    request_id: web::Path<i32>,
    update: web::Json<LeaveStatusUpdate>,
) -> Result<HttpResponse, AppError> {
    let status = update.status;
    leave::update_leave_status(&pool, request_id.into_inner(), status).await?;

    Ok(HttpResponse::Ok().json(Outcome::message(format!(
        "Leave request status updated to {}",
        status
    ))))
}
