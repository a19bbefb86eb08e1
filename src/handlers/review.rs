use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::outcome::Outcome;
use crate::models::review::{NewReview, ReviewSort};
use crate::records::reviews;
use crate::utils::validation::validate_payload;

#[derive(Deserialize)]
pub struct ReviewQueryParams {
    sort_by: Option<String>,
}

pub async fn create_review(
    pool: web::Data<PgPool>,
    new_review: web::Json<NewReview>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_review)?;

    let id = reviews::create_review(&pool, &new_review).await?;

    Ok(HttpResponse::Created().json(Outcome::message_with(
        "Performance review added successfully",
        json!({ "id": id }),
    )))
}

pub async fn get_reviews(
    pool: web::Data<PgPool>,
    query: web::Query<ReviewQueryParams>,
) -> Result<HttpResponse, AppError> {
    let sort = query.sort_by.as_deref().and_then(|key| {
        let sort = ReviewSort::parse(key);
        if sort.is_none() {
            log::debug!("Ignoring unknown review sort key '{}'", key);
        }
        sort
    });
    let reviews = reviews::read_reviews(&pool, sort).await?;
    Ok(HttpResponse::Ok().json(Outcome::data(reviews)))
}
