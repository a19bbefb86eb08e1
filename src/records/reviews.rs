use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::errors::AppResult;
use crate::models::review::{NewReview, PerformanceReview, ReviewSort};

const SELECT_REVIEWS: &str = "SELECT r.id, r.employee_id, e.first_name || ' ' || e.last_name AS employee_name, \
     r.review_date, r.reviewer, r.comments, r.rating \
     FROM performance_reviews r JOIN employees e ON r.employee_id = e.id";

/// The rating bound and the employee reference are enforced by the table's
/// constraints; violations come back as [`crate::errors::AppError::Constraint`].
pub async fn create_review(pool: &PgPool, review: &NewReview) -> AppResult<i32> {
    let mut tx = pool.begin().await?;

    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO performance_reviews (employee_id, review_date, reviewer, comments, rating)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(review.employee_id)
    .bind(review.review_date)
    .bind(&review.reviewer)
    .bind(&review.comments)
    .bind(review.rating)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    log::info!("Created review {} for employee {}", id, review.employee_id);
    Ok(id)
}

fn review_query(sort: Option<ReviewSort>) -> QueryBuilder<'static, Postgres> {
    let mut query_builder = QueryBuilder::new(SELECT_REVIEWS);
    if let Some(sort) = sort {
        query_builder.push(" ORDER BY ").push(sort.order_by());
    }
    query_builder
}

pub async fn read_reviews(
    pool: &PgPool,
    sort: Option<ReviewSort>,
) -> AppResult<Vec<PerformanceReview>> {
    let mut query_builder = review_query(sort);
    let reviews = query_builder
        .build_query_as::<PerformanceReview>()
        .fetch_all(pool)
        .await?;
    Ok(reviews)
}
