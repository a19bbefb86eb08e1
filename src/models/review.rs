use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PerformanceReview {
    pub id: i32,
    pub employee_id: i32,
    pub employee_name: String,
    pub review_date: NaiveDate,
    pub reviewer: Option<String>,
    pub comments: Option<String>,
    pub rating: i32,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct NewReview {
    pub employee_id: i32,
    pub review_date: NaiveDate,
    #[validate(length(max = 100))]
    pub reviewer: Option<String>,
    pub comments: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSort {
    ByReviewDateDesc,
    ByRatingDesc,
}

impl ReviewSort {
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "review_date" => Some(ReviewSort::ByReviewDateDesc),
            "rating" => Some(ReviewSort::ByRatingDesc),
            _ => None,
        }
    }

    pub(crate) fn order_by(self) -> &'static str {
        match self {
            ReviewSort::ByReviewDateDesc => "r.review_date DESC",
            ReviewSort::ByRatingDesc => "r.rating DESC",
        }
    }
}
