use serde::{Deserialize, Serialize};

use crate::models::leave::LeaveStatus;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub status: LeaveStatus,
    pub count: i64,
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DepartmentHeadcount {
    pub department: String,
    pub count: i64,
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DepartmentRating {
    pub department: String,
    pub average_rating: f64,
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaveTrend {
    pub year: i32,
    pub month: i32,
    pub total_days: i64,
}

/// How a leave request's span is turned into a day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayCount {
    /// `end_date - start_date`; a single-day leave counts as zero.
    #[default]
    Exclusive,
    /// `end_date - start_date + 1`.
    Inclusive,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_employees: i64,
    pub total_departments: i64,
    /// `None` when no reviews exist.
    pub average_rating: Option<f64>,
    pub pending_leave_requests: i64,
}
