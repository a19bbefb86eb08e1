use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgTypeInfo, PgValueRef};
use sqlx::{Decode, Postgres, Type};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 3] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown leave status '{0}'")]
pub struct UnknownLeaveStatus(pub String);

impl FromStr for LeaveStatus {
    type Err = UnknownLeaveStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeaveStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownLeaveStatus(s.to_string()))
    }
}

// Stored as TEXT; bound via `as_str()`.
impl Type<Postgres> for LeaveStatus {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for LeaveStatus {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <&str as Decode<Postgres>>::decode(value)?;
        Ok(raw.parse()?)
    }
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaveRequest {
    pub id: i32,
    pub employee_id: i32,
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct NewLeaveRequest {
    pub employee_id: i32,
    #[validate(length(max = 50), custom = "crate::utils::validation::not_blank")]
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewLeaveRequest {
    /// End-before-start is accepted; callers may surface it as a warning.
    pub fn ends_before_start(&self) -> bool {
        self.end_date < self.start_date
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct LeaveStatusUpdate {
    pub status: LeaveStatus,
}
