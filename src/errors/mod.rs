use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::outcome::Outcome;

pub const CONNECTION_FAILED: &str = "Could not connect to the database";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    /// The detail is only logged; callers always see [`CONNECTION_FAILED`].
    #[error("Could not connect to the database")]
    Connection(String),
    #[error("Constraint violation: {0}")]
    Constraint(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not supported: {0}")]
    Unsupported(String),
}

pub type AppResult<T> = Result<T, AppError>;

// SQLSTATE classes: 08 connection exception, 28 invalid authorization,
// 3D000 invalid catalog name (unknown database).
fn is_connection_state(code: &str) -> bool {
    code.starts_with("08") || code.starts_with("28") || code == "3D000"
}

// 22 data exception, 23 integrity constraint violation.
fn is_constraint_state(code: &str) -> bool {
    code.starts_with("22") || code.starts_with("23")
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => {
                log::error!("Database connection failure: {}", err);
                AppError::Connection(err.to_string())
            }
            sqlx::Error::Database(db) => {
                let code = db.code().map(|c| c.into_owned()).unwrap_or_default();
                if is_connection_state(&code) {
                    log::error!("Database rejected connection ({}): {}", code, db);
                    AppError::Connection(db.to_string())
                } else if is_constraint_state(&code) {
                    log::error!("Statement violated a constraint ({}): {}", code, db);
                    AppError::Constraint(db.message().to_string())
                } else {
                    log::error!("Statement failed ({}): {}", code, db);
                    AppError::DatabaseError(db.message().to_string())
                }
            }
            _ => {
                log::error!("Statement failed: {}", err);
                AppError::DatabaseError(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Constraint(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Outcome::<()>::failure(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_a_connection_failure() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Connection(_)));
        assert_eq!(err.to_string(), CONNECTION_FAILED);
    }

    #[test]
    fn io_error_is_a_connection_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AppError::from(sqlx::Error::Io(io));
        assert!(matches!(err, AppError::Connection(_)));
    }

    #[test]
    fn missing_row_is_a_statement_failure() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[test]
    fn sqlstate_classes() {
        assert!(is_connection_state("08006"));
        assert!(is_connection_state("28P01"));
        assert!(is_connection_state("3D000"));
        assert!(is_constraint_state("23503"));
        assert!(is_constraint_state("22007"));
        assert!(!is_constraint_state("42P01"));
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::Connection("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Unsupported("turnover".into()).status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            AppError::Constraint("fk".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
