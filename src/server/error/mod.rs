//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion, while the message-carrying variants map to specific status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Constraint violations that reach the response layer untranslated become
    /// 409 Conflict; everything else is a 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Uniqueness or foreign-key conflict with existing data.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Translates a constraint violation into a `Conflict` carrying `message`.
    ///
    /// Unique and foreign-key violations become `AppError::Conflict(message)`; any other
    /// database error is passed through unchanged as `AppError::DbErr`.
    ///
    /// # Arguments
    /// - `err` - Error returned by the database
    /// - `message` - Client-facing message describing the conflict
    pub fn from_constraint(err: DbErr, message: &str) -> Self {
        if is_constraint_violation(&err) {
            AppError::Conflict(message.to_string())
        } else {
            AppError::DbErr(err)
        }
    }
}

/// Whether the database rejected a statement for a unique or foreign-key constraint.
pub fn is_constraint_violation(err: &DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_)) | Some(SqlErr::ForeignKeyConstraintViolation(_))
    ) || is_sqlite_foreign_key_violation(err)
}

/// SQLite extended result codes `SQLITE_CONSTRAINT_FOREIGNKEY` and `SQLITE_CONSTRAINT_TRIGGER`.
///
/// An `ON DELETE RESTRICT` failure carries the trigger code, which `DbErr::sql_err` does not classify.
const SQLITE_FOREIGN_KEY_CODES: [&str; 2] = ["787", "1811"];

const SQLITE_FOREIGN_KEY_MESSAGE: &str = "FOREIGN KEY constraint failed";

fn is_sqlite_foreign_key_violation(err: &DbErr) -> bool {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => e
            .as_database_error()
            .is_some_and(|db_err| {
                db_err
                    .code()
                    .is_some_and(|code| SQLITE_FOREIGN_KEY_CODES.iter().any(|known| *known == code))
                    || db_err.message() == SQLITE_FOREIGN_KEY_MESSAGE
            }),
        DbErr::Exec(RuntimeErr::Internal(msg)) | DbErr::Query(RuntimeErr::Internal(msg)) => {
            msg.contains(SQLITE_FOREIGN_KEY_MESSAGE)
        }
        _ => false,
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        if matches!(rejection, JsonRejection::JsonDataError(_)) && message.contains("feature_ids") {
            return AppError::BadRequest("feature_ids must be an array of UUIDs.".to_string());
        }

        AppError::BadRequest(message)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` and constraint-violating `DbErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(err) if is_constraint_violation(&err) => {
                tracing::warn!("Unhandled constraint violation: {}", err);
                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "The request conflicts with existing data.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
