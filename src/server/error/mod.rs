//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type returned by services and controllers.
//! Domain-specific errors live in submodules and convert into it with `?`;
//! its `IntoResponse` impl turns each variant into a status code and an
//! `ErrorDto` body.

pub mod auth;
pub mod config;
pub mod internal;
pub mod order;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, order::OrderError,
    },
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment configuration at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Token or credential failure.
    ///
    /// Maps to 401, 403 or 404 through `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Cart could not be turned into an order snapshot (400).
    #[error(transparent)]
    OrderErr(#[from] OrderError),

    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Unexpected failure such as hashing or token encoding.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Request payload failed its `validator` rules (400).
    #[error(transparent)]
    ValidationErr(#[from] validator::ValidationErrors),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Entity is unknown or owned by another account (404).
    #[error("{0}")]
    NotFound(String),

    /// Duplicate name or email, or a change the entity's state forbids (409).
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Maps a unique-constraint violation to `Conflict` with `message`.
    ///
    /// Used on inserts and renames whose pre-check can lose a race with a
    /// concurrent request. Other database errors pass through unchanged.
    pub fn conflict_on_unique(message: impl Into<String>) -> impl FnOnce(DbErr) -> AppError {
        let message = message.into();
        move |err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message),
            _ => AppError::DbErr(err),
        }
    }

    fn client_status(&self) -> Option<StatusCode> {
        match self {
            Self::OrderErr(_) | Self::ValidationErr(_) => Some(StatusCode::BAD_REQUEST),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::Conflict(_) => Some(StatusCode::CONFLICT),
            _ => None,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Client errors carry their message in the body. Everything else is logged
/// and answered with a generic 500 so storage details never reach the caller.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            err => match err.client_status() {
                Some(status) => (
                    status,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response(),
                None => InternalServerError(err).into_response(),
            },
        }
    }
}

/// Logs any displayable error and responds with a generic 500 body.
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
