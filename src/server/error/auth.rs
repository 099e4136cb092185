use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request did not carry the expected token header.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Missing token in header {0}")]
    MissingToken(&'static str),

    /// Token failed signature or expiry validation.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token is valid but was issued for a different purpose, e.g. a refresh
    /// token presented as an access token or a user token on a restaurant route.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Token of kind {found} used where {expected} is required")]
    TokenKindMismatch {
        expected: &'static str,
        found: String,
    },

    /// Token subject no longer resolves to an account.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account {0} referenced by token does not exist")]
    AccountNotInDatabase(String),

    /// No account is registered with the email given at sign in.
    ///
    /// Results in a 404 Not Found response.
    #[error("No account registered for {0}")]
    UnknownEmail(String),

    /// Password does not match the stored hash.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Password mismatch for account {0}")]
    PasswordMismatch(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `TokenKindMismatch` / `AccountNotInDatabase` → 403 Forbidden
/// - `UnknownEmail` → 404 Not Found with "Account not found"
/// - `PasswordMismatch` → 401 Unauthorized with "Incorrect password"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken(_)
            | Self::InvalidToken(_)
            | Self::TokenKindMismatch { .. }
            | Self::AccountNotInDatabase(_) => (StatusCode::FORBIDDEN, "Invalid or missing token"),
            Self::UnknownEmail(_) => (StatusCode::NOT_FOUND, "Account not found"),
            Self::PasswordMismatch(_) => (StatusCode::UNAUTHORIZED, "Incorrect password"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
