use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{restaurant::RestaurantRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{restaurant::Restaurant, user::User},
    service::token::{AccountKind, TokenService, TokenType},
};

/// Header carrying the access token.
pub const ACCESS_TOKEN_HEADER: &str = "authorization";

/// Header carrying the refresh token on refresh routes.
pub const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

/// Resolves the account behind the tokens of a request.
///
/// Access tokens are read from `Authorization` (with or without the `Bearer `
/// prefix), refresh tokens from `X-Refresh-Token`. Every failure results in
/// an [`AuthError`] that maps to 403 Forbidden.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires a valid restaurant access token.
    pub async fn restaurant(&self) -> Result<Restaurant, AppError> {
        let email = self.subject(AccountKind::Restaurant, TokenType::Access)?;
        self.find_restaurant(email).await
    }

    /// Requires a valid restaurant refresh token.
    pub async fn restaurant_refresh(&self) -> Result<Restaurant, AppError> {
        let email = self.subject(AccountKind::Restaurant, TokenType::Refresh)?;
        self.find_restaurant(email).await
    }

    /// Requires a valid user access token.
    pub async fn user(&self) -> Result<User, AppError> {
        let email = self.subject(AccountKind::User, TokenType::Access)?;
        self.find_user(email).await
    }

    /// Requires a valid user refresh token.
    pub async fn user_refresh(&self) -> Result<User, AppError> {
        let email = self.subject(AccountKind::User, TokenType::Refresh)?;
        self.find_user(email).await
    }

    async fn find_restaurant(&self, email: String) -> Result<Restaurant, AppError> {
        let Some(restaurant) = RestaurantRepository::new(self.db)
            .find_by_email(&email)
            .await?
        else {
            return Err(AuthError::AccountNotInDatabase(email).into());
        };

        Ok(restaurant)
    }

    async fn find_user(&self, email: String) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::AccountNotInDatabase(email).into());
        };

        Ok(user)
    }

    /// Validates the token for `token_type` and returns its subject email.
    fn subject(&self, kind: AccountKind, token_type: TokenType) -> Result<String, AuthError> {
        let header = match token_type {
            TokenType::Access => ACCESS_TOKEN_HEADER,
            TokenType::Refresh => REFRESH_TOKEN_HEADER,
        };

        let token = self
            .headers
            .get(header)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim())
            .map(|value| value.strip_prefix("Bearer ").unwrap_or(value).trim())
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingToken(header))?;

        let claims = self.tokens.validate(token, kind, token_type)?;

        Ok(claims.sub)
    }
}
