//! JWT issuing and validation.
//!
//! Tokens identify an account by email (`sub`) together with the account
//! family (`kind`) and purpose (`token_type`). Access tokens authorize API
//! calls; refresh tokens can only be exchanged for a new access token.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::TokenPairDto,
    server::{
        config::Config,
        error::{auth::AuthError, internal::InternalError, AppError},
    },
};

/// Which account table a token subject belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Restaurant,
    User,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::User => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Account email
    pub sub: String,
    pub kind: AccountKind,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
}

/// Access and refresh token issued together at sign in.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        }
    }
}

struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

#[derive(Clone)]
pub struct TokenService {
    keys: Arc<TokenKeys>,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl_seconds: i64, refresh_ttl_seconds: i64) -> Self {
        Self {
            keys: Arc::new(TokenKeys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                access_ttl_seconds,
                refresh_ttl_seconds,
            }),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            config.access_token_ttl_seconds,
            config.refresh_token_ttl_seconds,
        )
    }

    /// Issues a fresh access/refresh pair for the account.
    pub fn issue_pair(&self, kind: AccountKind, email: &str) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.issue(kind, TokenType::Access, email)?,
            refresh_token: self.issue(kind, TokenType::Refresh, email)?,
        })
    }

    pub fn issue(
        &self,
        kind: AccountKind,
        token_type: TokenType,
        email: &str,
    ) -> Result<String, AppError> {
        let ttl = match token_type {
            TokenType::Access => self.keys.access_ttl_seconds,
            TokenType::Refresh => self.keys.refresh_ttl_seconds,
        };
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            kind,
            token_type,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(InternalError::TokenEncode)?;

        Ok(token)
    }

    /// Validates signature and expiry, then checks the token was issued for
    /// the expected account kind and purpose.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid for the requested use
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed, or expired
    /// - `Err(AuthError::TokenKindMismatch)` - Wrong account kind or token type
    pub fn validate(
        &self,
        token: &str,
        kind: AccountKind,
        token_type: TokenType,
    ) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if claims.kind != kind {
            return Err(AuthError::TokenKindMismatch {
                expected: kind.as_str(),
                found: claims.kind.as_str().to_string(),
            });
        }
        if claims.token_type != token_type {
            return Err(AuthError::TokenKindMismatch {
                expected: token_type.as_str(),
                found: claims.token_type.as_str().to_string(),
            });
        }

        Ok(claims)
    }
}
