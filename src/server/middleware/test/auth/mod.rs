use axum::http::{HeaderMap, HeaderValue};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, ACCESS_TOKEN_HEADER, REFRESH_TOKEN_HEADER},
    service::token::{AccountKind, TokenService},
};

mod restaurant;
mod user;

fn tokens() -> TokenService {
    TokenService::new("guard-test-secret", 3600, 7200)
}

fn headers(access: Option<&str>, refresh: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(access) = access {
        headers.insert(ACCESS_TOKEN_HEADER, HeaderValue::from_str(access).unwrap());
    }
    if let Some(refresh) = refresh {
        headers.insert(REFRESH_TOKEN_HEADER, HeaderValue::from_str(refresh).unwrap());
    }
    headers
}

fn assert_auth_err(result: Result<impl std::fmt::Debug, AppError>) -> AuthError {
    match result {
        Err(AppError::AuthErr(err)) => err,
        other => panic!("Expected AuthError, got: {:?}", other),
    }
}
