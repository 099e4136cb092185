use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AccessTokenDto, CheckEmailQuery, SignInDto, TokenPairDto},
        restaurant::SignUpResultDto,
        user::{SignUpUserDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::SignUpUserParam,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user account endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Check whether an email is still free for a new user account.
#[utoipa::path(
    get,
    path = "/api/user/auth/email",
    tag = USER_TAG,
    params(CheckEmailQuery),
    responses(
        (status = 200, description = "Email is available"),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn check_email(
    State(state): State<AppState>,
    Query(query): Query<CheckEmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    UserService::new(&state.db).check_email(&query.email).await?;

    Ok(StatusCode::OK)
}

/// Register a new user account.
///
/// # Returns
/// - `201 Created` - Account created, body carries the new user ID
/// - `400 Bad Request` - Payload failed validation
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/user/sign_up",
    tag = USER_TAG,
    request_body = SignUpUserDto,
    responses(
        (status = 201, description = "User registered", body = SignUpResultDto),
        (status = 400, description = "Invalid sign up data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpUserDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = UserService::new(&state.db)
        .sign_up(SignUpUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(SignUpResultDto { id: user.id })))
}

#[utoipa::path(
    post,
    path = "/api/user/auth/sign_in",
    tag = USER_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = TokenPairDto),
        (status = 400, description = "Invalid credentials payload", body = ErrorDto),
        (status = 401, description = "Incorrect password", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let pair = UserService::new(&state.db)
        .sign_in(&state.tokens, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(pair.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/user/auth/refresh",
    tag = USER_TAG,
    responses(
        (status = 200, description = "New access token", body = AccessTokenDto),
        (status = 403, description = "Invalid or missing refresh token", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user_refresh()
        .await?;

    let access_token = UserService::new(&state.db).refresh(&state.tokens, &user)?;

    Ok((StatusCode::OK, Json(AccessTokenDto { access_token })))
}

#[utoipa::path(
    get,
    path = "/api/user/auth",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Access token is valid"),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn auth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user()
        .await?;

    Ok(StatusCode::OK)
}

/// Get the authenticated user's profile.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn load(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user()
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete the user account. Past orders stay with the restaurants.
#[utoipa::path(
    delete,
    path = "/api/user/leave",
    tag = USER_TAG,
    responses(
        (status = 200, description = "User removed"),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user()
        .await?;

    UserService::new(&state.db).leave(user.id).await?;

    Ok(StatusCode::OK)
}
