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
        auth::{
            AccessTokenDto, CheckEmailQuery, CheckPasswordDto, EditPasswordDto, SignInDto,
            TokenPairDto,
        },
        restaurant::{
            EditAddressDto, EditRestaurantInformationDto, RestaurantDto, SignUpRestaurantDto,
            SignUpResultDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::restaurant::{SignUpRestaurantParam, UpdateRestaurantParam},
        service::restaurant::RestaurantService,
        state::AppState,
    },
};

/// Tag for grouping restaurant account endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

/// Check whether an email is still free for a new restaurant account.
///
/// # Returns
/// - `200 OK` - Email is not registered
/// - `400 Bad Request` - Not a valid email
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    get,
    path = "/api/restaurant/auth/email",
    tag = RESTAURANT_TAG,
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

    RestaurantService::new(&state.db)
        .check_email(&query.email)
        .await?;

    Ok(StatusCode::OK)
}

/// Register a new restaurant account.
///
/// The password is hashed before it is stored.
///
/// # Returns
/// - `201 Created` - Account created, body carries the new restaurant ID
/// - `400 Bad Request` - Payload failed validation
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/restaurant/sign_up",
    tag = RESTAURANT_TAG,
    request_body = SignUpRestaurantDto,
    responses(
        (status = 201, description = "Restaurant registered", body = SignUpResultDto),
        (status = 400, description = "Invalid sign up data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let restaurant = RestaurantService::new(&state.db)
        .sign_up(SignUpRestaurantParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResultDto { id: restaurant.id }),
    ))
}

/// Sign in with email and password.
///
/// # Returns
/// - `200 OK` - Access and refresh token pair
/// - `401 Unauthorized` - Wrong password
/// - `404 Not Found` - No restaurant registered with the email
#[utoipa::path(
    post,
    path = "/api/restaurant/auth/sign_in",
    tag = RESTAURANT_TAG,
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

    let pair = RestaurantService::new(&state.db)
        .sign_in(&state.tokens, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(pair.into_dto())))
}

/// Exchange the refresh token in `X-Refresh-Token` for a new access token.
#[utoipa::path(
    get,
    path = "/api/restaurant/auth/refresh",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "New access token", body = AccessTokenDto),
        (status = 403, description = "Invalid or missing refresh token", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant_refresh()
        .await?;

    let access_token = RestaurantService::new(&state.db).refresh(&state.tokens, &restaurant)?;

    Ok((StatusCode::OK, Json(AccessTokenDto { access_token })))
}

/// Check that the access token is valid.
#[utoipa::path(
    get,
    path = "/api/restaurant/auth",
    tag = RESTAURANT_TAG,
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
        .restaurant()
        .await?;

    Ok(StatusCode::OK)
}

/// Confirm the current password before sensitive changes.
///
/// # Returns
/// - `200 OK` - Password matches
/// - `401 Unauthorized` - Password does not match
/// - `403 Forbidden` - Invalid or missing access token
#[utoipa::path(
    post,
    path = "/api/restaurant/auth/password",
    tag = RESTAURANT_TAG,
    request_body = CheckPasswordDto,
    responses(
        (status = 200, description = "Password matches"),
        (status = 401, description = "Incorrect password", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn check_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CheckPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    RestaurantService::new(&state.db)
        .check_password(&restaurant, &payload.password)
        .await?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    patch,
    path = "/api/restaurant/password",
    tag = RESTAURANT_TAG,
    request_body = EditPasswordDto,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Invalid password", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn edit_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EditPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    RestaurantService::new(&state.db)
        .edit_password(restaurant.id, &payload.password)
        .await?;

    Ok(StatusCode::OK)
}

/// Update name, phone or description. Omitted fields keep their value.
#[utoipa::path(
    patch,
    path = "/api/restaurant/information",
    tag = RESTAURANT_TAG,
    request_body = EditRestaurantInformationDto,
    responses(
        (status = 200, description = "Updated restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid information", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn edit_information(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EditRestaurantInformationDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let restaurant = RestaurantService::new(&state.db)
        .edit(UpdateRestaurantParam::information(restaurant.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(restaurant.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/restaurant/address",
    tag = RESTAURANT_TAG,
    request_body = EditAddressDto,
    responses(
        (status = 200, description = "Updated restaurant", body = RestaurantDto),
        (status = 400, description = "Invalid address", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn edit_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EditAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let restaurant = RestaurantService::new(&state.db)
        .edit(UpdateRestaurantParam::address(restaurant.id, payload.address))
        .await?;

    Ok((StatusCode::OK, Json(restaurant.into_dto())))
}

/// Get the authenticated restaurant's profile.
#[utoipa::path(
    get,
    path = "/api/restaurant",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "Restaurant profile", body = RestaurantDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn load(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    Ok((StatusCode::OK, Json(restaurant.into_dto())))
}

/// Delete the restaurant account.
///
/// Removes every category, menu, option group and option of the restaurant.
/// Orders stay in the users' history with the restaurant reference cleared.
///
/// # Returns
/// - `200 OK` - Account removed
/// - `403 Forbidden` - Invalid or missing access token
/// - `500 Internal Server Error` - Database error, nothing was removed
#[utoipa::path(
    delete,
    path = "/api/restaurant/leave",
    tag = RESTAURANT_TAG,
    responses(
        (status = 200, description = "Restaurant removed"),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    RestaurantService::new(&state.db)
        .leave(restaurant.id)
        .await?;

    Ok(StatusCode::OK)
}
