use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, EditOrderStatusDto, OrderDto, PaginatedOrdersDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::order::PlaceOrderParam,
        service::order::OrderService, state::AppState, util::pagination::PaginationParams,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order.
///
/// The cart carries only identifiers and quantities. Names and prices are
/// taken from the restaurant's current menu and copied into the stored order,
/// so later menu edits never change it.
///
/// # Returns
/// - `201 Created` - The stored order in `not_payment` status
/// - `400 Bad Request` - Invalid cart: foreign menu/group/option, too many
///   options in a group, bad quantity or discount
/// - `403 Forbidden` - Invalid or missing user access token
/// - `404 Not Found` - Restaurant does not exist
#[utoipa::path(
    post,
    path = "/api/user/order",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid cart", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user()
        .await?;
    payload.validate()?;

    let order = OrderService::new(&state.db)
        .place(user.id, PlaceOrderParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get a page of the user's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/user/order",
    tag = ORDER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of orders", body = PaginatedOrdersDto),
        (status = 400, description = "Page or page size out of range", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn get_user_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user()
        .await?;
    params.validate()?;

    let orders = OrderService::new(&state.db)
        .list_for_user(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/user/order/{od_id}",
    tag = ORDER_TAG,
    params(
        ("od_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_user_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(od_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user()
        .await?;

    let order = OrderService::new(&state.db)
        .get_for_user(user.id, od_id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Get a page of the orders the restaurant received, newest first.
#[utoipa::path(
    get,
    path = "/api/restaurant/order",
    tag = ORDER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of orders", body = PaginatedOrdersDto),
        (status = 400, description = "Page or page size out of range", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    params.validate()?;

    let orders = OrderService::new(&state.db)
        .list_for_restaurant(restaurant.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/order/{od_id}",
    tag = ORDER_TAG,
    params(
        ("od_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(od_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let order = OrderService::new(&state.db)
        .get_for_restaurant(restaurant.id, od_id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Change the status of a received order.
///
/// `done` and `cancelled` are final; setting the status an order already
/// has is refused as well.
///
/// # Returns
/// - `200 OK` - Order with the new status
/// - `403 Forbidden` - Invalid or missing access token
/// - `404 Not Found` - Order unknown or received by another restaurant
/// - `409 Conflict` - Order is closed or already has this status
#[utoipa::path(
    patch,
    path = "/api/restaurant/order/{od_id}/status",
    tag = ORDER_TAG,
    params(
        ("od_id" = i32, Path, description = "Order ID")
    ),
    request_body = EditOrderStatusDto,
    responses(
        (status = 200, description = "Order with the new status", body = OrderDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto)
    ),
)]
pub async fn edit_order_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(od_id): Path<i32>,
    Json(payload): Json<EditOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let order = OrderService::new(&state.db)
        .update_status(restaurant.id, od_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
