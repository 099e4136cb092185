//! Read-only menu browsing for signed-in users.

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
        menu::{MenuCategoryDto, MenuCategoryListQuery, MenuDto, MenuListQuery},
        restaurant::PaginatedRestaurantsDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::menu::{MenuCategory, MenuWithGroups},
        service::{
            menu::{category::MenuCategoryService, MenuService},
            restaurant::RestaurantService,
        },
        state::AppState,
        util::pagination::PaginationParams,
    },
};

/// Tag for grouping user browsing endpoints in OpenAPI documentation
pub static BROWSE_TAG: &str = "browse";

/// Get a page of the restaurant directory ordered by name.
#[utoipa::path(
    get,
    path = "/api/user/restaurant",
    tag = BROWSE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of restaurants", body = PaginatedRestaurantsDto),
        (status = 400, description = "Page or page size out of range", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn browse_restaurants(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user()
        .await?;
    params.validate()?;

    let restaurants = RestaurantService::new(&state.db)
        .get_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(restaurants.into_dto())))
}

/// List the menu categories of a restaurant.
///
/// # Returns
/// - `200 OK` - Categories in creation order
/// - `403 Forbidden` - Invalid or missing access token
/// - `404 Not Found` - Restaurant does not exist
#[utoipa::path(
    get,
    path = "/api/user/menu/category",
    tag = BROWSE_TAG,
    params(MenuCategoryListQuery),
    responses(
        (status = 200, description = "Menu categories", body = Vec<MenuCategoryDto>),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto)
    ),
)]
pub async fn browse_menu_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MenuCategoryListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user()
        .await?;

    let categories = MenuCategoryService::new(&state.db)
        .list_for_user(query.r_id)
        .await?;

    let categories_dto: Vec<_> = categories
        .into_iter()
        .map(MenuCategory::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(categories_dto)))
}

/// List the menus of a category with their option groups and options.
#[utoipa::path(
    get,
    path = "/api/user/menu",
    tag = BROWSE_TAG,
    params(MenuListQuery),
    responses(
        (status = 200, description = "Menus with groups and options", body = Vec<MenuDto>),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu category not found", body = ErrorDto)
    ),
)]
pub async fn browse_menus(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MenuListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .user()
        .await?;

    let menus = MenuService::new(&state.db)
        .list_for_user(query.mc_id)
        .await?;

    let menus_dto: Vec<_> = menus.into_iter().map(MenuWithGroups::into_dto).collect();

    Ok((StatusCode::OK, Json(menus_dto)))
}
