use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        menu::{
            EditMenuCategoryDto, MenuCategoryDto, RemoveMenuCategoryDto, UploadMenuCategoryDto,
            UploadMenuCategoryResDto,
        },
    },
    server::{
        controller::menu::MENU_TAG, error::AppError, middleware::auth::AuthGuard,
        model::menu::MenuCategory, service::menu::category::MenuCategoryService,
        state::AppState,
    },
};

/// Create a menu category for the authenticated restaurant.
///
/// # Returns
/// - `201 Created` - Category created, body carries its ID
/// - `400 Bad Request` - Invalid name
/// - `403 Forbidden` - Invalid or missing access token
/// - `409 Conflict` - The restaurant already has a category with this name
#[utoipa::path(
    post,
    path = "/api/restaurant/menu/category",
    tag = MENU_TAG,
    request_body = UploadMenuCategoryDto,
    responses(
        (status = 201, description = "Menu category created", body = UploadMenuCategoryResDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 409, description = "Category name already used", body = ErrorDto)
    ),
)]
pub async fn upload_menu_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UploadMenuCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let category = MenuCategoryService::new(&state.db)
        .upload(restaurant.id, payload.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadMenuCategoryResDto { mc_id: category.id }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/menu/category",
    tag = MENU_TAG,
    responses(
        (status = 200, description = "Menu categories of the restaurant", body = Vec<MenuCategoryDto>),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto)
    ),
)]
pub async fn get_menu_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let categories = MenuCategoryService::new(&state.db)
        .list(restaurant.id)
        .await?;

    let categories_dto: Vec<_> = categories
        .into_iter()
        .map(MenuCategory::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(categories_dto)))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/menu/category/{mc_id}",
    tag = MENU_TAG,
    params(
        ("mc_id" = i32, Path, description = "Menu category ID")
    ),
    responses(
        (status = 200, description = "Menu category", body = MenuCategoryDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu category not found", body = ErrorDto)
    ),
)]
pub async fn get_menu_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(mc_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let category = MenuCategoryService::new(&state.db)
        .get(restaurant.id, mc_id)
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Rename a menu category.
#[utoipa::path(
    patch,
    path = "/api/restaurant/menu/category",
    tag = MENU_TAG,
    request_body = EditMenuCategoryDto,
    responses(
        (status = 200, description = "Renamed menu category", body = MenuCategoryDto),
        (status = 400, description = "Invalid name", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu category not found", body = ErrorDto),
        (status = 409, description = "Category name already used", body = ErrorDto)
    ),
)]
pub async fn edit_menu_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EditMenuCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let category = MenuCategoryService::new(&state.db)
        .edit(restaurant.id, payload.mc_id, payload.name)
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Remove menu categories together with their menus, groups and options.
///
/// Either every listed category is removed or none is.
///
/// # Returns
/// - `200 OK` - Categories removed
/// - `403 Forbidden` - Invalid or missing access token
/// - `404 Not Found` - An ID is unknown or belongs to another restaurant
#[utoipa::path(
    delete,
    path = "/api/restaurant/menu/category",
    tag = MENU_TAG,
    request_body = RemoveMenuCategoryDto,
    responses(
        (status = 200, description = "Menu categories removed"),
        (status = 400, description = "Empty ID list", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu category not found", body = ErrorDto)
    ),
)]
pub async fn remove_menu_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RemoveMenuCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    MenuCategoryService::new(&state.db)
        .remove(restaurant.id, &payload.mc_id)
        .await?;

    Ok(StatusCode::OK)
}
