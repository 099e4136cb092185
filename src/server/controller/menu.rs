//! Restaurant-side management of the menu tree.
//!
//! Every handler requires a restaurant access token. Entities are addressed
//! by ID and must belong to the authenticated restaurant through their parent
//! chain; foreign IDs are reported as 404.

pub mod category;
pub mod group;
pub mod option;

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
        menu::{EditMenuDto, MenuDto, MenuListQuery, RemoveMenuDto, UploadMenuDto, UploadMenuResDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::menu::{CreateMenuParam, MenuWithGroups, UpdateMenuParam},
        service::menu::MenuService,
        state::AppState,
    },
};

/// Tag for grouping menu management endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// Create a menu with optional embedded option groups and options.
///
/// The menu, its groups and their options are inserted in one transaction.
///
/// # Returns
/// - `201 Created` - Menu created, body carries its ID
/// - `400 Bad Request` - Payload failed validation
/// - `403 Forbidden` - Invalid or missing access token
/// - `404 Not Found` - Category unknown or owned by another restaurant
/// - `409 Conflict` - Menu name taken in the category, or repeated group/option names
#[utoipa::path(
    post,
    path = "/api/restaurant/menu",
    tag = MENU_TAG,
    request_body = UploadMenuDto,
    responses(
        (status = 201, description = "Menu created", body = UploadMenuResDto),
        (status = 400, description = "Invalid menu data", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu category not found", body = ErrorDto),
        (status = 409, description = "Menu name already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_menu(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UploadMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let created = MenuService::new(&state.db)
        .upload(restaurant.id, CreateMenuParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadMenuResDto {
            m_id: created.menu.id,
        }),
    ))
}

/// List the menus of a category with their groups and options.
#[utoipa::path(
    get,
    path = "/api/restaurant/menu",
    tag = MENU_TAG,
    params(MenuListQuery),
    responses(
        (status = 200, description = "Menus of the category", body = Vec<MenuDto>),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu category not found", body = ErrorDto)
    ),
)]
pub async fn get_menus(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MenuListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let menus = MenuService::new(&state.db)
        .list(restaurant.id, query.mc_id)
        .await?;

    let menus_dto: Vec<_> = menus.into_iter().map(MenuWithGroups::into_dto).collect();

    Ok((StatusCode::OK, Json(menus_dto)))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/menu/{m_id}",
    tag = MENU_TAG,
    params(
        ("m_id" = i32, Path, description = "Menu ID")
    ),
    responses(
        (status = 200, description = "Menu with groups and options", body = MenuDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto)
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(m_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let menu = MenuService::new(&state.db).get(restaurant.id, m_id).await?;

    Ok((StatusCode::OK, Json(menu.into_dto())))
}

/// Update a menu's name, price, description or image.
///
/// Omitted fields keep their stored value.
#[utoipa::path(
    patch,
    path = "/api/restaurant/menu",
    tag = MENU_TAG,
    request_body = EditMenuDto,
    responses(
        (status = 200, description = "Updated menu", body = MenuDto),
        (status = 400, description = "Invalid menu data", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 409, description = "Menu name already used", body = ErrorDto)
    ),
)]
pub async fn edit_menu(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EditMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let menu = MenuService::new(&state.db)
        .edit(restaurant.id, UpdateMenuParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(menu.into_dto())))
}

/// Remove menus together with their option groups and options.
#[utoipa::path(
    delete,
    path = "/api/restaurant/menu",
    tag = MENU_TAG,
    request_body = RemoveMenuDto,
    responses(
        (status = 200, description = "Menus removed"),
        (status = 400, description = "Empty ID list", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto)
    ),
)]
pub async fn remove_menu(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RemoveMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    MenuService::new(&state.db)
        .remove(restaurant.id, &payload.m_id)
        .await?;

    Ok(StatusCode::OK)
}
