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
        menu::{
            EditGroupDto, GroupDto, GroupListQuery, RemoveGroupDto, UploadGroupDto,
            UploadGroupResDto,
        },
    },
    server::{
        controller::menu::MENU_TAG,
        error::AppError,
        middleware::auth::AuthGuard,
        model::menu::{CreateGroupParam, GroupWithOptions, UpdateGroupParam},
        service::menu::group::OptionGroupService,
        state::AppState,
    },
};

/// Add an option group to one of the restaurant's menus.
///
/// Options listed in the payload are created with the group in one transaction.
#[utoipa::path(
    post,
    path = "/api/restaurant/menu/group",
    tag = MENU_TAG,
    request_body = UploadGroupDto,
    responses(
        (status = 201, description = "Option group created", body = UploadGroupResDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 409, description = "Group name already used on this menu, or repeated option names", body = ErrorDto)
    ),
)]
pub async fn upload_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UploadGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let created = OptionGroupService::new(&state.db)
        .upload(restaurant.id, CreateGroupParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadGroupResDto {
            g_id: created.group.id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/menu/group",
    tag = MENU_TAG,
    params(GroupListQuery),
    responses(
        (status = 200, description = "Option groups of the menu", body = Vec<GroupDto>),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<GroupListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let groups = OptionGroupService::new(&state.db)
        .list(restaurant.id, query.m_id)
        .await?;

    let groups_dto: Vec<_> = groups
        .into_iter()
        .map(GroupWithOptions::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(groups_dto)))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/menu/group/{g_id}",
    tag = MENU_TAG,
    params(
        ("g_id" = i32, Path, description = "Option group ID")
    ),
    responses(
        (status = 200, description = "Option group with its options", body = GroupDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Option group not found", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(g_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let group = OptionGroupService::new(&state.db)
        .get(restaurant.id, g_id)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Update an option group's name or max_count.
#[utoipa::path(
    patch,
    path = "/api/restaurant/menu/group",
    tag = MENU_TAG,
    request_body = EditGroupDto,
    responses(
        (status = 200, description = "Updated option group", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Option group not found", body = ErrorDto),
        (status = 409, description = "Group name already used on this menu", body = ErrorDto)
    ),
)]
pub async fn edit_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EditGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let group = OptionGroupService::new(&state.db)
        .edit(restaurant.id, UpdateGroupParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Remove option groups together with their options.
#[utoipa::path(
    delete,
    path = "/api/restaurant/menu/group",
    tag = MENU_TAG,
    request_body = RemoveGroupDto,
    responses(
        (status = 200, description = "Option groups removed"),
        (status = 400, description = "Empty ID list", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Option group not found", body = ErrorDto)
    ),
)]
pub async fn remove_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RemoveGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    OptionGroupService::new(&state.db)
        .remove(restaurant.id, &payload.g_id)
        .await?;

    Ok(StatusCode::OK)
}
