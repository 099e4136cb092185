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
            EditOptionDto, OptionDto, OptionListQuery, RemoveOptionDto, UploadOptionDto,
            UploadOptionResDto,
        },
    },
    server::{
        controller::menu::MENU_TAG,
        error::AppError,
        middleware::auth::AuthGuard,
        model::menu::{CreateOptionParam, MenuOption, UpdateOptionParam},
        service::menu::option::MenuOptionService,
        state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/api/restaurant/menu/option",
    tag = MENU_TAG,
    request_body = UploadOptionDto,
    responses(
        (status = 201, description = "Option created", body = UploadOptionResDto),
        (status = 400, description = "Invalid option data", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Option group not found", body = ErrorDto),
        (status = 409, description = "Option name already used in this group", body = ErrorDto)
    ),
)]
pub async fn upload_option(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UploadOptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let option = MenuOptionService::new(&state.db)
        .upload(restaurant.id, CreateOptionParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadOptionResDto { o_id: option.id }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/menu/option",
    tag = MENU_TAG,
    params(OptionListQuery),
    responses(
        (status = 200, description = "Options of the group", body = Vec<OptionDto>),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Option group not found", body = ErrorDto)
    ),
)]
pub async fn get_options(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<OptionListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let options = MenuOptionService::new(&state.db)
        .list(restaurant.id, query.g_id)
        .await?;

    let options_dto: Vec<_> = options.into_iter().map(MenuOption::into_dto).collect();

    Ok((StatusCode::OK, Json(options_dto)))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/menu/option/{o_id}",
    tag = MENU_TAG,
    params(
        ("o_id" = i32, Path, description = "Option ID")
    ),
    responses(
        (status = 200, description = "Option", body = OptionDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Option not found", body = ErrorDto)
    ),
)]
pub async fn get_option(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(o_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;

    let option = MenuOptionService::new(&state.db)
        .get(restaurant.id, o_id)
        .await?;

    Ok((StatusCode::OK, Json(option.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/restaurant/menu/option",
    tag = MENU_TAG,
    request_body = EditOptionDto,
    responses(
        (status = 200, description = "Updated option", body = OptionDto),
        (status = 400, description = "Invalid option data", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Option not found", body = ErrorDto),
        (status = 409, description = "Option name already used in this group", body = ErrorDto)
    ),
)]
pub async fn edit_option(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EditOptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    let option = MenuOptionService::new(&state.db)
        .edit(restaurant.id, UpdateOptionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(option.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/restaurant/menu/option",
    tag = MENU_TAG,
    request_body = RemoveOptionDto,
    responses(
        (status = 200, description = "Options removed"),
        (status = 400, description = "Empty ID list", body = ErrorDto),
        (status = 403, description = "Invalid or missing access token", body = ErrorDto),
        (status = 404, description = "Option not found", body = ErrorDto)
    ),
)]
pub async fn remove_option(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RemoveOptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = AuthGuard::new(&state.db, &state.tokens, &headers)
        .restaurant()
        .await?;
    payload.validate()?;

    MenuOptionService::new(&state.db)
        .remove(restaurant.id, &payload.o_id)
        .await?;

    Ok(StatusCode::OK)
}
