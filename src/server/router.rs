use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        browse::{self, BROWSE_TAG},
        menu::{self, category, group, option, MENU_TAG},
        order::{self, ORDER_TAG},
        restaurant::{self, RESTAURANT_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "restaurant-order",
        description = "Restaurant menu management and ordering API"
    ),
    tags(
        (name = RESTAURANT_TAG, description = "Restaurant accounts"),
        (name = MENU_TAG, description = "Menu categories, menus, option groups and options"),
        (name = USER_TAG, description = "User accounts"),
        (name = BROWSE_TAG, description = "Restaurant directory and menus for users"),
        (name = ORDER_TAG, description = "Placing and handling orders")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(restaurant_routes())
        .merge(menu_routes())
        .merge(user_routes())
        .merge(order_routes())
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn restaurant_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(restaurant::load))
        .routes(routes!(restaurant::sign_up))
        .routes(routes!(restaurant::auth))
        .routes(routes!(restaurant::check_email))
        .routes(routes!(restaurant::sign_in))
        .routes(routes!(restaurant::refresh))
        .routes(routes!(restaurant::check_password))
        .routes(routes!(restaurant::edit_password))
        .routes(routes!(restaurant::edit_information))
        .routes(routes!(restaurant::edit_address))
        .routes(routes!(restaurant::leave))
}

fn menu_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            category::upload_menu_category,
            category::get_menu_categories,
            category::edit_menu_category,
            category::remove_menu_category
        ))
        .routes(routes!(category::get_menu_category))
        .routes(routes!(
            menu::upload_menu,
            menu::get_menus,
            menu::edit_menu,
            menu::remove_menu
        ))
        .routes(routes!(menu::get_menu))
        .routes(routes!(
            group::upload_group,
            group::get_groups,
            group::edit_group,
            group::remove_group
        ))
        .routes(routes!(group::get_group))
        .routes(routes!(
            option::upload_option,
            option::get_options,
            option::edit_option,
            option::remove_option
        ))
        .routes(routes!(option::get_option))
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(user::load))
        .routes(routes!(user::sign_up))
        .routes(routes!(user::auth))
        .routes(routes!(user::check_email))
        .routes(routes!(user::sign_in))
        .routes(routes!(user::refresh))
        .routes(routes!(user::leave))
        .routes(routes!(browse::browse_restaurants))
        .routes(routes!(browse::browse_menu_categories))
        .routes(routes!(browse::browse_menus))
}

fn order_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(order::place_order, order::get_user_orders))
        .routes(routes!(order::get_user_order))
        .routes(routes!(order::get_restaurant_orders))
        .routes(routes!(order::get_restaurant_order))
        .routes(routes!(order::edit_order_status))
}
