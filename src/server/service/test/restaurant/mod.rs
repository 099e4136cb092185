use crate::server::{
    data::{
        menu::MenuRepository, menu_category::MenuCategoryRepository,
        menu_option::MenuOptionRepository, option_group::OptionGroupRepository,
        order::OrderRepository, restaurant::RestaurantRepository,
    },
    error::{auth::AuthError, AppError},
    model::restaurant::{CreateRestaurantParam, SignUpRestaurantParam, UpdateRestaurantParam},
    service::{
        restaurant::RestaurantService,
        token::{AccountKind, TokenService, TokenType},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod leave;
mod sign_in;

fn sign_up_param(email: &str, password: &str) -> SignUpRestaurantParam {
    SignUpRestaurantParam {
        email: email.to_string(),
        password: password.to_string(),
        name: "Corner Bistro".to_string(),
        phone: "02-555-0100".to_string(),
        address: "1 Main Street".to_string(),
        description: None,
    }
}
