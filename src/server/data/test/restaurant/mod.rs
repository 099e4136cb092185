use crate::server::{
    data::restaurant::RestaurantRepository,
    model::restaurant::{CreateRestaurantParam, UpdateRestaurantParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod get_paginated;
mod update;

fn create_param(email: &str) -> CreateRestaurantParam {
    CreateRestaurantParam {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        name: "Bistro".to_string(),
        phone: "010-1234-5678".to_string(),
        address: "1 Main Street".to_string(),
        description: Some("Neighbourhood bistro".to_string()),
    }
}
