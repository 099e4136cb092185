use crate::server::{
    data::menu::MenuRepository,
    model::menu::{CreateMenuParam, UpdateMenuParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_category;
mod name_exists;
mod update;

fn create_param(menu_category_id: i32, name: &str) -> CreateMenuParam {
    CreateMenuParam {
        menu_category_id,
        name: name.to_string(),
        price: 8000,
        description: Some("House burger".to_string()),
        image: None,
        groups: Vec::new(),
    }
}
