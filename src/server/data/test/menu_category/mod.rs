use crate::server::{
    data::menu_category::MenuCategoryRepository, model::menu::CreateMenuCategoryParam,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_many;
mod get_by_restaurant;
mod name_exists;
