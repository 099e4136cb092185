//! SeaORM entities for the restaurant-order schema.

pub mod prelude;

pub mod menu;
pub mod menu_category;
pub mod menu_option;
pub mod option_group;
pub mod order;
pub mod restaurant;
pub mod sea_orm_active_enums;
pub mod user;
