//! Menu option factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MenuOptionFactory<'a> {
    db: &'a DatabaseConnection,
    option_group_id: i32,
    name: String,
    price: i32,
}

impl<'a> MenuOptionFactory<'a> {
    /// Creates a new factory named `"Option {id}"` priced at 500 by default.
    pub fn new(db: &'a DatabaseConnection, option_group_id: i32) -> Self {
        Self {
            db,
            option_group_id,
            name: format!("Option {}", next_id()),
            price: 500,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub async fn build(self) -> Result<entity::menu_option::Model, DbErr> {
        entity::menu_option::ActiveModel {
            id: ActiveValue::NotSet,
            option_group_id: ActiveValue::Set(self.option_group_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_menu_option(
    db: &DatabaseConnection,
    option_group_id: i32,
) -> Result<entity::menu_option::Model, DbErr> {
    MenuOptionFactory::new(db, option_group_id).build().await
}
