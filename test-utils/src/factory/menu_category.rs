//! Menu category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MenuCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    restaurant_id: i32,
    name: String,
}

impl<'a> MenuCategoryFactory<'a> {
    /// Creates a new factory for a category of `restaurant_id`, named `"Category {id}"` by default.
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32) -> Self {
        Self {
            db,
            restaurant_id,
            name: format!("Category {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::menu_category::Model, DbErr> {
        entity::menu_category::ActiveModel {
            id: ActiveValue::NotSet,
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_menu_category(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::menu_category::Model, DbErr> {
    MenuCategoryFactory::new(db, restaurant_id).build().await
}
