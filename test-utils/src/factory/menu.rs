//! Menu factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MenuFactory<'a> {
    db: &'a DatabaseConnection,
    menu_category_id: i32,
    name: String,
    price: i32,
    description: Option<String>,
    image: Option<String>,
}

impl<'a> MenuFactory<'a> {
    /// Creates a new MenuFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Menu {id}"`
    /// - price: `10000`
    /// - description and image: `None`
    pub fn new(db: &'a DatabaseConnection, menu_category_id: i32) -> Self {
        Self {
            db,
            menu_category_id,
            name: format!("Menu {}", next_id()),
            price: 10000,
            description: None,
            image: None,
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

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub async fn build(self) -> Result<entity::menu::Model, DbErr> {
        entity::menu::ActiveModel {
            id: ActiveValue::NotSet,
            menu_category_id: ActiveValue::Set(self.menu_category_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            image: ActiveValue::Set(self.image),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_menu(
    db: &DatabaseConnection,
    menu_category_id: i32,
) -> Result<entity::menu::Model, DbErr> {
    MenuFactory::new(db, menu_category_id).build().await
}
