//! Option group factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct OptionGroupFactory<'a> {
    db: &'a DatabaseConnection,
    menu_id: i32,
    name: String,
    max_count: i32,
}

impl<'a> OptionGroupFactory<'a> {
    /// Creates a new factory named `"Group {id}"` allowing a single option by default.
    pub fn new(db: &'a DatabaseConnection, menu_id: i32) -> Self {
        Self {
            db,
            menu_id,
            name: format!("Group {}", next_id()),
            max_count: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max_count(mut self, max_count: i32) -> Self {
        self.max_count = max_count;
        self
    }

    pub async fn build(self) -> Result<entity::option_group::Model, DbErr> {
        entity::option_group::ActiveModel {
            id: ActiveValue::NotSet,
            menu_id: ActiveValue::Set(self.menu_id),
            name: ActiveValue::Set(self.name),
            max_count: ActiveValue::Set(self.max_count),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_option_group(
    db: &DatabaseConnection,
    menu_id: i32,
) -> Result<entity::option_group::Model, DbErr> {
    OptionGroupFactory::new(db, menu_id).build().await
}
