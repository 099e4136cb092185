//! Application-level cascading deletes for the menu tree.
//!
//! Foreign keys between menu tables are `RESTRICT`, so children are always
//! deleted before their parents: options, then groups, then menus, then
//! categories. Callers run these inside a transaction.

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::{
    menu::MenuRepository, menu_category::MenuCategoryRepository,
    menu_option::MenuOptionRepository, option_group::OptionGroupRepository,
};

pub struct MenuTreeCascade<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuTreeCascade<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn remove_options(&self, option_ids: &[i32]) -> Result<(), DbErr> {
        MenuOptionRepository::new(self.db)
            .delete_many(option_ids)
            .await?;

        Ok(())
    }

    /// Deletes groups together with all of their options.
    pub async fn remove_groups(&self, group_ids: &[i32]) -> Result<(), DbErr> {
        MenuOptionRepository::new(self.db)
            .delete_by_groups(group_ids)
            .await?;
        OptionGroupRepository::new(self.db)
            .delete_many(group_ids)
            .await?;

        Ok(())
    }

    /// Deletes menus together with their groups and options.
    pub async fn remove_menus(&self, menu_ids: &[i32]) -> Result<(), DbErr> {
        let group_ids = OptionGroupRepository::new(self.db)
            .get_ids_by_menus(menu_ids)
            .await?;
        self.remove_groups(&group_ids).await?;
        MenuRepository::new(self.db).delete_many(menu_ids).await?;

        Ok(())
    }

    /// Deletes categories together with their whole subtree.
    pub async fn remove_categories(&self, category_ids: &[i32]) -> Result<(), DbErr> {
        let menu_ids = MenuRepository::new(self.db)
            .get_ids_by_categories(category_ids)
            .await?;
        self.remove_menus(&menu_ids).await?;
        MenuCategoryRepository::new(self.db)
            .delete_many(category_ids)
            .await?;

        Ok(())
    }

    /// Deletes every category of a restaurant and everything below them.
    pub async fn remove_restaurant_menu(&self, restaurant_id: i32) -> Result<(), DbErr> {
        let category_ids = MenuCategoryRepository::new(self.db)
            .get_ids_by_restaurant(restaurant_id)
            .await?;
        self.remove_categories(&category_ids).await
    }
}
