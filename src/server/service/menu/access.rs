//! Ownership checks for the menu tree.
//!
//! A restaurant may only touch entities whose parent chain ends at itself.
//! Missing entities and entities owned by another restaurant are reported
//! the same way, as 404, so ids of other restaurants are not revealed.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        menu::MenuRepository, menu_category::MenuCategoryRepository,
        menu_option::MenuOptionRepository, option_group::OptionGroupRepository,
    },
    error::AppError,
    model::menu::{Menu, MenuCategory, MenuOption, OptionGroup},
};

pub struct MenuAccess<'a, C: ConnectionTrait> {
    db: &'a C,
    restaurant_id: i32,
}

impl<'a, C: ConnectionTrait> MenuAccess<'a, C> {
    pub fn new(db: &'a C, restaurant_id: i32) -> Self {
        Self { db, restaurant_id }
    }

    /// Resolves a category owned by the restaurant.
    ///
    /// # Returns
    /// - `Ok(MenuCategory)` - Category exists and belongs to the restaurant
    /// - `Err(AppError::NotFound)` - Category is missing or owned by another restaurant
    pub async fn category(&self, id: i32) -> Result<MenuCategory, AppError> {
        MenuCategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|category| category.restaurant_id == self.restaurant_id)
            .ok_or_else(|| AppError::NotFound(format!("Menu category {} not found", id)))
    }

    pub async fn menu(&self, id: i32) -> Result<Menu, AppError> {
        let not_found = || AppError::NotFound(format!("Menu {} not found", id));

        let menu = MenuRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;
        match self.category(menu.menu_category_id).await {
            Ok(_) => Ok(menu),
            Err(AppError::NotFound(_)) => Err(not_found()),
            Err(e) => Err(e),
        }
    }

    pub async fn group(&self, id: i32) -> Result<OptionGroup, AppError> {
        let not_found = || AppError::NotFound(format!("Option group {} not found", id));

        let group = OptionGroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;
        match self.menu(group.menu_id).await {
            Ok(_) => Ok(group),
            Err(AppError::NotFound(_)) => Err(not_found()),
            Err(e) => Err(e),
        }
    }

    pub async fn option(&self, id: i32) -> Result<MenuOption, AppError> {
        let not_found = || AppError::NotFound(format!("Option {} not found", id));

        let option = MenuOptionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;
        match self.group(option.option_group_id).await {
            Ok(_) => Ok(option),
            Err(AppError::NotFound(_)) => Err(not_found()),
            Err(e) => Err(e),
        }
    }
}
