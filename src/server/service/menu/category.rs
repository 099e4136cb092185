//! Menu category service.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{menu_category::MenuCategoryRepository, restaurant::RestaurantRepository},
    error::AppError,
    model::menu::{CreateMenuCategoryParam, MenuCategory},
    service::menu::{access::MenuAccess, cascade::MenuTreeCascade},
};

pub struct MenuCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category for the restaurant.
    ///
    /// # Returns
    /// - `Ok(MenuCategory)` - The created category
    /// - `Err(AppError::Conflict)` - The restaurant already has a category with this name
    pub async fn upload(&self, restaurant_id: i32, name: String) -> Result<MenuCategory, AppError> {
        let repo = MenuCategoryRepository::new(self.db);
        if repo.name_exists(restaurant_id, &name, None).await? {
            return Err(AppError::Conflict(format!(
                "Menu category '{}' already exists",
                name
            )));
        }

        let category = repo
            .create(CreateMenuCategoryParam {
                restaurant_id,
                name,
            })
            .await
            .map_err(AppError::conflict_on_unique("Menu category name already exists"))?;

        tracing::info!(
            "Restaurant {} uploaded menu category {}",
            restaurant_id,
            category.id
        );

        Ok(category)
    }

    pub async fn get(&self, restaurant_id: i32, id: i32) -> Result<MenuCategory, AppError> {
        MenuAccess::new(self.db, restaurant_id).category(id).await
    }

    pub async fn list(&self, restaurant_id: i32) -> Result<Vec<MenuCategory>, AppError> {
        Ok(MenuCategoryRepository::new(self.db)
            .get_by_restaurant(restaurant_id)
            .await?)
    }

    /// Lists a restaurant's categories for browsing users.
    ///
    /// # Returns
    /// - `Ok(Vec<MenuCategory>)` - Categories in creation order
    /// - `Err(AppError::NotFound)` - Restaurant does not exist
    pub async fn list_for_user(&self, restaurant_id: i32) -> Result<Vec<MenuCategory>, AppError> {
        if RestaurantRepository::new(self.db)
            .find_by_id(restaurant_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Restaurant {} not found",
                restaurant_id
            )));
        }

        self.list(restaurant_id).await
    }

    /// Renames a category.
    ///
    /// # Returns
    /// - `Ok(MenuCategory)` - The renamed category
    /// - `Err(AppError::NotFound)` - Category missing or owned by another restaurant
    /// - `Err(AppError::Conflict)` - Another category of the restaurant has this name
    pub async fn edit(
        &self,
        restaurant_id: i32,
        id: i32,
        name: String,
    ) -> Result<MenuCategory, AppError> {
        MenuAccess::new(self.db, restaurant_id).category(id).await?;

        let repo = MenuCategoryRepository::new(self.db);
        if repo.name_exists(restaurant_id, &name, Some(id)).await? {
            return Err(AppError::Conflict(format!(
                "Menu category '{}' already exists",
                name
            )));
        }

        Ok(repo
            .rename(id, name)
            .await
            .map_err(AppError::conflict_on_unique("Menu category name already exists"))?)
    }

    /// Removes categories with their whole subtree, all or nothing.
    pub async fn remove(&self, restaurant_id: i32, ids: &[i32]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let access = MenuAccess::new(&txn, restaurant_id);
        for id in ids {
            access.category(*id).await?;
        }
        MenuTreeCascade::new(&txn).remove_categories(ids).await?;

        txn.commit().await?;

        tracing::info!(
            "Restaurant {} removed menu categories {:?}",
            restaurant_id,
            ids
        );

        Ok(())
    }
}
