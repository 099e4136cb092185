//! Menu option service. Options are leaves, so removal needs no cascade
//! beyond the options themselves.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::menu_option::MenuOptionRepository,
    error::AppError,
    model::menu::{CreateOptionParam, MenuOption, UpdateOptionParam},
    service::menu::{access::MenuAccess, cascade::MenuTreeCascade, OPTION_NAME_TAKEN},
};

pub struct MenuOptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuOptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(MenuOption)` - The created option
    /// - `Err(AppError::NotFound)` - Group missing or owned by another restaurant
    /// - `Err(AppError::Conflict)` - The group already has an option with this name
    pub async fn upload(
        &self,
        restaurant_id: i32,
        param: CreateOptionParam,
    ) -> Result<MenuOption, AppError> {
        MenuAccess::new(self.db, restaurant_id)
            .group(param.option_group_id)
            .await?;

        let repo = MenuOptionRepository::new(self.db);
        if repo
            .name_exists(param.option_group_id, &param.name, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Option '{}' already exists in this group",
                param.name
            )));
        }

        Ok(repo
            .create(param)
            .await
            .map_err(AppError::conflict_on_unique(OPTION_NAME_TAKEN))?)
    }

    pub async fn get(&self, restaurant_id: i32, id: i32) -> Result<MenuOption, AppError> {
        MenuAccess::new(self.db, restaurant_id).option(id).await
    }

    pub async fn list(
        &self,
        restaurant_id: i32,
        option_group_id: i32,
    ) -> Result<Vec<MenuOption>, AppError> {
        MenuAccess::new(self.db, restaurant_id)
            .group(option_group_id)
            .await?;

        Ok(MenuOptionRepository::new(self.db)
            .get_by_group(option_group_id)
            .await?)
    }

    /// Applies a partial update of name and price.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - New name is taken in the same group
    pub async fn edit(
        &self,
        restaurant_id: i32,
        param: UpdateOptionParam,
    ) -> Result<MenuOption, AppError> {
        let option = MenuAccess::new(self.db, restaurant_id)
            .option(param.id)
            .await?;

        let repo = MenuOptionRepository::new(self.db);
        if let Some(name) = &param.name {
            if repo
                .name_exists(option.option_group_id, name, Some(option.id))
                .await?
            {
                return Err(AppError::Conflict(format!(
                    "Option '{}' already exists in this group",
                    name
                )));
            }
        }

        Ok(repo
            .update(param)
            .await
            .map_err(AppError::conflict_on_unique(OPTION_NAME_TAKEN))?)
    }

    /// Removes options, all or nothing.
    pub async fn remove(&self, restaurant_id: i32, ids: &[i32]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let access = MenuAccess::new(&txn, restaurant_id);
        for id in ids {
            access.option(*id).await?;
        }
        MenuTreeCascade::new(&txn).remove_options(ids).await?;

        txn.commit().await?;

        tracing::info!("Restaurant {} removed options {:?}", restaurant_id, ids);

        Ok(())
    }
}
