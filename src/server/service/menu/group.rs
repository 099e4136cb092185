//! Option group service.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{menu_option::MenuOptionRepository, option_group::OptionGroupRepository},
    error::AppError,
    model::menu::{CreateGroupParam, GroupWithOptions, OptionGroup, UpdateGroupParam},
    service::menu::{
        access::MenuAccess, cascade::MenuTreeCascade, create_options, ensure_unique_names,
        load_group_tree, GROUP_NAME_TAKEN, OPTION_NAME_TAKEN,
    },
};

pub struct OptionGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OptionGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an option group on one of the restaurant's menus.
    ///
    /// # Returns
    /// - `Ok(GroupWithOptions)` - The created group with any options given in `param`
    /// - `Err(AppError::NotFound)` - Menu missing or owned by another restaurant
    /// - `Err(AppError::Conflict)` - The menu already has a group with this name,
    ///   or two options in the request share a name
    pub async fn upload(
        &self,
        restaurant_id: i32,
        param: CreateGroupParam,
    ) -> Result<GroupWithOptions, AppError> {
        ensure_unique_names(param.options.iter().map(|o| o.name.as_str()), "option")?;

        let txn = self.db.begin().await?;

        MenuAccess::new(&txn, restaurant_id)
            .menu(param.menu_id)
            .await?;

        let repo = OptionGroupRepository::new(&txn);
        if repo.name_exists(param.menu_id, &param.name, None).await? {
            return Err(AppError::Conflict(format!(
                "Option group '{}' already exists on this menu",
                param.name
            )));
        }

        let group = repo
            .create(param.menu_id, param.name, param.max_count)
            .await
            .map_err(AppError::conflict_on_unique(GROUP_NAME_TAKEN))?;
        let options = create_options(&txn, group.id, param.options)
            .await
            .map_err(AppError::conflict_on_unique(OPTION_NAME_TAKEN))?;

        txn.commit().await?;

        Ok(GroupWithOptions { group, options })
    }

    pub async fn get(&self, restaurant_id: i32, id: i32) -> Result<GroupWithOptions, AppError> {
        let group = MenuAccess::new(self.db, restaurant_id).group(id).await?;

        self.with_options(group).await
    }

    pub async fn list(
        &self,
        restaurant_id: i32,
        menu_id: i32,
    ) -> Result<Vec<GroupWithOptions>, AppError> {
        MenuAccess::new(self.db, restaurant_id).menu(menu_id).await?;

        let groups = OptionGroupRepository::new(self.db)
            .get_by_menu(menu_id)
            .await?;

        Ok(load_group_tree(self.db, groups).await?)
    }

    /// Applies a partial update of name and max_count.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - New name is taken on the same menu
    pub async fn edit(
        &self,
        restaurant_id: i32,
        param: UpdateGroupParam,
    ) -> Result<GroupWithOptions, AppError> {
        let group = MenuAccess::new(self.db, restaurant_id)
            .group(param.id)
            .await?;

        let repo = OptionGroupRepository::new(self.db);
        if let Some(name) = &param.name {
            if repo.name_exists(group.menu_id, name, Some(group.id)).await? {
                return Err(AppError::Conflict(format!(
                    "Option group '{}' already exists on this menu",
                    name
                )));
            }
        }

        let group = repo
            .update(param)
            .await
            .map_err(AppError::conflict_on_unique(GROUP_NAME_TAKEN))?;

        self.with_options(group).await
    }

    async fn with_options(&self, group: OptionGroup) -> Result<GroupWithOptions, AppError> {
        let options = MenuOptionRepository::new(self.db)
            .get_by_group(group.id)
            .await?;

        Ok(GroupWithOptions { group, options })
    }

    /// Removes groups with their options, all or nothing.
    pub async fn remove(&self, restaurant_id: i32, ids: &[i32]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let access = MenuAccess::new(&txn, restaurant_id);
        for id in ids {
            access.group(*id).await?;
        }
        MenuTreeCascade::new(&txn).remove_groups(ids).await?;

        txn.commit().await?;

        tracing::info!(
            "Restaurant {} removed option groups {:?}",
            restaurant_id,
            ids
        );

        Ok(())
    }
}
