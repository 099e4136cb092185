//! Menu tree management for restaurants and menu browsing for users.
//!
//! Each level of the tree has its own service: [`category::MenuCategoryService`],
//! [`MenuService`], [`group::OptionGroupService`] and [`option::MenuOptionService`].
//! Restaurant-side operations resolve every touched entity through
//! [`access::MenuAccess`]; removals go through [`cascade::MenuTreeCascade`]
//! inside one transaction per request.

pub mod access;
pub mod cascade;
pub mod category;
pub mod group;
pub mod option;

use std::collections::{HashMap, HashSet};

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        menu::MenuRepository, menu_category::MenuCategoryRepository,
        menu_option::MenuOptionRepository, option_group::OptionGroupRepository,
    },
    error::AppError,
    model::menu::{
        CreateMenuParam, CreateOptionParam, GroupWithOptions, Menu, MenuOption, MenuWithGroups,
        NewOption, OptionGroup, UpdateMenuParam,
    },
    service::menu::{access::MenuAccess, cascade::MenuTreeCascade},
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a menu together with its nested groups and options.
    ///
    /// # Returns
    /// - `Ok(MenuWithGroups)` - The created subtree
    /// - `Err(AppError::NotFound)` - Category missing or owned by another restaurant
    /// - `Err(AppError::Conflict)` - Menu name taken in the category, or
    ///   duplicate group/option names inside the request
    pub async fn upload(
        &self,
        restaurant_id: i32,
        param: CreateMenuParam,
    ) -> Result<MenuWithGroups, AppError> {
        ensure_unique_names(param.groups.iter().map(|g| g.name.as_str()), "group")?;
        for group in &param.groups {
            ensure_unique_names(group.options.iter().map(|o| o.name.as_str()), "option")?;
        }

        let txn = self.db.begin().await?;

        MenuAccess::new(&txn, restaurant_id)
            .category(param.menu_category_id)
            .await?;

        let menu_repo = MenuRepository::new(&txn);
        if menu_repo
            .name_exists(param.menu_category_id, &param.name, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Menu '{}' already exists in this category",
                param.name
            )));
        }

        let menu = menu_repo
            .create(&param)
            .await
            .map_err(AppError::conflict_on_unique(MENU_NAME_TAKEN))?;
        let mut groups = Vec::with_capacity(param.groups.len());
        for group in param.groups {
            let created = OptionGroupRepository::new(&txn)
                .create(menu.id, group.name, group.max_count)
                .await
                .map_err(AppError::conflict_on_unique(GROUP_NAME_TAKEN))?;
            let options = create_options(&txn, created.id, group.options)
                .await
                .map_err(AppError::conflict_on_unique(OPTION_NAME_TAKEN))?;
            groups.push(GroupWithOptions {
                group: created,
                options,
            });
        }

        txn.commit().await?;

        tracing::info!("Restaurant {} uploaded menu {}", restaurant_id, menu.id);

        Ok(MenuWithGroups { menu, groups })
    }

    /// Gets a menu with its groups and options.
    pub async fn get(&self, restaurant_id: i32, menu_id: i32) -> Result<MenuWithGroups, AppError> {
        let menu = MenuAccess::new(self.db, restaurant_id).menu(menu_id).await?;

        Ok(load_menu(self.db, menu).await?)
    }

    /// Lists the menus of one of the restaurant's categories.
    pub async fn list(
        &self,
        restaurant_id: i32,
        menu_category_id: i32,
    ) -> Result<Vec<MenuWithGroups>, AppError> {
        MenuAccess::new(self.db, restaurant_id)
            .category(menu_category_id)
            .await?;

        self.load_category(menu_category_id).await
    }

    /// Lists the menus of any category for browsing users.
    ///
    /// # Returns
    /// - `Ok(Vec<MenuWithGroups>)` - Menus with groups and options
    /// - `Err(AppError::NotFound)` - Category does not exist
    pub async fn list_for_user(
        &self,
        menu_category_id: i32,
    ) -> Result<Vec<MenuWithGroups>, AppError> {
        if MenuCategoryRepository::new(self.db)
            .find_by_id(menu_category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Menu category {} not found",
                menu_category_id
            )));
        }

        self.load_category(menu_category_id).await
    }

    async fn load_category(&self, menu_category_id: i32) -> Result<Vec<MenuWithGroups>, AppError> {
        let menus = MenuRepository::new(self.db)
            .get_by_category(menu_category_id)
            .await?;

        Ok(load_menu_tree(self.db, menus).await?)
    }

    /// Applies a partial update to a menu.
    ///
    /// # Returns
    /// - `Ok(MenuWithGroups)` - The updated menu with its subtree
    /// - `Err(AppError::NotFound)` - Menu missing or owned by another restaurant
    /// - `Err(AppError::Conflict)` - New name is taken in the category
    pub async fn edit(
        &self,
        restaurant_id: i32,
        param: UpdateMenuParam,
    ) -> Result<MenuWithGroups, AppError> {
        let menu = MenuAccess::new(self.db, restaurant_id)
            .menu(param.id)
            .await?;

        let menu_repo = MenuRepository::new(self.db);
        if let Some(name) = &param.name {
            if menu_repo
                .name_exists(menu.menu_category_id, name, Some(menu.id))
                .await?
            {
                return Err(AppError::Conflict(format!(
                    "Menu '{}' already exists in this category",
                    name
                )));
            }
        }

        let menu = menu_repo
            .update(param)
            .await
            .map_err(AppError::conflict_on_unique(MENU_NAME_TAKEN))?;

        Ok(load_menu(self.db, menu).await?)
    }

    /// Removes menus with their groups and options.
    ///
    /// All IDs are checked before anything is deleted; one unknown or foreign
    /// ID fails the whole request with 404.
    pub async fn remove(&self, restaurant_id: i32, menu_ids: &[i32]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let access = MenuAccess::new(&txn, restaurant_id);
        for id in menu_ids {
            access.menu(*id).await?;
        }
        MenuTreeCascade::new(&txn).remove_menus(menu_ids).await?;

        txn.commit().await?;

        tracing::info!(
            "Restaurant {} removed menus {:?}",
            restaurant_id,
            menu_ids
        );

        Ok(())
    }
}

const MENU_NAME_TAKEN: &str = "Menu name already exists in this category";
const GROUP_NAME_TAKEN: &str = "Option group name already exists on this menu";
const OPTION_NAME_TAKEN: &str = "Option name already exists in this group";

/// Fails with 409 when a name appears twice in one request.
fn ensure_unique_names<'n>(
    names: impl Iterator<Item = &'n str>,
    kind: &str,
) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(AppError::Conflict(format!(
                "Duplicate {} name '{}' in request",
                kind, name
            )));
        }
    }

    Ok(())
}

async fn create_options<C: ConnectionTrait>(
    db: &C,
    option_group_id: i32,
    options: Vec<NewOption>,
) -> Result<Vec<MenuOption>, DbErr> {
    let repo = MenuOptionRepository::new(db);
    let mut created = Vec::with_capacity(options.len());
    for option in options {
        created.push(
            repo.create(CreateOptionParam {
                option_group_id,
                name: option.name,
                price: option.price,
            })
            .await?,
        );
    }

    Ok(created)
}

/// Attaches options to groups, keeping group order.
pub(crate) async fn load_group_tree<C: ConnectionTrait>(
    db: &C,
    groups: Vec<OptionGroup>,
) -> Result<Vec<GroupWithOptions>, DbErr> {
    let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
    let options = MenuOptionRepository::new(db)
        .get_by_groups(&group_ids)
        .await?;

    let mut by_group: HashMap<i32, Vec<_>> = HashMap::new();
    for option in options {
        by_group
            .entry(option.option_group_id)
            .or_default()
            .push(option);
    }

    Ok(groups
        .into_iter()
        .map(|group| {
            let options = by_group.remove(&group.id).unwrap_or_default();
            GroupWithOptions { group, options }
        })
        .collect())
}

/// Loads the groups and options of a single menu.
pub(crate) async fn load_menu<C: ConnectionTrait>(
    db: &C,
    menu: Menu,
) -> Result<MenuWithGroups, DbErr> {
    let groups = OptionGroupRepository::new(db).get_by_menu(menu.id).await?;
    let groups = load_group_tree(db, groups).await?;

    Ok(MenuWithGroups { menu, groups })
}

/// Attaches groups and options to menus with two queries, keeping menu order.
pub(crate) async fn load_menu_tree<C: ConnectionTrait>(
    db: &C,
    menus: Vec<Menu>,
) -> Result<Vec<MenuWithGroups>, DbErr> {
    let menu_ids: Vec<i32> = menus.iter().map(|m| m.id).collect();
    let groups = OptionGroupRepository::new(db)
        .get_by_menus(&menu_ids)
        .await?;
    let groups = load_group_tree(db, groups).await?;

    let mut by_menu: HashMap<i32, Vec<GroupWithOptions>> = HashMap::new();
    for group in groups {
        by_menu.entry(group.group.menu_id).or_default().push(group);
    }

    Ok(menus
        .into_iter()
        .map(|menu| {
            let groups = by_menu.remove(&menu.id).unwrap_or_default();
            MenuWithGroups { menu, groups }
        })
        .collect())
}
