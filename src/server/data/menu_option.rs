//! Menu option repository. Options are the leaves of the menu tree.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::menu::{CreateOptionParam, MenuOption, UpdateOptionParam};

pub struct MenuOptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuOptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateOptionParam) -> Result<MenuOption, DbErr> {
        let entity = entity::menu_option::ActiveModel {
            option_group_id: ActiveValue::Set(param.option_group_id),
            name: ActiveValue::Set(param.name),
            price: ActiveValue::Set(param.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MenuOption::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MenuOption>, DbErr> {
        let entity = entity::prelude::MenuOption::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MenuOption::from_entity))
    }

    /// Gets options by ID. Unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<MenuOption>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::MenuOption::find()
            .filter(entity::menu_option::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuOption::from_entity).collect())
    }

    pub async fn get_by_group(&self, option_group_id: i32) -> Result<Vec<MenuOption>, DbErr> {
        self.get_by_groups(&[option_group_id]).await
    }

    /// Gets the options of several groups ordered by ID.
    pub async fn get_by_groups(&self, group_ids: &[i32]) -> Result<Vec<MenuOption>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::MenuOption::find()
            .filter(entity::menu_option::Column::OptionGroupId.is_in(group_ids.iter().copied()))
            .order_by_asc(entity::menu_option::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuOption::from_entity).collect())
    }

    /// Checks whether the group already has an option with this name,
    /// ignoring `exclude_id` when renaming.
    pub async fn name_exists(
        &self,
        option_group_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::MenuOption::find()
            .filter(entity::menu_option::Column::OptionGroupId.eq(option_group_id))
            .filter(entity::menu_option::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::menu_option::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial update of name and price.
    ///
    /// # Returns
    /// - `Ok(MenuOption)` - The updated option
    /// - `Err(DbErr::RecordNotFound)` - No option exists with the specified ID
    pub async fn update(&self, param: UpdateOptionParam) -> Result<MenuOption, DbErr> {
        let option = entity::prelude::MenuOption::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Menu option with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::menu_option::ActiveModel = option.clone().into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }

        if !active_model.is_changed() {
            return Ok(MenuOption::from_entity(option));
        }

        let entity = active_model.update(self.db).await?;

        Ok(MenuOption::from_entity(entity))
    }

    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::MenuOption::delete_many()
            .filter(entity::menu_option::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every option of the given groups.
    pub async fn delete_by_groups(&self, group_ids: &[i32]) -> Result<u64, DbErr> {
        if group_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::MenuOption::delete_many()
            .filter(entity::menu_option::Column::OptionGroupId.is_in(group_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
