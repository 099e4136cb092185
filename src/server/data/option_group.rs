//! Option group repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::menu::{OptionGroup, UpdateGroupParam};

pub struct OptionGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OptionGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a group row. Options are created separately.
    pub async fn create(
        &self,
        menu_id: i32,
        name: String,
        max_count: i32,
    ) -> Result<OptionGroup, DbErr> {
        let entity = entity::option_group::ActiveModel {
            menu_id: ActiveValue::Set(menu_id),
            name: ActiveValue::Set(name),
            max_count: ActiveValue::Set(max_count),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(OptionGroup::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<OptionGroup>, DbErr> {
        let entity = entity::prelude::OptionGroup::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(OptionGroup::from_entity))
    }

    pub async fn get_by_menu(&self, menu_id: i32) -> Result<Vec<OptionGroup>, DbErr> {
        self.get_by_menus(&[menu_id]).await
    }

    /// Gets the groups of several menus ordered by ID.
    pub async fn get_by_menus(&self, menu_ids: &[i32]) -> Result<Vec<OptionGroup>, DbErr> {
        if menu_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::OptionGroup::find()
            .filter(entity::option_group::Column::MenuId.is_in(menu_ids.iter().copied()))
            .order_by_asc(entity::option_group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(OptionGroup::from_entity).collect())
    }

    pub async fn get_ids_by_menus(&self, menu_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if menu_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::OptionGroup::find()
            .select_only()
            .column(entity::option_group::Column::Id)
            .filter(entity::option_group::Column::MenuId.is_in(menu_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Checks whether the menu already has a group with this name,
    /// ignoring `exclude_id` when renaming.
    pub async fn name_exists(
        &self,
        menu_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::OptionGroup::find()
            .filter(entity::option_group::Column::MenuId.eq(menu_id))
            .filter(entity::option_group::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::option_group::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial update of name and max_count.
    ///
    /// # Returns
    /// - `Ok(OptionGroup)` - The updated group
    /// - `Err(DbErr::RecordNotFound)` - No group exists with the specified ID
    pub async fn update(&self, param: UpdateGroupParam) -> Result<OptionGroup, DbErr> {
        let group = entity::prelude::OptionGroup::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Option group with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::option_group::ActiveModel = group.clone().into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(max_count) = param.max_count {
            active_model.max_count = ActiveValue::Set(max_count);
        }

        if !active_model.is_changed() {
            return Ok(OptionGroup::from_entity(group));
        }

        let entity = active_model.update(self.db).await?;

        Ok(OptionGroup::from_entity(entity))
    }

    /// Deletes groups by ID. Their options must already be removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::OptionGroup::delete_many()
            .filter(entity::option_group::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
