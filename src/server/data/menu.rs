//! Menu repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::menu::{CreateMenuParam, Menu, UpdateMenuParam};

pub struct MenuRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the menu row only. Nested groups in `param.groups` are created
    /// by the caller through `OptionGroupRepository`.
    pub async fn create(&self, param: &CreateMenuParam) -> Result<Menu, DbErr> {
        let entity = entity::menu::ActiveModel {
            menu_category_id: ActiveValue::Set(param.menu_category_id),
            name: ActiveValue::Set(param.name.clone()),
            price: ActiveValue::Set(param.price),
            description: ActiveValue::Set(param.description.clone()),
            image: ActiveValue::Set(param.image.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Menu::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Menu>, DbErr> {
        let entity = entity::prelude::Menu::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Menu::from_entity))
    }

    /// Gets menus by ID. Unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Menu>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Menu::find()
            .filter(entity::menu::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Menu::from_entity).collect())
    }

    pub async fn get_by_category(&self, menu_category_id: i32) -> Result<Vec<Menu>, DbErr> {
        let entities = entity::prelude::Menu::find()
            .filter(entity::menu::Column::MenuCategoryId.eq(menu_category_id))
            .order_by_asc(entity::menu::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Menu::from_entity).collect())
    }

    pub async fn get_ids_by_categories(&self, category_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Menu::find()
            .select_only()
            .column(entity::menu::Column::Id)
            .filter(entity::menu::Column::MenuCategoryId.is_in(category_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Checks whether the category already has a menu with this name,
    /// ignoring `exclude_id` when renaming.
    pub async fn name_exists(
        &self,
        menu_category_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Menu::find()
            .filter(entity::menu::Column::MenuCategoryId.eq(menu_category_id))
            .filter(entity::menu::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::menu::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial update. Fields left as `None` are not touched.
    ///
    /// # Returns
    /// - `Ok(Menu)` - The updated menu
    /// - `Err(DbErr::RecordNotFound)` - No menu exists with the specified ID
    pub async fn update(&self, param: UpdateMenuParam) -> Result<Menu, DbErr> {
        let menu = entity::prelude::Menu::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Menu with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::menu::ActiveModel = menu.clone().into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(image) = param.image {
            active_model.image = ActiveValue::Set(Some(image));
        }

        if !active_model.is_changed() {
            return Ok(Menu::from_entity(menu));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Menu::from_entity(entity))
    }

    /// Deletes menus by ID. Their option groups must already be removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Menu::delete_many()
            .filter(entity::menu::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
