//! Menu category repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::menu::{CreateMenuCategoryParam, MenuCategory};

pub struct MenuCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateMenuCategoryParam) -> Result<MenuCategory, DbErr> {
        let entity = entity::menu_category::ActiveModel {
            restaurant_id: ActiveValue::Set(param.restaurant_id),
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MenuCategory::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MenuCategory>, DbErr> {
        let entity = entity::prelude::MenuCategory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MenuCategory::from_entity))
    }

    /// Gets all categories of a restaurant in creation order.
    pub async fn get_by_restaurant(&self, restaurant_id: i32) -> Result<Vec<MenuCategory>, DbErr> {
        let entities = entity::prelude::MenuCategory::find()
            .filter(entity::menu_category::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(entity::menu_category::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuCategory::from_entity).collect())
    }

    /// Gets the IDs of all categories belonging to a restaurant.
    pub async fn get_ids_by_restaurant(&self, restaurant_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::MenuCategory::find()
            .select_only()
            .column(entity::menu_category::Column::Id)
            .filter(entity::menu_category::Column::RestaurantId.eq(restaurant_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Checks whether the restaurant already has a category with this name.
    ///
    /// # Arguments
    /// - `restaurant_id` - Owning restaurant
    /// - `name` - Name to check
    /// - `exclude_id` - Category to ignore, used when renaming
    pub async fn name_exists(
        &self,
        restaurant_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::MenuCategory::find()
            .filter(entity::menu_category::Column::RestaurantId.eq(restaurant_id))
            .filter(entity::menu_category::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::menu_category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Renames a category.
    ///
    /// # Returns
    /// - `Ok(MenuCategory)` - The renamed category
    /// - `Err(DbErr::RecordNotFound)` - No category exists with the specified ID
    pub async fn rename(&self, id: i32, name: String) -> Result<MenuCategory, DbErr> {
        let category = entity::prelude::MenuCategory::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Menu category with id {} not found",
                id
            )))?;

        let mut active_model: entity::menu_category::ActiveModel = category.into();
        active_model.name = ActiveValue::Set(name);

        let entity = active_model.update(self.db).await?;

        Ok(MenuCategory::from_entity(entity))
    }

    /// Deletes categories by ID. Their menus must already be removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::MenuCategory::delete_many()
            .filter(entity::menu_category::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
