//! Restaurant account repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::restaurant::{
    CreateRestaurantParam, Restaurant, UpdateRestaurantParam,
};

/// Repository providing database operations for restaurant accounts.
///
/// Generic over the connection so that account removal can run inside the
/// same transaction as the menu tree cascade.
pub struct RestaurantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new restaurant account stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(Restaurant)` - The created restaurant with generated ID
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateRestaurantParam) -> Result<Restaurant, DbErr> {
        let entity = entity::restaurant::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(param.phone),
            address: ActiveValue::Set(param.address),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Restaurant::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DbErr> {
        let entity = entity::prelude::Restaurant::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Restaurant::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Restaurant>, DbErr> {
        let entity = entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Restaurant::from_entity))
    }

    /// Checks whether any restaurant is registered with the email.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of restaurants ordered by name then ID.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of restaurants per page
    ///
    /// # Returns
    /// - `Ok((restaurants, total))` - Page of restaurants and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Restaurant>, u64), DbErr> {
        let paginator = entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Name)
            .order_by_asc(entity::restaurant::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let restaurants = entities.into_iter().map(Restaurant::from_entity).collect();

        Ok((restaurants, total))
    }

    /// Applies a partial update. Fields left as `None` are not touched.
    ///
    /// # Returns
    /// - `Ok(Restaurant)` - The updated restaurant
    /// - `Err(DbErr::RecordNotFound)` - No restaurant exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, param: UpdateRestaurantParam) -> Result<Restaurant, DbErr> {
        let restaurant = entity::prelude::Restaurant::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Restaurant with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::restaurant::ActiveModel = restaurant.clone().into();
        if let Some(password_hash) = param.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(address) = param.address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }

        if !active_model.is_changed() {
            return Ok(Restaurant::from_entity(restaurant));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Restaurant::from_entity(entity))
    }

    /// Deletes a restaurant row. The menu tree must already be gone; orders
    /// referencing the restaurant have their `restaurant_id` set to NULL.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Restaurant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
