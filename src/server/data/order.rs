//! Order repository.
//!
//! Orders are written once from an [`OrderSnapshot`] and afterwards only their
//! status and account references change. The detail column is never updated.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::order::OrderStatus,
    server::model::order::{Order, OrderSnapshot},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a priced snapshot as a new order in `not_payment` status.
    ///
    /// # Returns
    /// - `Ok(Order)` - The stored order with generated ID
    /// - `Err(DbErr::Json)` - Detail could not be encoded
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, snapshot: &OrderSnapshot) -> Result<Order, DbErr> {
        let detail = serde_json::to_value(&snapshot.detail)
            .map_err(|e| DbErr::Json(format!("Failed to encode order detail: {}", e)))?;

        let entity = entity::order::ActiveModel {
            user_id: ActiveValue::Set(Some(snapshot.user_id)),
            restaurant_id: ActiveValue::Set(Some(snapshot.restaurant_id)),
            payment_type: ActiveValue::Set(snapshot.payment_type.into()),
            status: ActiveValue::Set(OrderStatus::NotPayment.into()),
            discount_amount: ActiveValue::Set(snapshot.discount_amount),
            total_price: ActiveValue::Set(snapshot.total_price),
            detail: ActiveValue::Set(detail),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Order::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        entity::prelude::Order::find_by_id(id)
            .one(self.db)
            .await?
            .map(Order::from_entity)
            .transpose()
    }

    /// Gets a page of a user's orders, newest first.
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Page of orders and total count for the user
    /// - `Err(DbErr)` - Database error or undecodable detail
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        self.get_paginated(entity::order::Column::UserId, user_id, page, per_page)
            .await
    }

    /// Gets a page of a restaurant's orders, newest first.
    pub async fn get_by_restaurant_paginated(
        &self,
        restaurant_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        self.get_paginated(
            entity::order::Column::RestaurantId,
            restaurant_id,
            page,
            per_page,
        )
        .await
    }

    async fn get_paginated(
        &self,
        owner_column: entity::order::Column,
        owner_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .filter(owner_column.eq(owner_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Order::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((orders, total))
    }

    /// Changes an order's status.
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order
    /// - `Err(DbErr::RecordNotFound)` - No order exists with the specified ID
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, DbErr> {
        let order = entity::prelude::Order::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Order with id {} not found",
                id
            )))?;

        let mut active_model: entity::order::ActiveModel = order.into();
        active_model.status = ActiveValue::Set(status.into());

        let entity = active_model.update(self.db).await?;

        Order::from_entity(entity)
    }

    /// Clears the user reference on every order the user placed.
    pub async fn detach_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::UserId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::order::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Clears the restaurant reference on every order the restaurant received.
    pub async fn detach_restaurant(&self, restaurant_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::RestaurantId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::order::Column::RestaurantId.eq(restaurant_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
