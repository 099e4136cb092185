//! Order factory for inserting stored order snapshots directly.

use chrono::Utc;
use entity::sea_orm_active_enums::{OrderStatus, PaymentType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for stored orders.
///
/// The default detail is a single line `"Menu"` priced 10000 with quantity 1
/// and no options, so `total_price` defaults to 10000.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    restaurant_id: Option<i32>,
    payment_type: PaymentType,
    status: OrderStatus,
    discount_amount: i64,
    total_price: i64,
    detail: serde_json::Value,
}

impl<'a> OrderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, restaurant_id: i32) -> Self {
        Self {
            db,
            user_id: Some(user_id),
            restaurant_id: Some(restaurant_id),
            payment_type: PaymentType::Offline,
            status: OrderStatus::NotPayment,
            discount_amount: 0,
            total_price: 10000,
            detail: json!([{
                "name": "Menu",
                "price": 10000,
                "quantity": 1,
                "sub_price": 10000,
                "group": []
            }]),
        }
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = payment_type;
        self
    }

    pub fn detail(mut self, detail: serde_json::Value, total_price: i64) -> Self {
        self.detail = detail;
        self.total_price = total_price;
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            payment_type: ActiveValue::Set(self.payment_type),
            status: ActiveValue::Set(self.status),
            discount_amount: ActiveValue::Set(self.discount_amount),
            total_price: ActiveValue::Set(self.total_price),
            detail: ActiveValue::Set(self.detail),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    restaurant_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id, restaurant_id).build().await
}
