use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    Offline,
    Online,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    NotPayment,
    Paid,
    Done,
    Cancelled,
}

/// Options chosen from a single group of a cart line.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CartGroupDto {
    pub g_id: i32,
    #[serde(default)]
    pub option: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CartMenuDto {
    pub m_id: i32,
    #[validate(range(min = 1, max = 999))]
    pub quantity: i32,
    #[serde(default)]
    #[validate(nested)]
    pub group: Vec<CartGroupDto>,
}

/// Cart submitted at checkout.
///
/// Only identifiers and quantities travel from the client; names and prices
/// are resolved from the restaurant's current menu when the order is placed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateOrderDto {
    pub r_id: i32,
    #[serde(default)]
    pub payment_type: PaymentType,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub discount_amount: i64,
    #[validate(length(min = 1), nested)]
    pub menu: Vec<CartMenuDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailOptionDto {
    pub name: String,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailGroupDto {
    pub name: String,
    pub option: Vec<OrderDetailOptionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailDto {
    pub name: String,
    pub price: i32,
    pub quantity: i32,
    pub sub_price: i64,
    pub group: Vec<OrderDetailGroupDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub od_id: i32,
    pub u_id: Option<i32>,
    pub r_id: Option<i32>,
    pub payment_type: PaymentType,
    pub status: OrderStatus,
    pub discount_amount: i64,
    pub total_price: i64,
    pub detail: Vec<OrderDetailDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<OrderDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditOrderStatusDto {
    pub status: OrderStatus,
}
