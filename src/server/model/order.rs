//! Order domain models and the checkout snapshot builder.
//!
//! An order never references live menu rows. At checkout the service resolves
//! the cart against the current menu tree into [`CartLine`]s, and
//! [`OrderSnapshot::build`] turns those into priced, self-contained detail
//! lines. The detail is stored as JSON and never rewritten afterwards; only
//! the order status changes over an order's lifetime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::order::{
        CreateOrderDto, OrderDetailDto, OrderDetailGroupDto, OrderDetailOptionDto, OrderDto,
        OrderStatus, PaginatedOrdersDto, PaymentType,
    },
    server::error::order::OrderError,
};

impl From<entity::sea_orm_active_enums::PaymentType> for PaymentType {
    fn from(value: entity::sea_orm_active_enums::PaymentType) -> Self {
        match value {
            entity::sea_orm_active_enums::PaymentType::Offline => Self::Offline,
            entity::sea_orm_active_enums::PaymentType::Online => Self::Online,
        }
    }
}

impl From<PaymentType> for entity::sea_orm_active_enums::PaymentType {
    fn from(value: PaymentType) -> Self {
        match value {
            PaymentType::Offline => Self::Offline,
            PaymentType::Online => Self::Online,
        }
    }
}

impl From<entity::sea_orm_active_enums::OrderStatus> for OrderStatus {
    fn from(value: entity::sea_orm_active_enums::OrderStatus) -> Self {
        match value {
            entity::sea_orm_active_enums::OrderStatus::NotPayment => Self::NotPayment,
            entity::sea_orm_active_enums::OrderStatus::Paid => Self::Paid,
            entity::sea_orm_active_enums::OrderStatus::Done => Self::Done,
            entity::sea_orm_active_enums::OrderStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<OrderStatus> for entity::sea_orm_active_enums::OrderStatus {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::NotPayment => Self::NotPayment,
            OrderStatus::Paid => Self::Paid,
            OrderStatus::Done => Self::Done,
            OrderStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl OrderStatus {
    /// Done and cancelled orders are closed for further status changes.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        !self.is_terminal() && self != next
    }
}

/// Option copied into an order detail line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineOption {
    pub name: String,
    pub price: i32,
}

/// Group copied into an order detail line with the options that were chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineGroup {
    pub name: String,
    pub option: Vec<OrderLineOption>,
}

/// One priced line of an order snapshot.
///
/// Field names double as the stored JSON layout of the `detail` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: i32,
    pub quantity: i32,
    pub sub_price: i64,
    pub group: Vec<OrderLineGroup>,
}

impl OrderLine {
    fn into_dto(self) -> OrderDetailDto {
        OrderDetailDto {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            sub_price: self.sub_price,
            group: self
                .group
                .into_iter()
                .map(|g| OrderDetailGroupDto {
                    name: g.name,
                    option: g
                        .option
                        .into_iter()
                        .map(|o| OrderDetailOptionDto {
                            name: o.name,
                            price: o.price,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Group selection of a cart item as submitted by the user.
#[derive(Debug, Clone)]
pub struct CartGroupParam {
    pub group_id: i32,
    pub option_ids: Vec<i32>,
}

/// Cart item as submitted by the user: identifiers and quantity only.
#[derive(Debug, Clone)]
pub struct CartItemParam {
    pub menu_id: i32,
    pub quantity: i32,
    pub groups: Vec<CartGroupParam>,
}

/// Checkout request before prices are resolved.
#[derive(Debug, Clone)]
pub struct PlaceOrderParam {
    pub restaurant_id: i32,
    pub payment_type: PaymentType,
    pub discount_amount: i64,
    pub items: Vec<CartItemParam>,
}

impl PlaceOrderParam {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            restaurant_id: dto.r_id,
            payment_type: dto.payment_type,
            discount_amount: dto.discount_amount,
            items: dto
                .menu
                .into_iter()
                .map(|item| CartItemParam {
                    menu_id: item.m_id,
                    quantity: item.quantity,
                    groups: item
                        .group
                        .into_iter()
                        .map(|group| CartGroupParam {
                            group_id: group.g_id,
                            option_ids: group.option,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Chosen option resolved from the live menu.
#[derive(Debug, Clone, PartialEq)]
pub struct CartOption {
    pub name: String,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartGroup {
    pub name: String,
    pub options: Vec<CartOption>,
}

/// Cart line resolved from the live menu: current name and price plus the
/// chosen options.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub name: String,
    pub price: i32,
    pub quantity: i32,
    pub groups: Vec<CartGroup>,
}

/// Everything needed to price an order.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub user_id: i32,
    pub restaurant_id: i32,
    pub payment_type: PaymentType,
    pub discount_amount: i64,
    pub lines: Vec<CartLine>,
}

/// Priced, immutable copy of a cart ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSnapshot {
    pub user_id: i32,
    pub restaurant_id: i32,
    pub payment_type: PaymentType,
    pub discount_amount: i64,
    pub total_price: i64,
    pub detail: Vec<OrderLine>,
}

impl OrderSnapshot {
    /// Prices a resolved cart.
    ///
    /// Each line costs `(menu price + sum of chosen option prices) * quantity`
    /// and the order total is the sum of all lines minus the discount.
    ///
    /// # Returns
    /// - `Ok(OrderSnapshot)` - Priced snapshot with copied names and prices
    /// - `Err(OrderError::EmptyCart)` - No lines in the cart
    /// - `Err(OrderError::InvalidQuantity)` - A line has quantity below 1
    /// - `Err(OrderError::NegativeDiscount)` - Discount is below zero
    /// - `Err(OrderError::DiscountExceedsTotal)` - Discount is larger than the gross total
    /// - `Err(OrderError::Overflow)` - Amounts do not fit in 64 bits
    pub fn build(draft: OrderDraft) -> Result<Self, OrderError> {
        if draft.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if draft.discount_amount < 0 {
            return Err(OrderError::NegativeDiscount(draft.discount_amount));
        }

        let mut gross: i64 = 0;
        let mut detail = Vec::with_capacity(draft.lines.len());

        for line in draft.lines {
            if line.quantity < 1 {
                return Err(OrderError::InvalidQuantity {
                    menu: line.name,
                    quantity: line.quantity,
                });
            }

            let mut unit_price = i64::from(line.price);
            let mut groups = Vec::with_capacity(line.groups.len());
            for group in line.groups {
                let mut options = Vec::with_capacity(group.options.len());
                for option in group.options {
                    unit_price = unit_price
                        .checked_add(i64::from(option.price))
                        .ok_or(OrderError::Overflow)?;
                    options.push(OrderLineOption {
                        name: option.name,
                        price: option.price,
                    });
                }
                groups.push(OrderLineGroup {
                    name: group.name,
                    option: options,
                });
            }

            let sub_price = unit_price
                .checked_mul(i64::from(line.quantity))
                .ok_or(OrderError::Overflow)?;
            gross = gross.checked_add(sub_price).ok_or(OrderError::Overflow)?;

            detail.push(OrderLine {
                name: line.name,
                price: line.price,
                quantity: line.quantity,
                sub_price,
                group: groups,
            });
        }

        if draft.discount_amount > gross {
            return Err(OrderError::DiscountExceedsTotal {
                discount: draft.discount_amount,
                gross,
            });
        }

        Ok(Self {
            user_id: draft.user_id,
            restaurant_id: draft.restaurant_id,
            payment_type: draft.payment_type,
            discount_amount: draft.discount_amount,
            total_price: gross - draft.discount_amount,
            detail,
        })
    }
}

/// Stored order.
///
/// `user_id` and `restaurant_id` become `None` once the referenced account
/// leaves; the snapshot itself stays intact.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub payment_type: PaymentType,
    pub status: OrderStatus,
    pub discount_amount: i64,
    pub total_price: i64,
    pub detail: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Converts an entity model to an order domain model, decoding the stored detail JSON.
    ///
    /// # Returns
    /// - `Ok(Order)` - Decoded order
    /// - `Err(DbErr::Json)` - Stored detail does not match the snapshot layout
    pub fn from_entity(entity: entity::order::Model) -> Result<Self, sea_orm::DbErr> {
        let detail: Vec<OrderLine> = serde_json::from_value(entity.detail).map_err(|e| {
            sea_orm::DbErr::Json(format!("Order {} has malformed detail: {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            restaurant_id: entity.restaurant_id,
            payment_type: entity.payment_type.into(),
            status: entity.status.into(),
            discount_amount: entity.discount_amount,
            total_price: entity.total_price,
            detail,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            od_id: self.id,
            u_id: self.user_id,
            r_id: self.restaurant_id,
            payment_type: self.payment_type,
            status: self.status,
            discount_amount: self.discount_amount,
            total_price: self.total_price,
            detail: self.detail.into_iter().map(OrderLine::into_dto).collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self.orders.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
