use crate::{
    model::order::{OrderStatus, PaymentType},
    server::{
        data::order::OrderRepository,
        model::order::{CartLine, OrderDraft, OrderSnapshot},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;

fn snapshot(user_id: i32, restaurant_id: i32) -> OrderSnapshot {
    OrderSnapshot::build(OrderDraft {
        user_id,
        restaurant_id,
        payment_type: PaymentType::Online,
        discount_amount: 500,
        lines: vec![CartLine {
            name: "Burger".to_string(),
            price: 8000,
            quantity: 2,
            groups: Vec::new(),
        }],
    })
    .unwrap()
}
