//! Order placement and order history.
//!
//! Placing an order resolves the submitted identifiers against the
//! restaurant's current menu tree, prices the result with
//! [`OrderSnapshot::build`] and stores the snapshot. Stored orders are only
//! ever changed in their status.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::{
    model::order::OrderStatus,
    server::{
        data::{
            menu::MenuRepository, menu_category::MenuCategoryRepository,
            menu_option::MenuOptionRepository, option_group::OptionGroupRepository,
            order::OrderRepository, restaurant::RestaurantRepository,
        },
        error::{order::OrderError, AppError},
        model::order::{
            CartGroup, CartLine, CartOption, Order, OrderDraft, OrderSnapshot, PaginatedOrders,
            PlaceOrderParam,
        },
        util::pagination::total_pages,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for a user.
    ///
    /// Every menu must be offered by the restaurant, every group must belong
    /// to its menu and every option to its group. A group may not have more
    /// options chosen than its `max_count`.
    ///
    /// # Returns
    /// - `Ok(Order)` - Stored order in `not_payment` status
    /// - `Err(AppError::NotFound)` - Restaurant does not exist
    /// - `Err(AppError::OrderErr)` - Cart is invalid or cannot be priced (400)
    pub async fn place(&self, user_id: i32, param: PlaceOrderParam) -> Result<Order, AppError> {
        if RestaurantRepository::new(self.db)
            .find_by_id(param.restaurant_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Restaurant {} not found",
                param.restaurant_id
            )));
        }

        let lines = self.resolve_cart(&param).await?;
        let snapshot = OrderSnapshot::build(OrderDraft {
            user_id,
            restaurant_id: param.restaurant_id,
            payment_type: param.payment_type,
            discount_amount: param.discount_amount,
            lines,
        })?;

        let order = OrderRepository::new(self.db).create(&snapshot).await?;

        tracing::info!(
            "User {} placed order {} at restaurant {} totalling {}",
            user_id,
            order.id,
            param.restaurant_id,
            order.total_price
        );

        Ok(order)
    }

    /// Looks up live names and prices for every identifier in the cart.
    async fn resolve_cart(&self, param: &PlaceOrderParam) -> Result<Vec<CartLine>, AppError> {
        let category_ids: HashSet<i32> = MenuCategoryRepository::new(self.db)
            .get_ids_by_restaurant(param.restaurant_id)
            .await?
            .into_iter()
            .collect();

        let menu_ids: Vec<i32> = param.items.iter().map(|item| item.menu_id).collect();
        let menus: HashMap<i32, _> = MenuRepository::new(self.db)
            .find_by_ids(&menu_ids)
            .await?
            .into_iter()
            .filter(|menu| category_ids.contains(&menu.menu_category_id))
            .map(|menu| (menu.id, menu))
            .collect();

        let groups: HashMap<i32, _> = OptionGroupRepository::new(self.db)
            .get_by_menus(&menu_ids)
            .await?
            .into_iter()
            .map(|group| (group.id, group))
            .collect();

        let option_ids: Vec<i32> = param
            .items
            .iter()
            .flat_map(|item| item.groups.iter())
            .flat_map(|group| group.option_ids.iter().copied())
            .collect();
        let options: HashMap<i32, _> = MenuOptionRepository::new(self.db)
            .find_by_ids(&option_ids)
            .await?
            .into_iter()
            .map(|option| (option.id, option))
            .collect();

        let mut lines = Vec::with_capacity(param.items.len());
        for item in &param.items {
            let menu = menus
                .get(&item.menu_id)
                .ok_or(OrderError::MenuNotInRestaurant {
                    menu_id: item.menu_id,
                    restaurant_id: param.restaurant_id,
                })?;

            let mut seen_groups = HashSet::new();
            let mut cart_groups = Vec::with_capacity(item.groups.len());
            for selection in &item.groups {
                let group = groups
                    .get(&selection.group_id)
                    .filter(|group| group.menu_id == menu.id)
                    .ok_or(OrderError::GroupNotInMenu {
                        group_id: selection.group_id,
                        menu_id: menu.id,
                    })?;
                if !seen_groups.insert(group.id) {
                    return Err(OrderError::DuplicateGroup(group.id).into());
                }

                let selected = selection.option_ids.len();
                if selected > usize::try_from(group.max_count).unwrap_or(0) {
                    return Err(OrderError::TooManyOptions {
                        group: group.name.clone(),
                        max_count: group.max_count,
                        selected,
                    }
                    .into());
                }

                let mut seen_options = HashSet::new();
                let mut cart_options = Vec::with_capacity(selected);
                for option_id in &selection.option_ids {
                    let option = options
                        .get(option_id)
                        .filter(|option| option.option_group_id == group.id)
                        .ok_or(OrderError::OptionNotInGroup {
                            option_id: *option_id,
                            group_id: group.id,
                        })?;
                    if !seen_options.insert(option.id) {
                        return Err(OrderError::DuplicateOption(option.id).into());
                    }

                    cart_options.push(CartOption {
                        name: option.name.clone(),
                        price: option.price,
                    });
                }

                cart_groups.push(CartGroup {
                    name: group.name.clone(),
                    options: cart_options,
                });
            }

            lines.push(CartLine {
                name: menu.name.clone(),
                price: menu.price,
                quantity: item.quantity,
                groups: cart_groups,
            });
        }

        Ok(lines)
    }

    /// Gets one of the user's orders.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Order missing or placed by another user
    pub async fn get_for_user(&self, user_id: i32, order_id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .filter(|order| order.user_id == Some(user_id))
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))
    }

    /// Gets one of the orders the restaurant received.
    pub async fn get_for_restaurant(
        &self,
        restaurant_id: i32,
        order_id: i32,
    ) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .filter(|order| order.restaurant_id == Some(restaurant_id))
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))
    }

    pub async fn list_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrders, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_by_user_paginated(user_id, page, per_page)
            .await?;

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn list_for_restaurant(
        &self,
        restaurant_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrders, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_by_restaurant_paginated(restaurant_id, page, per_page)
            .await?;

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Moves an order to a new status.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order with the new status
    /// - `Err(AppError::NotFound)` - Order missing or received by another restaurant
    /// - `Err(AppError::Conflict)` - Order is done or cancelled, or already has this status
    pub async fn update_status(
        &self,
        restaurant_id: i32,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Order, AppError> {
        let order = self.get_for_restaurant(restaurant_id, order_id).await?;

        if !order.status.can_transition_to(status) {
            return Err(AppError::Conflict(format!(
                "Order {} cannot move from {:?} to {:?}",
                order_id, order.status, status
            )));
        }

        let order = OrderRepository::new(self.db)
            .update_status(order_id, status)
            .await?;

        tracing::info!(
            "Restaurant {} set order {} to {:?}",
            restaurant_id,
            order_id,
            status
        );

        Ok(order)
    }
}
