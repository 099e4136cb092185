use thiserror::Error;

/// Reasons a cart is rejected at checkout.
///
/// Every variant results in a 400 Bad Request carrying the error message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order must contain at least one menu")]
    EmptyCart,

    #[error("Quantity {quantity} for menu '{menu}' must be at least 1")]
    InvalidQuantity { menu: String, quantity: i32 },

    #[error("Discount amount {0} must not be negative")]
    NegativeDiscount(i64),

    /// Discount would bring the total below zero.
    #[error("Discount amount {discount} exceeds order total {gross}")]
    DiscountExceedsTotal { discount: i64, gross: i64 },

    #[error("Order total overflows")]
    Overflow,

    #[error("Menu {menu_id} is not offered by restaurant {restaurant_id}")]
    MenuNotInRestaurant { menu_id: i32, restaurant_id: i32 },

    #[error("Group {group_id} does not belong to menu {menu_id}")]
    GroupNotInMenu { group_id: i32, menu_id: i32 },

    #[error("Group {0} listed more than once for the same menu")]
    DuplicateGroup(i32),

    #[error("Option {option_id} does not belong to group {group_id}")]
    OptionNotInGroup { option_id: i32, group_id: i32 },

    /// More options were picked than the group allows.
    #[error("Group '{group}' allows at most {max_count} options, {selected} selected")]
    TooManyOptions {
        group: String,
        max_count: i32,
        selected: usize,
    },

    #[error("Option {0} selected more than once")]
    DuplicateOption(i32),
}
