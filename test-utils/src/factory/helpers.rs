//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Full path from a restaurant down to a single option.
pub struct MenuTree {
    pub restaurant: entity::restaurant::Model,
    pub category: entity::menu_category::Model,
    pub menu: entity::menu::Model,
    pub group: entity::option_group::Model,
    pub option: entity::menu_option::Model,
}

/// Creates a restaurant with one category, menu, option group and option.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Returns
/// - `Ok(MenuTree)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_menu_tree(db: &DatabaseConnection) -> Result<MenuTree, DbErr> {
    let restaurant = crate::factory::restaurant::create_restaurant(db).await?;
    create_menu_tree_for_restaurant(db, restaurant).await
}

/// Creates a category, menu, option group and option under an existing restaurant.
pub async fn create_menu_tree_for_restaurant(
    db: &DatabaseConnection,
    restaurant: entity::restaurant::Model,
) -> Result<MenuTree, DbErr> {
    let category = crate::factory::menu_category::create_menu_category(db, restaurant.id).await?;
    let menu = crate::factory::menu::create_menu(db, category.id).await?;
    let group = crate::factory::option_group::create_option_group(db, menu.id).await?;
    let option = crate::factory::menu_option::create_menu_option(db, group.id).await?;

    Ok(MenuTree {
        restaurant,
        category,
        menu,
        group,
        option,
    })
}
