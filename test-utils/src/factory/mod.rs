//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Parents are passed in explicitly; `helpers` builds whole menu
//! trees in one call.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let restaurant = factory::create_restaurant(&db).await?;
//! let category = factory::create_menu_category(&db, restaurant.id).await?;
//!
//! let menu = factory::menu::MenuFactory::new(&db, category.id)
//!     .name("Burger")
//!     .price(8000)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `restaurant` - Restaurant accounts
//! - `user` - User accounts
//! - `menu_category` - Menu categories of a restaurant
//! - `menu` - Menus of a category
//! - `option_group` - Option groups of a menu
//! - `menu_option` - Options of a group
//! - `order` - Stored order snapshots
//! - `helpers` - Unique id generation and menu tree helpers

pub mod helpers;
pub mod menu;
pub mod menu_category;
pub mod menu_option;
pub mod option_group;
pub mod order;
pub mod restaurant;
pub mod user;

pub use menu::create_menu;
pub use menu_category::create_menu_category;
pub use menu_option::create_menu_option;
pub use option_group::create_option_group;
pub use order::create_order;
pub use restaurant::create_restaurant;
pub use user::create_user;
