pub use super::menu::Entity as Menu;
pub use super::menu_category::Entity as MenuCategory;
pub use super::menu_option::Entity as MenuOption;
pub use super::option_group::Entity as OptionGroup;
pub use super::order::Entity as Order;
pub use super::restaurant::Entity as Restaurant;
pub use super::user::Entity as User;
