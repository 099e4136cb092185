mod menu;
mod menu_category;
mod menu_option;
mod order;
mod restaurant;
