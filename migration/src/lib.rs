pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_restaurant_table;
mod m20260301_000002_create_user_table;
mod m20260301_000003_create_menu_category_table;
mod m20260301_000004_create_menu_table;
mod m20260301_000005_create_option_group_table;
mod m20260301_000006_create_menu_option_table;
mod m20260302_000007_create_orders_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_restaurant_table::Migration),
            Box::new(m20260301_000002_create_user_table::Migration),
            Box::new(m20260301_000003_create_menu_category_table::Migration),
            Box::new(m20260301_000004_create_menu_table::Migration),
            Box::new(m20260301_000005_create_option_group_table::Migration),
            Box::new(m20260301_000006_create_menu_option_table::Migration),
            Box::new(m20260302_000007_create_orders_table::Migration),
        ]
    }
}
