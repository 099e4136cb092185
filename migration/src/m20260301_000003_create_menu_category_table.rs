use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuCategory::Id))
                    .col(integer(MenuCategory::RestaurantId))
                    .col(string(MenuCategory::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_category_restaurant_id")
                            .from(MenuCategory::Table, MenuCategory::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_category_restaurant_id_name")
                    .table(MenuCategory::Table)
                    .col(MenuCategory::RestaurantId)
                    .col(MenuCategory::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuCategory {
    Table,
    Id,
    RestaurantId,
    Name,
}
