use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_menu_category_table::MenuCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(pk_auto(Menu::Id))
                    .col(integer(Menu::MenuCategoryId))
                    .col(string(Menu::Name))
                    .col(integer(Menu::Price))
                    .col(text_null(Menu::Description))
                    .col(string_null(Menu::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_menu_category_id")
                            .from(Menu::Table, Menu::MenuCategoryId)
                            .to(MenuCategory::Table, MenuCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_menu_category_id_name")
                    .table(Menu::Table)
                    .col(Menu::MenuCategoryId)
                    .col(Menu::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Menu {
    Table,
    Id,
    MenuCategoryId,
    Name,
    Price,
    Description,
    Image,
}
