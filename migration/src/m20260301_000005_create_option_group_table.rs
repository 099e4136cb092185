use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_menu_table::Menu;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OptionGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(OptionGroup::Id))
                    .col(integer(OptionGroup::MenuId))
                    .col(string(OptionGroup::Name))
                    .col(integer(OptionGroup::MaxCount).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_option_group_menu_id")
                            .from(OptionGroup::Table, OptionGroup::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_option_group_menu_id_name")
                    .table(OptionGroup::Table)
                    .col(OptionGroup::MenuId)
                    .col(OptionGroup::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OptionGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OptionGroup {
    Table,
    Id,
    MenuId,
    Name,
    MaxCount,
}
