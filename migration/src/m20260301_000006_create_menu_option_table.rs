use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000005_create_option_group_table::OptionGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuOption::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuOption::Id))
                    .col(integer(MenuOption::OptionGroupId))
                    .col(string(MenuOption::Name))
                    .col(integer(MenuOption::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_option_option_group_id")
                            .from(MenuOption::Table, MenuOption::OptionGroupId)
                            .to(OptionGroup::Table, OptionGroup::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_option_option_group_id_name")
                    .table(MenuOption::Table)
                    .col(MenuOption::OptionGroupId)
                    .col(MenuOption::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuOption {
    Table,
    Id,
    OptionGroupId,
    Name,
    Price,
}
