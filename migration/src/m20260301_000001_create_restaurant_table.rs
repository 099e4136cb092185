use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurant::Id))
                    .col(string_uniq(Restaurant::Email))
                    .col(string(Restaurant::PasswordHash))
                    .col(string(Restaurant::Name))
                    .col(string(Restaurant::Phone))
                    .col(string(Restaurant::Address))
                    .col(text_null(Restaurant::Description))
                    .col(
                        timestamp_with_time_zone(Restaurant::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Phone,
    Address,
    Description,
    CreatedAt,
}
