use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_restaurant_table::Restaurant,
    m20260301_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer_null(Orders::UserId))
                    .col(integer_null(Orders::RestaurantId))
                    .col(string_len(Orders::PaymentType, 16).default("offline"))
                    .col(string_len(Orders::Status, 16).default("not_payment"))
                    .col(big_integer(Orders::DiscountAmount).default(0))
                    .col(big_integer(Orders::TotalPrice))
                    .col(json(Orders::Detail))
                    .col(timestamp_with_time_zone(Orders::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user_id")
                            .from(Orders::Table, Orders::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_restaurant_id")
                            .from(Orders::Table, Orders::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    UserId,
    RestaurantId,
    PaymentType,
    Status,
    DiscountAmount,
    TotalPrice,
    Detail,
    CreatedAt,
}
