use sea_orm_migration::prelude::*;

use crate::m20240901_000002_create_courses::{Clients, Courses};

#[derive(DeriveIden)]
enum Subscriptions {
    Table,
    Id,
    Name,
    SubscriptionType,
    Duration,
    NumSessions,
    PriceKopecks,
}

#[derive(DeriveIden)]
enum ClientSubscriptions {
    Table,
    Id,
    ClientId,
    SubscriptionId,
    CourseId,
    PurchaseDate,
    FirstUsedDate,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subscriptions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subscriptions::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Subscriptions::SubscriptionType)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subscriptions::Duration).integer().not_null())
                    .col(ColumnDef::new(Subscriptions::NumSessions).integer().not_null())
                    .col(
                        ColumnDef::new(Subscriptions::PriceKopecks)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .check(Expr::col(Subscriptions::Duration).gte(0))
                    .check(Expr::col(Subscriptions::NumSessions).gte(0))
                    .check(Expr::col(Subscriptions::PriceKopecks).gte(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ClientSubscriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClientSubscriptions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClientSubscriptions::ClientId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClientSubscriptions::SubscriptionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClientSubscriptions::CourseId).big_integer().null())
                    .col(
                        ColumnDef::new(ClientSubscriptions::PurchaseDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClientSubscriptions::FirstUsedDate).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_subscriptions_client_id")
                            .from(ClientSubscriptions::Table, ClientSubscriptions::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_subscriptions_subscription_id")
                            .from(
                                ClientSubscriptions::Table,
                                ClientSubscriptions::SubscriptionId,
                            )
                            .to(Subscriptions::Table, Subscriptions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_subscriptions_course_id")
                            .from(ClientSubscriptions::Table, ClientSubscriptions::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_client_subscriptions_client_id")
                    .table(ClientSubscriptions::Table)
                    .col(ClientSubscriptions::ClientId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(ClientSubscriptions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Subscriptions::Table).to_owned())
            .await?;
        Ok(())
    }
}
