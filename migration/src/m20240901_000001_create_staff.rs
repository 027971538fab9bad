use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Accounts {
    Table,
    Id,
    Username,
    PasswordHash,
    IsStaff,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Profiles {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Birthday,
    Experience,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Accounts::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Accounts::PasswordHash).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Accounts::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Accounts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp())
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::FirstName).string_len(30).not_null())
                    .col(ColumnDef::new(Profiles::LastName).string_len(30).not_null())
                    .col(ColumnDef::new(Profiles::Birthday).date().not_null())
                    .col(ColumnDef::new(Profiles::Experience).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user_id")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Profiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Accounts::Table).to_owned())
            .await?;
        Ok(())
    }
}
