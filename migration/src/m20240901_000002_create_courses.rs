use sea_orm_migration::prelude::*;

use crate::m20240901_000001_create_staff::Profiles;

#[derive(DeriveIden)]
pub enum Clients {
    Table,
    Id,
    FirstName,
    LastName,
    Birthday,
    PhoneNumber,
    IsFromClub,
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    Name,
    TeacherId,
    Description,
}

#[derive(DeriveIden)]
enum Schedules {
    Table,
    Id,
    CourseId,
    DayOfWeek,
    StartTime,
}

#[derive(DeriveIden)]
enum Lessons {
    Table,
    Id,
    CourseId,
    LessonDate,
    LessonTime,
    TeacherId,
    IsConducted,
}

#[derive(DeriveIden)]
enum LessonClients {
    Table,
    LessonId,
    ClientId,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::FirstName).string_len(30).not_null())
                    .col(ColumnDef::new(Clients::LastName).string_len(30).not_null())
                    .col(ColumnDef::new(Clients::Birthday).date().not_null())
                    .col(
                        ColumnDef::new(Clients::PhoneNumber)
                            .string_len(17)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Clients::IsFromClub)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Courses::TeacherId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Courses::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_teacher_id")
                            .from(Courses::Table, Courses::TeacherId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schedules::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Schedules::DayOfWeek).integer().not_null())
                    .col(ColumnDef::new(Schedules::StartTime).time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_course_id")
                            .from(Schedules::Table, Schedules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lessons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lessons::CourseId).big_integer().null())
                    .col(ColumnDef::new(Lessons::LessonDate).date().not_null())
                    .col(ColumnDef::new(Lessons::LessonTime).time().not_null())
                    .col(ColumnDef::new(Lessons::TeacherId).big_integer().null())
                    .col(
                        ColumnDef::new(Lessons::IsConducted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lessons_course_id")
                            .from(Lessons::Table, Lessons::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lessons_teacher_id")
                            .from(Lessons::Table, Lessons::TeacherId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LessonClients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LessonClients::LessonId).big_integer().not_null())
                    .col(ColumnDef::new(LessonClients::ClientId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(LessonClients::LessonId)
                            .col(LessonClients::ClientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_clients_lesson_id")
                            .from(LessonClients::Table, LessonClients::LessonId)
                            .to(Lessons::Table, Lessons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_clients_client_id")
                            .from(LessonClients::Table, LessonClients::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schedules_course_id")
                    .table(Schedules::Table)
                    .col(Schedules::CourseId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lessons_lesson_date")
                    .table(Lessons::Table)
                    .col(Lessons::LessonDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(LessonClients::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Lessons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Schedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Clients::Table).to_owned())
            .await?;
        Ok(())
    }
}
