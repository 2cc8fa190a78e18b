use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_profile_table::Profile,
    m20260110_000003_create_academy_lesson_table::AcademyLesson,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LessonCompletion::Table)
                    .if_not_exists()
                    .col(pk_auto(LessonCompletion::Id))
                    .col(integer(LessonCompletion::ProfileId))
                    .col(integer(LessonCompletion::LessonId))
                    .col(
                        timestamp_with_time_zone(LessonCompletion::CompletedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_completion_profile_id")
                            .from(LessonCompletion::Table, LessonCompletion::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_completion_lesson_id")
                            .from(LessonCompletion::Table, LessonCompletion::LessonId)
                            .to(AcademyLesson::Table, AcademyLesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_lesson_completion_profile_lesson")
                    .table(LessonCompletion::Table)
                    .col(LessonCompletion::ProfileId)
                    .col(LessonCompletion::LessonId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonCompletion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonCompletion {
    Table,
    Id,
    ProfileId,
    LessonId,
    CompletedAt,
}
