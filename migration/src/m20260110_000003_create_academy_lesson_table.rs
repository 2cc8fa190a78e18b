use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_academy_module_table::AcademyModule;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademyLesson::Table)
                    .if_not_exists()
                    .col(pk_auto(AcademyLesson::Id))
                    .col(integer(AcademyLesson::ModuleId))
                    .col(string(AcademyLesson::Title))
                    .col(integer(AcademyLesson::OrderIndex))
                    .col(boolean(AcademyLesson::Published).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academy_lesson_module_id")
                            .from(AcademyLesson::Table, AcademyLesson::ModuleId)
                            .to(AcademyModule::Table, AcademyModule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademyLesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcademyLesson {
    Table,
    Id,
    ModuleId,
    Title,
    OrderIndex,
    Published,
}
