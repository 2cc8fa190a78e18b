use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademyModule::Table)
                    .if_not_exists()
                    .col(pk_auto(AcademyModule::Id))
                    .col(string(AcademyModule::Title))
                    .col(string_uniq(AcademyModule::Slug))
                    .col(integer(AcademyModule::OrderIndex))
                    .col(boolean(AcademyModule::Published).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademyModule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcademyModule {
    Table,
    Id,
    Title,
    Slug,
    OrderIndex,
    Published,
}
