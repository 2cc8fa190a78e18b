use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Badge::Table)
                    .if_not_exists()
                    .col(pk_auto(Badge::Id))
                    .col(string_uniq(Badge::Code))
                    .col(string(Badge::Name))
                    .col(text(Badge::Description))
                    .to_owned(),
            )
            .await?;

        // Seed the catalogue with the one badge the platform awards today.
        let insert = Query::insert()
            .into_table(Badge::Table)
            .columns([Badge::Code, Badge::Name, Badge::Description])
            .values_panic([
                "academy_master".into(),
                "Academy Master".into(),
                "Completed every published lesson in every published module.".into(),
            ])
            .to_owned();
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Badge {
    Table,
    Id,
    Code,
    Name,
    Description,
}
