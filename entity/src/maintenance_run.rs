use sea_orm::entity::prelude::*;

/// Ledger row recorded every time a maintenance task runs.
///
/// Tasks are re-runnable; the ledger makes past runs auditable instead of
/// guarding against reruns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_run")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub task_name: String,
    pub run_at: DateTimeUtc,
    pub summary: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
