use sea_orm::entity::prelude::*;

/// Single lesson within an academy module, numbered by `order_index`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academy_lesson")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub module_id: i32,
    pub title: String,
    pub order_index: i32,
    pub published: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academy_module::Entity",
        from = "Column::ModuleId",
        to = "super::academy_module::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AcademyModule,
    #[sea_orm(has_many = "super::lesson_completion::Entity")]
    LessonCompletion,
}

impl Related<super::academy_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademyModule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
