use sea_orm::entity::prelude::*;

/// Academy course module grouping ordered lessons.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academy_module")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub order_index: i32,
    pub published: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::academy_lesson::Entity")]
    AcademyLesson,
}

impl Related<super::academy_lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademyLesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
