use sea_orm::entity::prelude::*;

/// Record of a member completing a lesson. Unique per (profile, lesson).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_completion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub profile_id: i32,
    pub lesson_id: i32,
    pub completed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ProfileId",
        to = "super::profile::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Profile,
    #[sea_orm(
        belongs_to = "super::academy_lesson::Entity",
        from = "Column::LessonId",
        to = "super::academy_lesson::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AcademyLesson,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::academy_lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademyLesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
