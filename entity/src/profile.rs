use sea_orm::entity::prelude::*;

/// Member profile with authentication, subscription, and gamification state.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub admin: bool,
    /// One of `active`, `inactive`, `past_due`.
    pub subscription_status: String,
    pub xp: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lesson_completion::Entity")]
    LessonCompletion,
    #[sea_orm(has_many = "super::user_badge::Entity")]
    UserBadge,
    #[sea_orm(has_many = "super::mission_completion::Entity")]
    MissionCompletion,
    #[sea_orm(has_many = "super::forum_post::Entity")]
    ForumPost,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::login_log::Entity")]
    LoginLog,
}

impl Related<super::lesson_completion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonCompletion.def()
    }
}

impl Related<super::user_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBadge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
