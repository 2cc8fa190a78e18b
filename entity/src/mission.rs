use sea_orm::entity::prelude::*;

/// Daily mission definition with its XP reward.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub xp_reward: i32,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mission_completion::Entity")]
    MissionCompletion,
}

impl Related<super::mission_completion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionCompletion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
