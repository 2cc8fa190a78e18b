//! Mission data repository.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::mission::Model>, DbErr> {
        entity::prelude::Mission::find_by_id(id).one(self.db).await
    }

    pub async fn get_active(&self) -> Result<Vec<entity::mission::Model>, DbErr> {
        entity::prelude::Mission::find()
            .filter(entity::mission::Column::Active.eq(true))
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a profile's completion of a mission on a specific day.
    pub async fn find_completion_on(
        &self,
        profile_id: i32,
        mission_id: i32,
        day: NaiveDate,
    ) -> Result<Option<entity::mission_completion::Model>, DbErr> {
        entity::prelude::MissionCompletion::find()
            .filter(entity::mission_completion::Column::ProfileId.eq(profile_id))
            .filter(entity::mission_completion::Column::MissionId.eq(mission_id))
            .filter(entity::mission_completion::Column::CompletedOn.eq(day))
            .one(self.db)
            .await
    }

    pub async fn insert_completion(
        &self,
        profile_id: i32,
        mission_id: i32,
        day: NaiveDate,
    ) -> Result<(), DbErr> {
        entity::mission_completion::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            mission_id: ActiveValue::Set(mission_id),
            completed_on: ActiveValue::Set(day),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    pub async fn delete_completion(&self, completion_id: i32) -> Result<(), DbErr> {
        entity::prelude::MissionCompletion::delete_by_id(completion_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Mission ids a profile completed on a given day.
    pub async fn completed_mission_ids_on(
        &self,
        profile_id: i32,
        day: NaiveDate,
    ) -> Result<Vec<i32>, DbErr> {
        let completions = entity::prelude::MissionCompletion::find()
            .filter(entity::mission_completion::Column::ProfileId.eq(profile_id))
            .filter(entity::mission_completion::Column::CompletedOn.eq(day))
            .all(self.db)
            .await?;

        Ok(completions.into_iter().map(|c| c.mission_id).collect())
    }
}
