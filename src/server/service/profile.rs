//! Profile service: self-service profile reads and the admin member surface.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository,
    error::{auth::AuthError, AppError},
    model::profile::{AdminUpdateProfileParam, PaginatedProfiles, Profile},
};

pub struct ProfileService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_profile(&self, profile_id: i32) -> Result<Profile, AppError> {
        let profile = ProfileRepository::new(self.db)
            .find_by_id(profile_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(profile_id))?;

        Ok(Profile::from_entity(profile))
    }

    pub async fn update_name(&self, profile_id: i32, name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        ProfileRepository::new(self.db)
            .update_name(profile_id, name)
            .await?;
        Ok(())
    }

    /// Admin listing of all members, alphabetical by name.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProfiles, AppError> {
        let (profiles, total) = ProfileRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = total.div_ceil(per_page.max(1));

        Ok(PaginatedProfiles {
            profiles,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Admin partial update of a member's profile.
    ///
    /// Only the fields present in the request change; the subscription status
    /// has already been validated into [`SubscriptionStatus`] by the
    /// controller.
    pub async fn admin_update(&self, param: AdminUpdateProfileParam) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        if repo.find_by_id(param.profile_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Profile {} not found",
                param.profile_id
            )));
        }

        if let Some(name) = &param.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::BadRequest("Name must not be empty".to_string()));
            }
            repo.update_name(param.profile_id, name).await?;
        }

        if let Some(status) = param.subscription_status {
            repo.set_subscription_status(param.profile_id, status).await?;
        }

        if let Some(admin) = param.admin {
            repo.set_admin(param.profile_id, admin).await?;
        }

        tracing::info!(profile_id = param.profile_id, "admin updated profile");

        let updated = repo
            .find_by_id(param.profile_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(param.profile_id))?;

        Ok(Profile::from_entity(updated))
    }
}
