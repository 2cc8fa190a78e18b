use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::profile::ProfileRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    Admin,
}

/// Guard that resolves the session to a profile and checks permissions.
///
/// Controllers call `require` at the top of every authenticated handler; the
/// returned entity is the authoritative profile row for the request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::profile::Model, AppError> {
        let profile_repo = ProfileRepository::new(self.db);

        let Some(profile_id) = AuthSession::new(self.session).get_profile_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(profile) = profile_repo.find_by_id(profile_id).await? else {
            return Err(AuthError::UserNotInDatabase(profile_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !profile.admin {
                        return Err(AuthError::AccessDenied(
                            profile_id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(profile)
    }
}
