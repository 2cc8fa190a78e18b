//! Type-safe session management wrappers.
//!
//! Wraps the raw tower-sessions `Session` behind a typed interface so session
//! keys live in one place and handlers cannot typo them.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_PROFILE_ID: &str = "auth:profile";

/// Authentication session management.
///
/// Stores and retrieves the authenticated profile's id and handles session
/// lifecycle operations.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the profile id after a successful login or registration.
    pub async fn set_profile_id(&self, profile_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_PROFILE_ID, profile_id)
            .await?;
        Ok(())
    }

    /// Retrieves the authenticated profile id, if any.
    pub async fn get_profile_id(&self) -> Result<Option<i32>, AppError> {
        let profile_id = self.session.get::<i32>(SESSION_AUTH_PROFILE_ID).await?;
        Ok(profile_id)
    }

    /// Clears all session data during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
