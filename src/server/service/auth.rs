//! Authentication service: registration, login, and password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{login_log::LoginLogRepository, profile::ProfileRepository},
    error::{auth::AuthError, AppError},
    model::profile::{CreateProfileParam, Profile},
};

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

/// Parameters for registering a new member.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Parameters for a login attempt, including request metadata for the audit
/// log.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
    pub ip: String,
    pub user_agent: String,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new member profile.
    ///
    /// The password is argon2-hashed before it reaches the repository. The
    /// first profile ever registered becomes the bootstrap admin, so a fresh
    /// deployment is administrable without manual database edits.
    pub async fn register(&self, param: RegisterParam) -> Result<Profile, AppError> {
        let profile_repo = ProfileRepository::new(self.db);

        if profile_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&param.password)?;
        let is_admin = !profile_repo.admin_exists().await?;

        let profile = profile_repo
            .create(CreateProfileParam {
                email: param.email,
                name: param.name,
                password_hash,
                is_admin,
            })
            .await?;

        tracing::info!(profile_id = profile.id, admin = is_admin, "registered profile");

        Ok(profile)
    }

    /// Verifies credentials and records a login log row.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response does not reveal which one failed.
    pub async fn login(&self, param: LoginParam) -> Result<Profile, AppError> {
        let profile_repo = ProfileRepository::new(self.db);

        let Some(profile) = profile_repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &profile.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        LoginLogRepository::new(self.db)
            .record(profile.id, &param.ip, &param.user_agent)
            .await?;

        Ok(Profile::from_entity(profile))
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::InternalError(format!("Stored password hash is invalid: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }
}
