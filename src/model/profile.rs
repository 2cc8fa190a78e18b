use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Member profile as exposed over the API. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub admin: bool,
    pub subscription_status: String,
    pub xp: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedProfilesDto {
    pub profiles: Vec<ProfileDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterDto {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Request body for a member updating their own profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileDto {
    pub name: String,
}

/// Request body for the admin profile update endpoint.
///
/// Absent fields leave the current value untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUpdateProfileDto {
    pub name: Option<String>,
    pub subscription_status: Option<String>,
    pub admin: Option<bool>,
}
