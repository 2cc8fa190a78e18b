//! HTTP request handlers.
//!
//! Controllers translate between the wire DTOs in [`crate::model`] and the
//! service layer: extract, authenticate via [`AuthGuard`], call the service,
//! convert the result back to a DTO. No business logic lives here.
//!
//! [`AuthGuard`]: crate::server::middleware::auth::AuthGuard

pub mod academy;
pub mod admin;
pub mod auth;
pub mod badge;
pub mod campaign;
pub mod forum;
pub mod mission;
pub mod payment;
pub mod profile;
