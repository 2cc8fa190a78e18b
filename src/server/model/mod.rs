//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! validated operation inputs from controllers into services.

pub mod academy;
pub mod badge;
pub mod campaign;
pub mod forum;
pub mod mission;
pub mod payment;
pub mod profile;
