//! API data transfer objects.
//!
//! Serde-serializable request and response shapes for every HTTP boundary.
//! Domain models convert into these at the controller layer; request DTOs are
//! validated and converted into operation params before reaching services.

pub mod academy;
pub mod api;
pub mod badge;
pub mod campaign;
pub mod forum;
pub mod mission;
pub mod payment;
pub mod profile;
