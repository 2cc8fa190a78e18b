//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls and external providers
//! - **Domain Models**: Working with domain models rather than DTOs
//! - **Transaction Management**: Multi-step writes (badge award, mission
//!   toggle) run inside a single database transaction so partial failure
//!   cannot leave inconsistent state

pub mod academy;
pub mod auth;
pub mod badge;
pub mod email;
pub mod facebook;
pub mod forum;
pub mod maintenance;
pub mod mission;
pub mod mollie;
pub mod profile;
pub mod stripe;
