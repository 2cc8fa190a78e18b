//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and return domain or entity models to the service layer.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same
//! methods run against the pooled connection or inside a transaction; services
//! that perform multi-step writes (badge award, mission toggle) construct
//! repositories over the transaction handle.

pub mod academy_lesson;
pub mod academy_module;
pub mod badge;
pub mod forum_post;
pub mod lesson_completion;
pub mod login_log;
pub mod maintenance_run;
pub mod mission;
pub mod payment;
pub mod profile;

#[cfg(test)]
mod test;
