//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign key dependencies so tests stay concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let profile = factory::profile::create_profile(&db).await?;
//!     let module = factory::academy_module::create_module(&db).await?;
//!
//!     // Create a module with published lessons in one call
//!     let (module, lessons) =
//!         factory::helpers::create_module_with_lessons(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let profile = factory::profile::ProfileFactory::new(&db)
//!     .email("admin@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod academy_lesson;
pub mod academy_module;
pub mod badge;
pub mod forum_post;
pub mod helpers;
pub mod mission;
pub mod profile;

// Re-export commonly used factory functions for concise usage
pub use academy_lesson::create_lesson;
pub use academy_module::create_module;
pub use badge::create_badge;
pub use forum_post::create_post;
pub use mission::create_mission;
pub use profile::create_profile;
