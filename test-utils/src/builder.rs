use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables in dependency order, then
/// call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Profile, Badge};
///
/// let test = TestBuilder::new()
///     .with_table(Profile)
///     .with_table(Badge)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed during database setup, in the order
    /// they were added.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after their referenced
    /// tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for academy and badge operations:
    /// Profile, AcademyModule, AcademyLesson, LessonCompletion, Badge,
    /// UserBadge.
    pub fn with_academy_tables(self) -> Self {
        self.with_table(Profile)
            .with_table(AcademyModule)
            .with_table(AcademyLesson)
            .with_table(LessonCompletion)
            .with_table(Badge)
            .with_table(UserBadge)
    }

    /// Adds the tables for mission operations: Profile, Mission,
    /// MissionCompletion.
    pub fn with_mission_tables(self) -> Self {
        self.with_table(Profile)
            .with_table(Mission)
            .with_table(MissionCompletion)
    }

    /// Adds the tables for forum operations: Profile, ForumPost.
    pub fn with_forum_tables(self) -> Self {
        self.with_table(Profile).with_table(ForumPost)
    }

    /// Adds the tables for payment operations: Profile, Payment.
    pub fn with_payment_tables(self) -> Self {
        self.with_table(Profile).with_table(Payment)
    }

    /// Builds and initializes the test context with the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
