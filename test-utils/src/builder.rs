use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables (or the full migration set),
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{PlanType, SubscriptionPlan};
///
/// let test = TestBuilder::new()
///     .with_table(PlanType)
///     .with_table(SubscriptionPlan)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether to run the application's migrations instead of entity-derived tables.
    migrations: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrations: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Tables should
    /// be added in dependency order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every catalog table in dependency order.
    ///
    /// - Feature
    /// - PlanType
    /// - SubscriptionPlan
    /// - PlanFeature
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Feature)
            .with_table(PlanType)
            .with_table(SubscriptionPlan)
            .with_table(PlanFeature)
    }

    /// Runs the application's migrations on build instead of entity-derived tables.
    ///
    /// Use this when a test depends on schema details that only exist in the migrations,
    /// such as the composite unique index on `(plan_type_id, label_suffix)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates an in-memory SQLite database connection and either runs all migrations or
    /// executes the CREATE TABLE statements added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrations {
            setup.with_migrations().await?;
        }
        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
