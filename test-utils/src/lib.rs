//! Plan Catalog Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the plan
//! catalog service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database-inserting builders for each catalog entity
//! - **fixture**: In-memory entity models that are never persisted
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Feature;
//!
//! #[tokio::test]
//! async fn test_feature_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Feature)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```
//!
//! Tests that depend on constraints only the migrations declare (the composite
//! `(plan_type_id, label_suffix)` unique index) should use `with_migrations()` instead.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
