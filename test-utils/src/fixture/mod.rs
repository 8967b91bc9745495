//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Test conversion logic without database overhead
//! - **Default values**: Provide consistent defaults for factory builders
//! - **Serialization tests**: Test DTO conversion without persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let plan = fixture::subscription_plan::entity();
//!
//! // Create with custom fields
//! let yearly = fixture::subscription_plan::entity_builder()
//!     .duration_months(12)
//!     .build();
//! ```

pub mod feature;
pub mod plan_type;
pub mod subscription_plan;

pub use feature::entity as feature_entity;
pub use plan_type::entity as plan_type_entity;
pub use subscription_plan::{
    entity as subscription_plan_entity, entity_builder as subscription_plan_entity_builder,
};
