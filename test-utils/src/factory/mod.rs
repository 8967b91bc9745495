//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take care of unique labels and names so several
//! rows can be created in one test without tripping unique constraints.
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
//!     let feature = factory::create_feature(&db).await?;
//!     let plan_type = factory::create_plan_type(&db).await?;
//!
//!     // Create with all dependencies
//!     let (plan_type, plan) = factory::helpers::create_plan_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let plan = factory::subscription_plan::SubscriptionPlanFactory::new(&db, plan_type.id)
//!     .label_suffix("annual")
//!     .duration_months(12)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `feature` - Create feature entities
//! - `plan_type` - Create plan type entities
//! - `subscription_plan` - Create subscription plan entities
//! - `plan_feature` - Attach features to plans
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod feature;
pub mod helpers;
pub mod plan_feature;
pub mod plan_type;
pub mod subscription_plan;

pub use feature::create_feature;
pub use plan_feature::attach_feature;
pub use plan_type::create_plan_type;
pub use subscription_plan::create_plan;
