//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence and usage checks before deletes
//! - **Error Translation**: Turning constraint violations into resource-specific conflicts
//! - **Transaction Management**: Writing a plan and its feature links atomically

pub mod feature;
pub mod plan_type;
pub mod stats;
pub mod subscription_plan;
