//! Plan type fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::plan_type;
use sea_orm::prelude::Uuid;

/// Default test plan type name.
pub const DEFAULT_NAME: &str = "Pro";

/// Creates a plan type entity model with default values.
///
/// # Returns
/// - `plan_type::Model` - In-memory plan type entity
pub fn entity() -> plan_type::Model {
    plan_type::Model {
        id: Uuid::nil(),
        name: DEFAULT_NAME.to_string(),
        description: None,
        created_at: Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap(),
    }
}
