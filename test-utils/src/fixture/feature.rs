//! Feature fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::feature;
use sea_orm::prelude::Uuid;

/// Default test feature label.
pub const DEFAULT_LABEL: &str = "Unlimited projects";

/// Default test feature description.
pub const DEFAULT_DESCRIPTION: &str = "Create and manage an unlimited number of projects.";

/// Creates a feature entity model with default values.
///
/// # Returns
/// - `feature::Model` - In-memory feature entity
pub fn entity() -> feature::Model {
    feature::Model {
        id: Uuid::nil(),
        label: DEFAULT_LABEL.to_string(),
        description: Some(DEFAULT_DESCRIPTION.to_string()),
        created_at: Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap(),
    }
}
