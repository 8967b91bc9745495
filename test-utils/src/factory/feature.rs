//! Feature factory for creating test feature entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test features with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::feature::FeatureFactory;
///
/// let feature = FeatureFactory::new(&db)
///     .label("Priority support")
///     .description(None)
///     .build()
///     .await?;
/// ```
pub struct FeatureFactory<'a> {
    db: &'a DatabaseConnection,
    label: String,
    description: Option<String>,
}

impl<'a> FeatureFactory<'a> {
    /// Creates a new FeatureFactory with default values.
    ///
    /// Defaults:
    /// - label: `"Feature {id}"` where id is auto-incremented
    /// - description: `Some("Description for feature {id}")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            label: format!("Feature {}", id),
            description: Some(format!("Description for feature {}", id)),
        }
    }

    /// Sets the feature label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the feature description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the feature entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::feature::Model)` - Created feature entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::feature::Model, DbErr> {
        entity::feature::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            label: ActiveValue::Set(self.label),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a feature with default values.
///
/// Shorthand for `FeatureFactory::new(db).build().await`.
pub async fn create_feature(db: &DatabaseConnection) -> Result<entity::feature::Model, DbErr> {
    FeatureFactory::new(db).build().await
}
