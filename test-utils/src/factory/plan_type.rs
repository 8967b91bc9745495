//! Plan type factory for creating test plan type entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test plan types with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::plan_type::PlanTypeFactory;
///
/// let plan_type = PlanTypeFactory::new(&db).name("Enterprise").build().await?;
/// ```
pub struct PlanTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> PlanTypeFactory<'a> {
    /// Creates a new PlanTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Plan Type {id}"` where id is auto-incremented
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Plan Type {}", id),
            description: None,
        }
    }

    /// Sets the plan type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the plan type description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the plan type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::plan_type::Model)` - Created plan type entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::plan_type::Model, DbErr> {
        entity::plan_type::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a plan type with default values.
///
/// Shorthand for `PlanTypeFactory::new(db).build().await`.
pub async fn create_plan_type(db: &DatabaseConnection) -> Result<entity::plan_type::Model, DbErr> {
    PlanTypeFactory::new(db).build().await
}
