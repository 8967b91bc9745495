//! Plan feature factory for linking features to subscription plans.

use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating plan/feature links with optional limits.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::plan_feature::PlanFeatureFactory;
///
/// PlanFeatureFactory::new(&db, plan.id, feature.id)
///     .feature_key("projects")
///     .limit_value("10")
///     .build()
///     .await?;
/// ```
pub struct PlanFeatureFactory<'a> {
    db: &'a DatabaseConnection,
    plan_id: Uuid,
    feature_id: Uuid,
    feature_key: Option<String>,
    limit_value: Option<String>,
}

impl<'a> PlanFeatureFactory<'a> {
    /// Creates a new link factory with no key or limit.
    pub fn new(db: &'a DatabaseConnection, plan_id: Uuid, feature_id: Uuid) -> Self {
        Self {
            db,
            plan_id,
            feature_id,
            feature_key: None,
            limit_value: None,
        }
    }

    /// Sets the machine-readable key of the feature within the plan.
    pub fn feature_key(mut self, feature_key: impl Into<String>) -> Self {
        self.feature_key = Some(feature_key.into());
        self
    }

    /// Sets the per-plan limit.
    pub fn limit_value(mut self, limit_value: impl Into<String>) -> Self {
        self.limit_value = Some(limit_value.into());
        self
    }

    /// Builds and inserts the link into the database.
    pub async fn build(self) -> Result<entity::plan_feature::Model, DbErr> {
        entity::plan_feature::ActiveModel {
            plan_id: ActiveValue::Set(self.plan_id),
            feature_id: ActiveValue::Set(self.feature_id),
            feature_key: ActiveValue::Set(self.feature_key),
            limit_value: ActiveValue::Set(self.limit_value),
        }
        .insert(self.db)
        .await
    }
}

/// Attaches a feature to a plan without key or limit.
pub async fn attach_feature(
    db: &DatabaseConnection,
    plan_id: Uuid,
    feature_id: Uuid,
) -> Result<entity::plan_feature::Model, DbErr> {
    PlanFeatureFactory::new(db, plan_id, feature_id).build().await
}
