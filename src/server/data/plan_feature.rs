//! Plan/feature link repository.
//!
//! Links are never exposed on their own; they are written alongside a new plan and read back
//! in bulk when plans are listed.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::subscription_plan::{CreatePlanFeatureParam, PlanFeature};

/// Repository providing database operations for the `plan_features` join table.
pub struct PlanFeatureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanFeatureRepository<'a, C> {
    /// Creates a new PlanFeatureRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `PlanFeatureRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a set of features to a plan in a single insert.
    ///
    /// Does nothing for an empty slice. Feature IDs must be distinct, otherwise the
    /// composite primary key rejects the insert.
    ///
    /// # Arguments
    /// - `plan_id` - Plan receiving the features
    /// - `features` - Features to link with their optional key and limit
    ///
    /// # Returns
    /// - `Ok(())` - All links inserted
    /// - `Err(DbErr)` - Database error, including a foreign key violation for unknown IDs
    pub async fn create_many(
        &self,
        plan_id: Uuid,
        features: &[CreatePlanFeatureParam],
    ) -> Result<(), DbErr> {
        if features.is_empty() {
            return Ok(());
        }

        let links = features
            .iter()
            .map(|feature| entity::plan_feature::ActiveModel {
                plan_id: ActiveValue::Set(plan_id),
                feature_id: ActiveValue::Set(feature.feature_id),
                feature_key: ActiveValue::Set(feature.feature_key.clone()),
                limit_value: ActiveValue::Set(feature.limit_value.clone()),
            });

        entity::prelude::PlanFeature::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Gets the features attached to each of the given plans.
    ///
    /// Runs one joined query for all plans. Features within a plan are ordered by label.
    ///
    /// # Arguments
    /// - `plan_ids` - Plans to load features for
    ///
    /// # Returns
    /// - `Ok(HashMap<Uuid, Vec<PlanFeature>>)` - Features keyed by plan ID; plans without
    ///   features have no entry
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_plan_ids(
        &self,
        plan_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<PlanFeature>>, DbErr> {
        let mut by_plan: HashMap<Uuid, Vec<PlanFeature>> = HashMap::new();
        if plan_ids.is_empty() {
            return Ok(by_plan);
        }

        let rows = entity::prelude::PlanFeature::find()
            .filter(entity::plan_feature::Column::PlanId.is_in(plan_ids.iter().copied()))
            .find_also_related(entity::prelude::Feature)
            .order_by_asc(entity::feature::Column::Label)
            .all(self.db)
            .await?;

        for (link, feature) in rows {
            // Inner rows always resolve; the FK guarantees the feature exists.
            let Some(feature) = feature else {
                continue;
            };
            by_plan
                .entry(link.plan_id)
                .or_default()
                .push(PlanFeature::from_entity(link, feature));
        }

        Ok(by_plan)
    }
}
