//! Feature data repository for database operations.
//!
//! This module provides the `FeatureRepository` for managing feature records. It handles
//! creation, listing, lookups, usage counts and deletion with conversion between entity
//! models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::feature::{CreateFeatureParam, Feature};

/// Repository providing database operations for features.
pub struct FeatureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeatureRepository<'a, C> {
    /// Creates a new FeatureRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `FeatureRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new feature.
    ///
    /// Generates the ID and creation timestamp before inserting.
    ///
    /// # Arguments
    /// - `param` - Validated label and optional description
    ///
    /// # Returns
    /// - `Ok(Feature)` - The created feature
    /// - `Err(DbErr)` - Database error, including a unique violation on `label`
    pub async fn create(&self, param: CreateFeatureParam) -> Result<Feature, DbErr> {
        let entity = entity::feature::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            label: ActiveValue::Set(param.label),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Feature::from_entity(entity))
    }

    /// Gets all features, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Feature>)` - Features ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Feature>, DbErr> {
        let entities = entity::prelude::Feature::find()
            .order_by_desc(entity::feature::Column::CreatedAt)
            .order_by_asc(entity::feature::Column::Label)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Feature::from_entity).collect())
    }

    /// Finds a feature by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Feature))` - Feature found
    /// - `Ok(None)` - No feature with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Feature>, DbErr> {
        let entity = entity::prelude::Feature::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Feature::from_entity))
    }

    /// Finds a feature and locks its row until the surrounding transaction ends.
    ///
    /// Emits `SELECT ... FOR UPDATE` on Postgres. SQLite has no row locks and serializes
    /// writers, so the lock clause is omitted there.
    pub async fn find_by_id_for_update(&self, id: Uuid) -> Result<Option<Feature>, DbErr> {
        let entity = entity::prelude::Feature::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(entity.map(Feature::from_entity))
    }

    /// Finds a feature by its exact label.
    ///
    /// # Returns
    /// - `Ok(Some(Feature))` - Feature found
    /// - `Ok(None)` - No feature with that label
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_label(&self, label: &str) -> Result<Option<Feature>, DbErr> {
        let entity = entity::prelude::Feature::find()
            .filter(entity::feature::Column::Label.eq(label))
            .one(self.db)
            .await?;

        Ok(entity.map(Feature::from_entity))
    }

    /// Counts how many of the given feature IDs exist.
    ///
    /// Callers pass distinct IDs; the result equals `ids.len()` only when every one exists.
    ///
    /// # Arguments
    /// - `ids` - Distinct feature IDs to look up
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of matching features
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_existing(&self, ids: &[Uuid]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Feature::find()
            .filter(entity::feature::Column::Id.is_in(ids.iter().copied()))
            .count(self.db)
            .await
    }

    /// Gets the number of plans a feature is attached to.
    ///
    /// Used to reject deletion of features that are still in use.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of plan links referencing the feature
    /// - `Err(DbErr)` - Database error during count query
    pub async fn plan_count(&self, feature_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::PlanFeature::find()
            .filter(entity::plan_feature::Column::FeatureId.eq(feature_id))
            .count(self.db)
            .await
    }

    /// Deletes a feature.
    ///
    /// Plan links referencing the feature are removed by the CASCADE foreign key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows deleted, `0` when the feature did not exist
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Feature::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts all features.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Feature::find().count(self.db).await
    }
}
