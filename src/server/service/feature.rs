use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::feature::FeatureDto,
    server::{
        data::feature::FeatureRepository, error::AppError, model::feature::CreateFeatureParam,
    },
};

pub struct FeatureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeatureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all features, newest first
    pub async fn get_all(&self) -> Result<Vec<FeatureDto>, AppError> {
        let features = FeatureRepository::new(self.db).get_all().await?;

        Ok(features.into_iter().map(|f| f.into_dto()).collect())
    }

    /// Creates a feature, rejecting duplicate labels with a conflict
    pub async fn create(&self, param: CreateFeatureParam) -> Result<FeatureDto, AppError> {
        let feature = FeatureRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::from_constraint(e, "A feature with this label already exists."))?;

        tracing::info!("Created feature {} ({})", feature.label, feature.id);

        Ok(feature.into_dto())
    }

    /// Deletes a feature that no plan uses
    ///
    /// Returns `NotFound` for an unknown ID and `Conflict` while the feature is still
    /// attached to any plan. The lookup, usage count and delete share one transaction with
    /// the feature row locked, so a plan cannot link the feature in between.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = FeatureRepository::new(&txn);

        if repo.find_by_id_for_update(id).await?.is_none() {
            return Err(AppError::NotFound("Feature not found.".to_string()));
        }

        let plan_count = repo.plan_count(id).await?;
        if plan_count > 0 {
            return Err(AppError::Conflict(format!(
                "Feature is attached to {} plan(s) and cannot be deleted.",
                plan_count
            )));
        }

        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound("Feature not found.".to_string()));
        }

        txn.commit().await?;

        tracing::info!("Deleted feature {}", id);

        Ok(())
    }
}
