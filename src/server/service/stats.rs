use sea_orm::DatabaseConnection;

use crate::{
    model::stats::CatalogStatsDto,
    server::{
        data::{
            feature::FeatureRepository, plan_type::PlanTypeRepository,
            subscription_plan::SubscriptionPlanRepository,
        },
        error::AppError,
        model::stats::CatalogStats,
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts plans, features and plan types for the dashboard
    pub async fn get(&self) -> Result<CatalogStatsDto, AppError> {
        let stats = CatalogStats {
            total_plans: SubscriptionPlanRepository::new(self.db).count().await?,
            total_features: FeatureRepository::new(self.db).count().await?,
            total_plan_types: PlanTypeRepository::new(self.db).count().await?,
        };

        Ok(stats.into_dto())
    }
}
