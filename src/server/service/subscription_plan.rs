use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::subscription_plan::SubscriptionPlanDto,
    server::{
        data::{
            feature::FeatureRepository, plan_feature::PlanFeatureRepository,
            plan_type::PlanTypeRepository, subscription_plan::SubscriptionPlanRepository,
        },
        error::AppError,
        model::subscription_plan::CreateSubscriptionPlanParam,
    },
};

const UNKNOWN_PLAN_TYPE: &str = "Plan type does not exist.";
const UNKNOWN_FEATURE: &str = "One or more features do not exist.";
const DUPLICATE_PLAN: &str = "A plan with this name already exists for the plan type.";

pub struct SubscriptionPlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionPlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all plans with plan type name and features, cheapest first
    pub async fn get_all(&self) -> Result<Vec<SubscriptionPlanDto>, AppError> {
        let plans = SubscriptionPlanRepository::new(self.db).get_all().await?;

        Ok(plans.into_iter().map(|p| p.into_dto()).collect())
    }

    /// Gets a single plan
    pub async fn get_by_id(&self, id: Uuid) -> Result<SubscriptionPlanDto, AppError> {
        let plan = SubscriptionPlanRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subscription plan not found.".to_string()))?;

        Ok(plan.into_dto())
    }

    /// Creates a plan and links its features in one transaction
    ///
    /// Nothing is written unless the plan row and every feature link succeed. Returning
    /// early drops the transaction, which rolls it back.
    pub async fn create(
        &self,
        param: CreateSubscriptionPlanParam,
    ) -> Result<SubscriptionPlanDto, AppError> {
        let txn = self.db.begin().await?;

        if PlanTypeRepository::new(&txn)
            .find_by_id(param.plan_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::Conflict(UNKNOWN_PLAN_TYPE.to_string()));
        }

        let feature_ids: Vec<Uuid> = param.features.iter().map(|f| f.feature_id).collect();
        let existing = FeatureRepository::new(&txn)
            .count_existing(&feature_ids)
            .await?;
        if existing != feature_ids.len() as u64 {
            return Err(AppError::Conflict(UNKNOWN_FEATURE.to_string()));
        }

        let plan_repo = SubscriptionPlanRepository::new(&txn);
        let plan_id = plan_repo
            .create(&param)
            .await
            .map_err(|e| AppError::from_constraint(e, DUPLICATE_PLAN))?;

        PlanFeatureRepository::new(&txn)
            .create_many(plan_id, &param.features)
            .await
            .map_err(|e| AppError::from_constraint(e, UNKNOWN_FEATURE))?;

        let plan = plan_repo.get_by_id(plan_id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Created plan {} could not be read back", plan_id))
        })?;

        txn.commit().await?;

        tracing::info!(
            "Created subscription plan {} ({}) with {} feature(s)",
            plan.label_suffix,
            plan.id,
            plan.features.len()
        );

        Ok(plan.into_dto())
    }

    /// Deletes a plan together with its feature links
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = SubscriptionPlanRepository::new(self.db).delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(
                "Subscription plan not found.".to_string(),
            ));
        }

        tracing::info!("Deleted subscription plan {}", id);

        Ok(())
    }
}
