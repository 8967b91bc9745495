//! Subscription plan data repository for database operations.
//!
//! This module provides the `SubscriptionPlanRepository`. Plans are always returned with
//! their plan type name and attached features, loaded with one plan query and one link
//! query regardless of how many plans are returned.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::plan_feature::PlanFeatureRepository,
    model::subscription_plan::{CreateSubscriptionPlanParam, SubscriptionPlan},
};

/// Repository providing database operations for subscription plans.
pub struct SubscriptionPlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionPlanRepository<'a, C> {
    /// Creates a new SubscriptionPlanRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `SubscriptionPlanRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the plan row.
    ///
    /// Feature links are written separately through `PlanFeatureRepository::create_many`,
    /// normally within the same transaction.
    ///
    /// # Arguments
    /// - `param` - Validated plan fields
    ///
    /// # Returns
    /// - `Ok(Uuid)` - ID of the new plan
    /// - `Err(DbErr)` - Database error, including foreign key violations for an unknown plan
    ///   type and unique violations on `(plan_type_id, label_suffix)`
    pub async fn create(&self, param: &CreateSubscriptionPlanParam) -> Result<Uuid, DbErr> {
        let now = Utc::now();
        let entity = entity::subscription_plan::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            plan_type_id: ActiveValue::Set(param.plan_type_id),
            label_suffix: ActiveValue::Set(param.label_suffix.clone()),
            price: ActiveValue::Set(param.price),
            currency: ActiveValue::Set(param.currency.clone()),
            duration_months: ActiveValue::Set(param.duration_months),
            description: ActiveValue::Set(param.description.clone()),
            is_default: ActiveValue::Set(param.is_default),
            is_active: ActiveValue::Set(param.is_active),
            offer_type: ActiveValue::Set(param.offer_type.clone()),
            offer_value: ActiveValue::Set(param.offer_value),
            tag: ActiveValue::Set(param.tag.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Gets all plans ordered by price, cheapest first.
    ///
    /// Plans with the same price are ordered by label suffix.
    ///
    /// # Returns
    /// - `Ok(Vec<SubscriptionPlan>)` - Plans with plan type name and features
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_all(&self) -> Result<Vec<SubscriptionPlan>, DbErr> {
        let rows = entity::prelude::SubscriptionPlan::find()
            .find_also_related(entity::prelude::PlanType)
            .order_by_asc(entity::subscription_plan::Column::Price)
            .order_by_asc(entity::subscription_plan::Column::LabelSuffix)
            .all(self.db)
            .await?;

        let plan_ids: Vec<Uuid> = rows.iter().map(|(plan, _)| plan.id).collect();
        let mut features = PlanFeatureRepository::new(self.db)
            .get_by_plan_ids(&plan_ids)
            .await?;

        rows.into_iter()
            .map(|(plan, plan_type)| {
                let plan_type = plan_type.ok_or_else(|| missing_plan_type(&plan))?;
                let plan_features = features.remove(&plan.id).unwrap_or_default();
                Ok(SubscriptionPlan::from_entity(plan, plan_type, plan_features))
            })
            .collect()
    }

    /// Gets a single plan by ID.
    ///
    /// # Returns
    /// - `Ok(Some(SubscriptionPlan))` - Plan with plan type name and features
    /// - `Ok(None)` - No plan with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<SubscriptionPlan>, DbErr> {
        let Some((plan, plan_type)) = entity::prelude::SubscriptionPlan::find_by_id(id)
            .find_also_related(entity::prelude::PlanType)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let plan_type = plan_type.ok_or_else(|| missing_plan_type(&plan))?;
        let features = PlanFeatureRepository::new(self.db)
            .get_by_plan_ids(&[plan.id])
            .await?
            .remove(&plan.id)
            .unwrap_or_default();

        Ok(Some(SubscriptionPlan::from_entity(plan, plan_type, features)))
    }

    /// Deletes a plan.
    ///
    /// Feature links are removed by the CASCADE foreign key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows deleted, `0` when the plan did not exist
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::SubscriptionPlan::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts all plans.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::SubscriptionPlan::find()
            .count(self.db)
            .await
    }
}

fn missing_plan_type(plan: &entity::subscription_plan::Model) -> DbErr {
    DbErr::RecordNotFound(format!(
        "Plan type {} for subscription plan {} not found",
        plan.plan_type_id, plan.id
    ))
}
