//! Subscription plan factory for creating test plan entities.
//!
//! Defaults are sourced from the subscription plan fixture so that factory-created rows and
//! in-memory fixtures agree.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subscription plans with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::subscription_plan::SubscriptionPlanFactory;
///
/// let plan = SubscriptionPlanFactory::new(&db, plan_type.id)
///     .label_suffix("annual")
///     .price(Decimal::new(9900, 2))
///     .duration_months(12)
///     .build()
///     .await?;
/// ```
pub struct SubscriptionPlanFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::subscription_plan::Model,
}

impl<'a> SubscriptionPlanFactory<'a> {
    /// Creates a new SubscriptionPlanFactory with default values from the fixture.
    ///
    /// The label suffix gets a unique counter so multiple plans can share one plan type.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `plan_type_id` - Plan type the plan belongs to
    pub fn new(db: &'a DatabaseConnection, plan_type_id: Uuid) -> Self {
        let id = next_id();
        let entity = fixture::subscription_plan::entity_builder()
            .plan_type_id(plan_type_id)
            .label_suffix(format!("plan-{}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the label suffix.
    pub fn label_suffix(mut self, label_suffix: impl Into<String>) -> Self {
        self.entity.label_suffix = label_suffix.into();
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.entity.price = price;
        self
    }

    /// Sets the duration in months.
    pub fn duration_months(mut self, duration_months: i32) -> Self {
        self.entity.duration_months = duration_months;
        self
    }

    /// Sets whether the plan is active.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    /// Builds and inserts the subscription plan entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::subscription_plan::Model)` - Created plan entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::subscription_plan::Model, DbErr> {
        let now = Utc::now();
        entity::subscription_plan::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            plan_type_id: ActiveValue::Set(self.entity.plan_type_id),
            label_suffix: ActiveValue::Set(self.entity.label_suffix),
            price: ActiveValue::Set(self.entity.price),
            currency: ActiveValue::Set(self.entity.currency),
            duration_months: ActiveValue::Set(self.entity.duration_months),
            description: ActiveValue::Set(self.entity.description),
            is_default: ActiveValue::Set(self.entity.is_default),
            is_active: ActiveValue::Set(self.entity.is_active),
            offer_type: ActiveValue::Set(self.entity.offer_type),
            offer_value: ActiveValue::Set(self.entity.offer_value),
            tag: ActiveValue::Set(self.entity.tag),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subscription plan with default values for the given plan type.
///
/// Shorthand for `SubscriptionPlanFactory::new(db, plan_type_id).build().await`.
pub async fn create_plan(
    db: &DatabaseConnection,
    plan_type_id: Uuid,
) -> Result<entity::subscription_plan::Model, DbErr> {
    SubscriptionPlanFactory::new(db, plan_type_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::plan_type::create_plan_type;

    #[tokio::test]
    async fn creates_plan_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let plan_type = create_plan_type(db).await?;
        let plan = create_plan(db, plan_type.id).await?;

        assert_eq!(plan.plan_type_id, plan_type.id);
        assert_eq!(plan.price, fixture::subscription_plan::default_price());
        assert_eq!(plan.duration_months, 1);
        assert!(plan.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn fails_for_nonexistent_plan_type() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = create_plan(db, Uuid::new_v4()).await;

        assert!(result.is_err());

        Ok(())
    }
}
