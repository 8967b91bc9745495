use crate::server::{
    data::{plan_feature::PlanFeatureRepository, subscription_plan::SubscriptionPlanRepository},
    error::is_constraint_violation,
    model::subscription_plan::{CreatePlanFeatureParam, CreateSubscriptionPlanParam},
};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod count;
mod create;
mod delete;
mod get_all;
mod get_by_id;

fn plan_param(plan_type_id: Uuid, label_suffix: &str) -> CreateSubscriptionPlanParam {
    CreateSubscriptionPlanParam {
        plan_type_id,
        label_suffix: label_suffix.to_string(),
        price: Decimal::new(10, 0),
        currency: "USD".to_string(),
        duration_months: 1,
        description: None,
        is_default: false,
        is_active: true,
        offer_type: None,
        offer_value: None,
        tag: None,
        features: Vec::new(),
    }
}
