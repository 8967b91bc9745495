use crate::server::{
    data::plan_feature::PlanFeatureRepository,
    error::is_constraint_violation,
    model::subscription_plan::CreatePlanFeatureParam,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create_many;
mod get_by_plan_ids;

fn link(feature_id: Uuid) -> CreatePlanFeatureParam {
    CreatePlanFeatureParam {
        feature_id,
        feature_key: None,
        limit_value: None,
    }
}
