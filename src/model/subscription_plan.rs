use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::duration::DurationLabel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionPlanDto {
    pub id: Uuid,
    pub plan_type_id: Uuid,
    pub plan_type_name: String,
    /// Same value as `label_suffix`, kept for clients that read `name`.
    pub name: String,
    pub label_suffix: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub currency: String,
    pub duration_months: i32,
    /// `null` when `duration_months` is not a canonical billing cycle.
    pub duration: Option<DurationLabel>,
    pub description: Option<String>,
    pub is_default: bool,
    pub is_active: bool,
    pub offer_type: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub offer_value: Option<Decimal>,
    pub tag: Option<String>,
    pub features: Vec<PlanFeatureDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A feature as attached to one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanFeatureDto {
    pub id: Uuid,
    pub label: String,
    pub description: Option<String>,
    pub feature_key: Option<String>,
    pub limit_value: Option<String>,
}

/// Body of `POST /api/subscription_plans`.
///
/// Accepts both the current field names and the ones used by earlier clients:
/// `name` for `label_suffix`, and a `duration` label instead of `duration_months`.
/// A non-blank `label_suffix` takes precedence over `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateSubscriptionPlanDto {
    pub plan_type_id: Option<Uuid>,
    pub label_suffix: Option<String>,
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub duration_months: Option<i32>,
    pub duration: Option<DurationLabel>,
    pub description: Option<String>,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
    pub offer_type: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub offer_value: Option<Decimal>,
    pub tag: Option<String>,
    #[serde(default)]
    pub feature_ids: Vec<Uuid>,
    #[serde(default)]
    pub features: Vec<CreatePlanFeatureDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePlanFeatureDto {
    pub feature_id: Uuid,
    pub feature_key: Option<String>,
    pub limit_value: Option<String>,
}
