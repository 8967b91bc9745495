//! Subscription plan domain models and parameters.
//!
//! Besides the plan model itself this module owns request normalization for plan creation:
//! the field aliases accepted from earlier clients, the duration label/month conversion,
//! price bounds, and merging of the two ways a request can list attached features.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    model::{
        duration::DurationLabel,
        subscription_plan::{
            CreatePlanFeatureDto, CreateSubscriptionPlanDto, PlanFeatureDto, SubscriptionPlanDto,
        },
    },
    server::{error::AppError, model::normalize_optional},
};

/// Currency used when a create request does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Largest amount a `numeric(10, 2)` column holds.
pub fn max_amount() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

/// A subscription plan with its plan type name and attached features.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPlan {
    pub id: Uuid,
    pub plan_type_id: Uuid,
    pub plan_type_name: String,
    pub label_suffix: String,
    pub price: Decimal,
    pub currency: String,
    pub duration_months: i32,
    pub description: Option<String>,
    pub is_default: bool,
    pub is_active: bool,
    pub offer_type: Option<String>,
    pub offer_value: Option<Decimal>,
    pub tag: Option<String>,
    pub features: Vec<PlanFeature>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubscriptionPlan {
    /// Assembles the domain model from the plan row, its plan type and its feature links.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(
        entity: entity::subscription_plan::Model,
        plan_type: entity::plan_type::Model,
        features: Vec<PlanFeature>,
    ) -> Self {
        Self {
            id: entity.id,
            plan_type_id: entity.plan_type_id,
            plan_type_name: plan_type.name,
            label_suffix: entity.label_suffix,
            price: entity.price,
            currency: entity.currency,
            duration_months: entity.duration_months,
            description: entity.description,
            is_default: entity.is_default,
            is_active: entity.is_active,
            offer_type: entity.offer_type,
            offer_value: entity.offer_value,
            tag: entity.tag,
            features,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Label for the stored month count, `None` for non-canonical cycles.
    pub fn duration(&self) -> Option<DurationLabel> {
        DurationLabel::from_months(self.duration_months)
    }

    pub fn into_dto(self) -> SubscriptionPlanDto {
        let duration = self.duration();
        SubscriptionPlanDto {
            id: self.id,
            plan_type_id: self.plan_type_id,
            plan_type_name: self.plan_type_name,
            name: self.label_suffix.clone(),
            label_suffix: self.label_suffix,
            price: self.price,
            currency: self.currency,
            duration_months: self.duration_months,
            duration,
            description: self.description,
            is_default: self.is_default,
            is_active: self.is_active,
            offer_type: self.offer_type,
            offer_value: self.offer_value,
            tag: self.tag,
            features: self.features.into_iter().map(PlanFeature::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A feature attached to a plan, with the per-plan key and limit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanFeature {
    pub feature_id: Uuid,
    pub label: String,
    pub description: Option<String>,
    pub feature_key: Option<String>,
    pub limit_value: Option<String>,
}

impl PlanFeature {
    pub fn from_entity(link: entity::plan_feature::Model, feature: entity::feature::Model) -> Self {
        Self {
            feature_id: link.feature_id,
            label: feature.label,
            description: feature.description,
            feature_key: link.feature_key,
            limit_value: link.limit_value,
        }
    }

    pub fn into_dto(self) -> PlanFeatureDto {
        PlanFeatureDto {
            id: self.feature_id,
            label: self.label,
            description: self.description,
            feature_key: self.feature_key,
            limit_value: self.limit_value,
        }
    }
}

/// Validated input for creating a plan together with its feature links.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionPlanParam {
    pub plan_type_id: Uuid,
    pub label_suffix: String,
    pub price: Decimal,
    pub currency: String,
    pub duration_months: i32,
    pub description: Option<String>,
    pub is_default: bool,
    pub is_active: bool,
    pub offer_type: Option<String>,
    pub offer_value: Option<Decimal>,
    pub tag: Option<String>,
    /// Distinct features to link, in request order.
    pub features: Vec<CreatePlanFeatureParam>,
}

/// One feature link to write alongside a new plan.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlanFeatureParam {
    pub feature_id: Uuid,
    pub feature_key: Option<String>,
    pub limit_value: Option<String>,
}

impl CreateSubscriptionPlanParam {
    /// Validates and normalizes a create request.
    ///
    /// # Returns
    /// - `Ok(CreateSubscriptionPlanParam)` - Normalized parameters
    /// - `Err(AppError::BadRequest)` - A required field is missing or a value is out of range
    pub fn from_dto(dto: CreateSubscriptionPlanDto) -> Result<Self, AppError> {
        let label_suffix = normalize_optional(dto.label_suffix)
            .or_else(|| normalize_optional(dto.name))
            .ok_or_else(|| AppError::BadRequest("Plan name is required.".to_string()))?;

        let plan_type_id = dto
            .plan_type_id
            .ok_or_else(|| AppError::BadRequest("plan_type_id is required.".to_string()))?;

        let duration_months = resolve_duration_months(dto.duration_months, dto.duration)?;

        let price = dto
            .price
            .ok_or_else(|| AppError::BadRequest("Price must be a positive number.".to_string()))
            .and_then(|price| validate_amount(price, "Price"))?;

        let offer_value = dto
            .offer_value
            .map(|value| validate_amount(value, "offer_value"))
            .transpose()?;

        Ok(Self {
            plan_type_id,
            label_suffix,
            price,
            currency: normalize_currency(dto.currency)?,
            duration_months,
            description: normalize_optional(dto.description),
            is_default: dto.is_default.unwrap_or(false),
            is_active: dto.is_active.unwrap_or(true),
            offer_type: normalize_optional(dto.offer_type),
            offer_value,
            tag: normalize_optional(dto.tag),
            features: merge_features(dto.feature_ids, dto.features),
        })
    }
}

/// Resolves the stored month count from either representation of a plan's duration.
///
/// An explicit `duration_months` wins over the `duration` label.
///
/// # Returns
/// - `Ok(months)` - Non-negative month count, `0` for lifetime
/// - `Err(AppError::BadRequest)` - Neither field given, or a negative month count
pub fn resolve_duration_months(
    duration_months: Option<i32>,
    duration: Option<DurationLabel>,
) -> Result<i32, AppError> {
    match (duration_months, duration) {
        (Some(months), _) if months < 0 => Err(AppError::BadRequest(
            "duration_months must not be negative.".to_string(),
        )),
        (Some(months), _) => Ok(months),
        (None, Some(label)) => Ok(label.months()),
        (None, None) => Err(AppError::BadRequest("duration is required.".to_string())),
    }
}

fn validate_amount(amount: Decimal, field: &str) -> Result<Decimal, AppError> {
    if amount < Decimal::ZERO {
        return Err(AppError::BadRequest(format!(
            "{} must be a positive number.",
            field
        )));
    }

    let amount = amount.round_dp(2);
    if amount > max_amount() {
        return Err(AppError::BadRequest(format!(
            "{} must not exceed {}.",
            field,
            max_amount()
        )));
    }

    Ok(amount)
}

fn normalize_currency(currency: Option<String>) -> Result<String, AppError> {
    let Some(currency) = normalize_optional(currency) else {
        return Ok(DEFAULT_CURRENCY.to_string());
    };

    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(
            "currency must be a 3-letter currency code.".to_string(),
        ));
    }

    Ok(currency.to_ascii_uppercase())
}

/// Merges plain `feature_ids` with detailed `features` entries.
///
/// Each feature appears once, at the position of its first mention. A detailed entry
/// replaces a plain id or an earlier detailed entry for the same feature.
fn merge_features(
    feature_ids: Vec<Uuid>,
    features: Vec<CreatePlanFeatureDto>,
) -> Vec<CreatePlanFeatureParam> {
    let mut merged: Vec<CreatePlanFeatureParam> = Vec::new();
    let mut positions: HashMap<Uuid, usize> = HashMap::new();

    for feature_id in feature_ids {
        if positions.contains_key(&feature_id) {
            continue;
        }
        positions.insert(feature_id, merged.len());
        merged.push(CreatePlanFeatureParam {
            feature_id,
            feature_key: None,
            limit_value: None,
        });
    }

    for feature in features {
        let param = CreatePlanFeatureParam {
            feature_id: feature.feature_id,
            feature_key: normalize_optional(feature.feature_key),
            limit_value: normalize_optional(feature.limit_value),
        };
        match positions.get(&feature.feature_id) {
            Some(&index) => merged[index] = param,
            None => {
                positions.insert(feature.feature_id, merged.len());
                merged.push(param);
            }
        }
    }

    merged
}
