//! Subscription plan fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating subscription plan entity models without
//! database insertion. Factories use these as their defaults.

use chrono::{TimeZone, Utc};
use entity::subscription_plan;
use rust_decimal::Decimal;
use sea_orm::prelude::Uuid;

/// Default test label suffix.
pub const DEFAULT_LABEL_SUFFIX: &str = "monthly";

/// Default price, 9.99.
pub fn default_price() -> Decimal {
    Decimal::new(999, 2)
}

/// Default currency code.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default duration in months.
pub const DEFAULT_DURATION_MONTHS: i32 = 1;

/// Creates a subscription plan entity model with default values.
///
/// # Default Values
/// - id / plan_type_id: nil UUID
/// - label_suffix: `"monthly"`
/// - price: `9.99` `USD`
/// - duration_months: `1`
/// - is_active: `true`, is_default: `false`
/// - every optional offer field: `None`
///
/// # Returns
/// - `subscription_plan::Model` - In-memory subscription plan entity
pub fn entity() -> subscription_plan::Model {
    entity_builder().build()
}

/// Creates a subscription plan entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let plan = fixture::subscription_plan::entity_builder()
///     .label_suffix("annual")
///     .duration_months(12)
///     .build();
/// ```
pub fn entity_builder() -> SubscriptionPlanEntityBuilder {
    SubscriptionPlanEntityBuilder::default()
}

/// Builder for creating customized subscription plan entity models.
pub struct SubscriptionPlanEntityBuilder {
    model: subscription_plan::Model,
}

impl Default for SubscriptionPlanEntityBuilder {
    fn default() -> Self {
        let timestamp = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        Self {
            model: subscription_plan::Model {
                id: Uuid::nil(),
                plan_type_id: Uuid::nil(),
                label_suffix: DEFAULT_LABEL_SUFFIX.to_string(),
                price: default_price(),
                currency: DEFAULT_CURRENCY.to_string(),
                duration_months: DEFAULT_DURATION_MONTHS,
                description: None,
                is_default: false,
                is_active: true,
                offer_type: None,
                offer_value: None,
                tag: None,
                created_at: timestamp,
                updated_at: timestamp,
            },
        }
    }
}

impl SubscriptionPlanEntityBuilder {
    /// Sets the plan ID.
    pub fn id(mut self, id: Uuid) -> Self {
        self.model.id = id;
        self
    }

    /// Sets the owning plan type ID.
    pub fn plan_type_id(mut self, plan_type_id: Uuid) -> Self {
        self.model.plan_type_id = plan_type_id;
        self
    }

    /// Sets the label suffix, unique per plan type.
    pub fn label_suffix(mut self, label_suffix: impl Into<String>) -> Self {
        self.model.label_suffix = label_suffix.into();
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.model.price = price;
        self
    }

    /// Sets the currency code.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.model.currency = currency.into();
        self
    }

    /// Sets the billing duration in months (0 for lifetime).
    pub fn duration_months(mut self, duration_months: i32) -> Self {
        self.model.duration_months = duration_months;
        self
    }

    /// Sets whether the plan is offered.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.model.is_active = is_active;
        self
    }

    /// Sets the promotional tag.
    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.model.tag = tag;
        self
    }

    /// Returns the configured entity model.
    pub fn build(self) -> subscription_plan::Model {
        self.model
    }
}
