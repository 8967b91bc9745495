use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogStatsDto {
    pub total_plans: u64,
    pub total_features: u64,
    pub total_plan_types: u64,
}
