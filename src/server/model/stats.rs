use crate::model::stats::CatalogStatsDto;

/// Row counts across the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub total_plans: u64,
    pub total_features: u64,
    pub total_plan_types: u64,
}

impl CatalogStats {
    pub fn into_dto(self) -> CatalogStatsDto {
        CatalogStatsDto {
            total_plans: self.total_plans,
            total_features: self.total_features,
            total_plan_types: self.total_plan_types,
        }
    }
}
