//! Plan type domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::plan_type::{CreatePlanTypeDto, PlanTypeDto},
    server::{error::AppError, model::normalize_optional},
};

/// A plan type row as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanType {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PlanType {
    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::plan_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PlanTypeDto {
        PlanTypeDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Validated input for creating a plan type.
#[derive(Debug, Clone)]
pub struct CreatePlanTypeParam {
    pub name: String,
    pub description: Option<String>,
}

impl CreatePlanTypeParam {
    /// Validates and normalizes a create request.
    ///
    /// # Returns
    /// - `Ok(CreatePlanTypeParam)` - Name trimmed, blank description dropped
    /// - `Err(AppError::BadRequest)` - Name missing or blank
    pub fn from_dto(dto: CreatePlanTypeDto) -> Result<Self, AppError> {
        let name = normalize_optional(dto.name)
            .ok_or_else(|| AppError::BadRequest("Name is required.".to_string()))?;

        Ok(Self {
            name,
            description: normalize_optional(dto.description),
        })
    }
}
