//! Feature domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::feature::{CreateFeatureDto, FeatureDto},
    server::{error::AppError, model::normalize_optional},
};

/// A feature row as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: Uuid,
    pub label: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feature {
    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::feature::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FeatureDto {
        FeatureDto {
            id: self.id,
            label: self.label,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Validated input for creating a feature.
#[derive(Debug, Clone)]
pub struct CreateFeatureParam {
    /// Trimmed, non-empty label.
    pub label: String,
    /// `None` when the request omitted it or sent only whitespace.
    pub description: Option<String>,
}

impl CreateFeatureParam {
    /// Validates and normalizes a create request.
    ///
    /// # Returns
    /// - `Ok(CreateFeatureParam)` - Label trimmed, blank description dropped
    /// - `Err(AppError::BadRequest)` - Label missing or blank
    pub fn from_dto(dto: CreateFeatureDto) -> Result<Self, AppError> {
        let label = normalize_optional(dto.label)
            .ok_or_else(|| AppError::BadRequest("Feature label is required.".to_string()))?;

        Ok(Self {
            label,
            description: normalize_optional(dto.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_label_and_drops_blank_description() {
        let param = CreateFeatureParam::from_dto(CreateFeatureDto {
            label: Some("  Priority support ".to_string()),
            description: Some("   ".to_string()),
        })
        .unwrap();

        assert_eq!(param.label, "Priority support");
        assert!(param.description.is_none());
    }

    #[test]
    fn rejects_blank_label() {
        for label in [None, Some("".to_string()), Some("  \t".to_string())] {
            let result = CreateFeatureParam::from_dto(CreateFeatureDto {
                label,
                description: None,
            });

            assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Feature label is required."));
        }
    }
}
