use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::plan_type::PlanTypeDto,
    server::{
        data::plan_type::PlanTypeRepository, error::AppError,
        model::plan_type::CreatePlanTypeParam,
    },
};

const PLAN_TYPE_IN_USE: &str = "Plan type is used by subscription plans and cannot be deleted.";

pub struct PlanTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all plan types in creation order
    pub async fn get_all(&self) -> Result<Vec<PlanTypeDto>, AppError> {
        let plan_types = PlanTypeRepository::new(self.db).get_all().await?;

        Ok(plan_types.into_iter().map(|p| p.into_dto()).collect())
    }

    /// Creates a plan type, rejecting duplicate names with a conflict
    pub async fn create(&self, param: CreatePlanTypeParam) -> Result<PlanTypeDto, AppError> {
        let plan_type = PlanTypeRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| {
                AppError::from_constraint(e, "A plan type with this name already exists.")
            })?;

        tracing::info!("Created plan type {} ({})", plan_type.name, plan_type.id);

        Ok(plan_type.into_dto())
    }

    /// Deletes a plan type no plan references
    ///
    /// The RESTRICT foreign key backs up the usage check if a plan is created between
    /// the check and the delete.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = PlanTypeRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Plan type not found.".to_string()));
        }

        if repo.plan_count(id).await? > 0 {
            return Err(AppError::Conflict(PLAN_TYPE_IN_USE.to_string()));
        }

        let deleted = repo
            .delete(id)
            .await
            .map_err(|e| AppError::from_constraint(e, PLAN_TYPE_IN_USE))?;
        if deleted == 0 {
            return Err(AppError::NotFound("Plan type not found.".to_string()));
        }

        tracing::info!("Deleted plan type {}", id);

        Ok(())
    }
}
