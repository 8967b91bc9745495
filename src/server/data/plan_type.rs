//! Plan type data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::plan_type::{CreatePlanTypeParam, PlanType};

/// Repository providing database operations for plan types.
pub struct PlanTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanTypeRepository<'a, C> {
    /// Creates a new PlanTypeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `PlanTypeRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new plan type.
    ///
    /// # Arguments
    /// - `param` - Validated name and optional description
    ///
    /// # Returns
    /// - `Ok(PlanType)` - The created plan type
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(&self, param: CreatePlanTypeParam) -> Result<PlanType, DbErr> {
        let entity = entity::plan_type::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(PlanType::from_entity(entity))
    }

    /// Gets all plan types, oldest first with name as tiebreaker.
    ///
    /// # Returns
    /// - `Ok(Vec<PlanType>)` - Plan types in creation order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<PlanType>, DbErr> {
        let entities = entity::prelude::PlanType::find()
            .order_by_asc(entity::plan_type::Column::CreatedAt)
            .order_by_asc(entity::plan_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PlanType::from_entity).collect())
    }

    /// Finds a plan type by ID.
    ///
    /// # Returns
    /// - `Ok(Some(PlanType))` - Plan type found
    /// - `Ok(None)` - No plan type with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PlanType>, DbErr> {
        let entity = entity::prelude::PlanType::find_by_id(id).one(self.db).await?;

        Ok(entity.map(PlanType::from_entity))
    }

    /// Finds a plan type by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<PlanType>, DbErr> {
        let entity = entity::prelude::PlanType::find()
            .filter(entity::plan_type::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(PlanType::from_entity))
    }

    /// Gets the number of subscription plans using a plan type.
    ///
    /// Used to reject deletion of plan types that plans still reference.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of plans referencing the plan type
    /// - `Err(DbErr)` - Database error during count query
    pub async fn plan_count(&self, plan_type_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::SubscriptionPlan::find()
            .filter(entity::subscription_plan::Column::PlanTypeId.eq(plan_type_id))
            .count(self.db)
            .await
    }

    /// Deletes a plan type.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows deleted, `0` when the plan type did not exist
    /// - `Err(DbErr)` - Database error, including a RESTRICT violation while plans reference it
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::PlanType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts all plan types.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::PlanType::find().count(self.db).await
    }
}
