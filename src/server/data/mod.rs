//! Database repository layer for all catalog entities.
//!
//! This module contains repository structs that handle database operations for features,
//! plan types, subscription plans and the plan/feature join table. Repositories use SeaORM
//! entity models internally and return domain models to keep the data layer separate from
//! business logic. Every repository is generic over `ConnectionTrait`, so the same code runs
//! against the pool or inside a transaction.

pub mod feature;
pub mod plan_feature;
pub mod plan_type;
pub mod subscription_plan;

#[cfg(test)]
mod test;
