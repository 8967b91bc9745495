//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique labels in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a plan type and one subscription plan referencing it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((plan_type, plan))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_plan_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::plan_type::Model, entity::subscription_plan::Model), DbErr> {
    let plan_type = crate::factory::plan_type::create_plan_type(db).await?;
    let plan = crate::factory::subscription_plan::create_plan(db, plan_type.id).await?;

    Ok((plan_type, plan))
}

/// Creates a plan with a fresh feature attached to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((plan_type, plan, feature))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_plan_with_feature(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::plan_type::Model,
        entity::subscription_plan::Model,
        entity::feature::Model,
    ),
    DbErr,
> {
    let (plan_type, plan) = create_plan_with_dependencies(db).await?;
    let feature = crate::factory::feature::create_feature(db).await?;
    crate::factory::plan_feature::attach_feature(db, plan.id, feature.id).await?;

    Ok((plan_type, plan, feature))
}
