pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_features_table;
mod m20251101_000002_create_plan_types_table;
mod m20251101_000003_create_subscription_plans_table;
mod m20251101_000004_create_plan_features_table;
mod m20251115_000005_add_description_to_plan_types;
mod m20251115_000006_add_offer_columns_to_subscription_plans;
mod m20251120_000007_add_limits_to_plan_features;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_features_table::Migration),
            Box::new(m20251101_000002_create_plan_types_table::Migration),
            Box::new(m20251101_000003_create_subscription_plans_table::Migration),
            Box::new(m20251101_000004_create_plan_features_table::Migration),
            Box::new(m20251115_000005_add_description_to_plan_types::Migration),
            Box::new(m20251115_000006_add_offer_columns_to_subscription_plans::Migration),
            Box::new(m20251120_000007_add_limits_to_plan_features::Migration),
        ]
    }
}
