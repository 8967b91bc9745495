use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_create_plan_features_table::PlanFeature;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(PlanFeature::Table)
                    .add_column(string_len_null(PlanFeature::FeatureKey, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(PlanFeature::Table)
                    .add_column(string_len_null(PlanFeature::LimitValue, 100))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(PlanFeature::Table)
                    .drop_column(PlanFeature::LimitValue)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(PlanFeature::Table)
                    .drop_column(PlanFeature::FeatureKey)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
