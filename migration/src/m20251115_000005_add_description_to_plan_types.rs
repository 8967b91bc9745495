use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_create_plan_types_table::PlanType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(PlanType::Table)
                    .add_column(text_null(PlanType::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(PlanType::Table)
                    .drop_column(PlanType::Description)
                    .to_owned(),
            )
            .await
    }
}
