use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000001_create_features_table::Feature;
use super::m20251101_000003_create_subscription_plans_table::SubscriptionPlan;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanFeature::Table)
                    .if_not_exists()
                    .col(uuid(PlanFeature::PlanId))
                    .col(uuid(PlanFeature::FeatureId))
                    .primary_key(
                        Index::create()
                            .col(PlanFeature::PlanId)
                            .col(PlanFeature::FeatureId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_feature_plan_id")
                            .from(PlanFeature::Table, PlanFeature::PlanId)
                            .to(SubscriptionPlan::Table, SubscriptionPlan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_feature_feature_id")
                            .from(PlanFeature::Table, PlanFeature::FeatureId)
                            .to(Feature::Table, Feature::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanFeature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlanFeature {
    #[sea_orm(iden = "plan_features")]
    Table,
    PlanId,
    FeatureId,
    FeatureKey,
    LimitValue,
}
