use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000002_create_plan_types_table::PlanType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionPlan::Table)
                    .if_not_exists()
                    .col(uuid(SubscriptionPlan::Id).primary_key())
                    .col(uuid(SubscriptionPlan::PlanTypeId))
                    .col(string_len(SubscriptionPlan::LabelSuffix, 255))
                    .col(decimal_len(SubscriptionPlan::Price, 10, 2))
                    .col(string_len(SubscriptionPlan::Currency, 10).default("USD"))
                    .col(integer(SubscriptionPlan::DurationMonths))
                    .col(boolean(SubscriptionPlan::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(SubscriptionPlan::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(SubscriptionPlan::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_plan_plan_type_id")
                            .from(SubscriptionPlan::Table, SubscriptionPlan::PlanTypeId)
                            .to(PlanType::Table, PlanType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subscription_plan_type_label_suffix")
                    .table(SubscriptionPlan::Table)
                    .col(SubscriptionPlan::PlanTypeId)
                    .col(SubscriptionPlan::LabelSuffix)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubscriptionPlan {
    #[sea_orm(iden = "subscription_plans")]
    Table,
    Id,
    PlanTypeId,
    LabelSuffix,
    Price,
    Currency,
    DurationMonths,
    Description,
    IsDefault,
    IsActive,
    OfferType,
    OfferValue,
    Tag,
    CreatedAt,
    UpdatedAt,
}
