use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_create_subscription_plans_table::SubscriptionPlan;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts a single alteration per ALTER TABLE statement
        let columns = [
            text_null(SubscriptionPlan::Description),
            boolean(SubscriptionPlan::IsDefault).default(false).to_owned(),
            string_len_null(SubscriptionPlan::OfferType, 50),
            decimal_len_null(SubscriptionPlan::OfferValue, 10, 2),
            string_len_null(SubscriptionPlan::Tag, 100),
        ];

        for mut column in columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(SubscriptionPlan::Table)
                        .add_column(&mut column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            SubscriptionPlan::Tag,
            SubscriptionPlan::OfferValue,
            SubscriptionPlan::OfferType,
            SubscriptionPlan::IsDefault,
            SubscriptionPlan::Description,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(SubscriptionPlan::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
