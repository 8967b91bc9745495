use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanType::Table)
                    .if_not_exists()
                    .col(uuid(PlanType::Id).primary_key())
                    .col(string_len_uniq(PlanType::Name, 255))
                    .col(
                        timestamp_with_time_zone(PlanType::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlanType {
    #[sea_orm(iden = "plan_types")]
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
}
