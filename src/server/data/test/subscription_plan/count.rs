use super::*;

/// Tests counting plans.
///
/// Expected: Ok with the number of inserted plans
#[tokio::test]
async fn counts_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = SubscriptionPlanRepository::new(db);

    assert_eq!(repo.count().await?, 0);

    factory::helpers::create_plan_with_dependencies(db).await?;
    factory::helpers::create_plan_with_dependencies(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
