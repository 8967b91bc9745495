use super::*;

/// Tests counting plans that reference a plan type.
///
/// Expected: Ok(2) for the used plan type, Ok(0) for an unused one
#[tokio::test]
async fn counts_referencing_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PlanType)
        .with_table(SubscriptionPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let used = factory::create_plan_type(db).await?;
    factory::create_plan(db, used.id).await?;
    factory::create_plan(db, used.id).await?;
    let unused = factory::create_plan_type(db).await?;

    let repo = PlanTypeRepository::new(db);

    assert_eq!(repo.plan_count(used.id).await?, 2);
    assert_eq!(repo.plan_count(unused.id).await?, 0);

    Ok(())
}
