use super::*;

/// Tests inserting a plan row.
///
/// Expected: Ok with every column persisted
#[tokio::test]
async fn creates_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan_type = factory::create_plan_type(db).await?;
    let param = CreateSubscriptionPlanParam {
        description: Some("Billed yearly".to_string()),
        duration_months: 12,
        is_default: true,
        offer_type: Some("percent".to_string()),
        offer_value: Some(Decimal::new(15, 0)),
        tag: Some("Best value".to_string()),
        ..plan_param(plan_type.id, "annual")
    };

    let id = SubscriptionPlanRepository::new(db).create(&param).await?;

    let stored = entity::prelude::SubscriptionPlan::find_by_id(id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.plan_type_id, plan_type.id);
    assert_eq!(stored.label_suffix, "annual");
    assert_eq!(stored.duration_months, 12);
    assert!(stored.is_default);
    assert_eq!(stored.offer_value, Some(Decimal::new(15, 0)));
    assert_eq!(stored.tag.as_deref(), Some("Best value"));
    assert_eq!(stored.created_at, stored.updated_at);

    Ok(())
}

/// Tests inserting a plan for a nonexistent plan type.
///
/// Expected: Err with foreign key constraint violation
#[tokio::test]
async fn fails_for_unknown_plan_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SubscriptionPlanRepository::new(db)
        .create(&plan_param(Uuid::new_v4(), "monthly"))
        .await;

    assert!(is_constraint_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests inserting two plans with the same label suffix under one plan type.
///
/// Uses the migrated schema, which carries the composite unique index.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn fails_for_duplicate_label_suffix() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan_type = factory::create_plan_type(db).await?;
    let repo = SubscriptionPlanRepository::new(db);
    repo.create(&plan_param(plan_type.id, "monthly")).await?;

    let result = repo.create(&plan_param(plan_type.id, "monthly")).await;

    assert!(is_constraint_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests that the same label suffix is allowed under different plan types.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_label_suffix_across_plan_types() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starter = factory::create_plan_type(db).await?;
    let pro = factory::create_plan_type(db).await?;
    let repo = SubscriptionPlanRepository::new(db);

    repo.create(&plan_param(starter.id, "monthly")).await?;
    repo.create(&plan_param(pro.id, "monthly")).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
