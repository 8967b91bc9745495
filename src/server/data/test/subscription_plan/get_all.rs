use super::*;

/// Tests listing plans ordered by price.
///
/// Expected: Ok with cheapest plan first
#[tokio::test]
async fn orders_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan_type = factory::create_plan_type(db).await?;
    let expensive = factory::subscription_plan::SubscriptionPlanFactory::new(db, plan_type.id)
        .price(Decimal::new(20, 0))
        .build()
        .await?;
    let cheap = factory::subscription_plan::SubscriptionPlanFactory::new(db, plan_type.id)
        .price(Decimal::new(5, 0))
        .build()
        .await?;
    let middle = factory::subscription_plan::SubscriptionPlanFactory::new(db, plan_type.id)
        .price(Decimal::new(10, 0))
        .build()
        .await?;

    let plans = SubscriptionPlanRepository::new(db).get_all().await?;

    let ids: Vec<Uuid> = plans.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![cheap.id, middle.id, expensive.id]);

    Ok(())
}

/// Tests that listed plans carry plan type name and features.
///
/// Expected: Ok with features attached to the right plan and an empty list elsewhere
#[tokio::test]
async fn includes_plan_type_and_features() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan_type, plan, feature) = factory::helpers::create_plan_with_feature(db).await?;
    let bare = factory::subscription_plan::SubscriptionPlanFactory::new(db, plan_type.id)
        .price(Decimal::new(100, 0))
        .build()
        .await?;

    let plans = SubscriptionPlanRepository::new(db).get_all().await?;

    assert_eq!(plans.len(), 2);
    let with_feature = plans.iter().find(|p| p.id == plan.id).unwrap();
    assert_eq!(with_feature.plan_type_name, plan_type.name);
    assert_eq!(with_feature.features.len(), 1);
    assert_eq!(with_feature.features[0].feature_id, feature.id);
    assert_eq!(with_feature.features[0].label, feature.label);

    let without_feature = plans.iter().find(|p| p.id == bare.id).unwrap();
    assert!(without_feature.features.is_empty());

    Ok(())
}

/// Tests listing plans on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plans = SubscriptionPlanRepository::new(db).get_all().await?;

    assert!(plans.is_empty());

    Ok(())
}
