use super::*;

/// Tests fetching a plan with its feature links.
///
/// Expected: Ok(Some) with per-plan feature key and limit
#[tokio::test]
async fn returns_plan_with_features() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan_type, plan) = factory::helpers::create_plan_with_dependencies(db).await?;
    let feature = factory::create_feature(db).await?;
    PlanFeatureRepository::new(db)
        .create_many(
            plan.id,
            &[CreatePlanFeatureParam {
                feature_id: feature.id,
                feature_key: Some("seats".to_string()),
                limit_value: Some("5".to_string()),
            }],
        )
        .await?;

    let found = SubscriptionPlanRepository::new(db)
        .get_by_id(plan.id)
        .await?
        .unwrap();

    assert_eq!(found.plan_type_name, plan_type.name);
    assert_eq!(found.features.len(), 1);
    assert_eq!(found.features[0].feature_key.as_deref(), Some("seats"));
    assert_eq!(found.features[0].limit_value.as_deref(), Some("5"));

    Ok(())
}

/// Tests fetching a nonexistent plan.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = SubscriptionPlanRepository::new(db)
        .get_by_id(Uuid::new_v4())
        .await?;

    assert!(found.is_none());

    Ok(())
}
