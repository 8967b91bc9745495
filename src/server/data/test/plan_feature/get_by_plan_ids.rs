use super::*;

/// Tests loading features for several plans at once.
///
/// Expected: Ok with features grouped by plan, plans without links absent from the map
#[tokio::test]
async fn groups_features_by_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan_type, first_plan, first_feature) =
        factory::helpers::create_plan_with_feature(db).await?;
    let second_plan = factory::create_plan(db, plan_type.id).await?;
    let empty_plan = factory::create_plan(db, plan_type.id).await?;
    let second_feature = factory::create_feature(db).await?;
    factory::attach_feature(db, second_plan.id, first_feature.id).await?;
    factory::attach_feature(db, second_plan.id, second_feature.id).await?;

    let by_plan = PlanFeatureRepository::new(db)
        .get_by_plan_ids(&[first_plan.id, second_plan.id, empty_plan.id])
        .await?;

    assert_eq!(by_plan.get(&first_plan.id).map(Vec::len), Some(1));
    assert_eq!(by_plan.get(&second_plan.id).map(Vec::len), Some(2));
    assert!(!by_plan.contains_key(&empty_plan.id));

    Ok(())
}

/// Tests loading features for an empty plan list.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_map_for_no_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_plan = PlanFeatureRepository::new(db).get_by_plan_ids(&[]).await?;

    assert!(by_plan.is_empty());

    Ok(())
}
