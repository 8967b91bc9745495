use super::*;

/// Tests deleting a feature.
///
/// Expected: Ok(1) with feature removed from database
#[tokio::test]
async fn deletes_feature() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let feature = factory::create_feature(db).await?;

    let rows = FeatureRepository::new(db).delete(feature.id).await?;

    assert_eq!(rows, 1);
    let db_feature = entity::prelude::Feature::find_by_id(feature.id)
        .one(db)
        .await?;
    assert!(db_feature.is_none());

    Ok(())
}

/// Tests deleting a nonexistent feature.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_feature() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = FeatureRepository::new(db).delete(Uuid::new_v4()).await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that deleting a feature directly removes its plan links.
///
/// Verifies the CASCADE foreign key on `plan_features.feature_id`.
///
/// Expected: Ok with the link row gone and the plan untouched
#[tokio::test]
async fn cascades_to_plan_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan, feature) = factory::helpers::create_plan_with_feature(db).await?;

    FeatureRepository::new(db).delete(feature.id).await?;

    let link = entity::prelude::PlanFeature::find_by_id((plan.id, feature.id))
        .one(db)
        .await?;
    assert!(link.is_none());
    let db_plan = entity::prelude::SubscriptionPlan::find_by_id(plan.id)
        .one(db)
        .await?;
    assert!(db_plan.is_some());

    Ok(())
}
