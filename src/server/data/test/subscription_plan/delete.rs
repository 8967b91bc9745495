use super::*;

/// Tests deleting a plan removes its feature links but keeps the features.
///
/// Expected: Ok(1) with link rows gone and feature still present
#[tokio::test]
async fn deletes_plan_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan, feature) = factory::helpers::create_plan_with_feature(db).await?;

    let rows = SubscriptionPlanRepository::new(db).delete(plan.id).await?;

    assert_eq!(rows, 1);
    assert!(entity::prelude::PlanFeature::find_by_id((plan.id, feature.id))
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Feature::find_by_id(feature.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a nonexistent plan.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = SubscriptionPlanRepository::new(db)
        .delete(Uuid::new_v4())
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
