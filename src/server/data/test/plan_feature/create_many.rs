use super::*;

/// Tests linking several features to a plan.
///
/// Expected: Ok with one link row per feature
#[tokio::test]
async fn creates_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::helpers::create_plan_with_dependencies(db).await?;
    let first = factory::create_feature(db).await?;
    let second = factory::create_feature(db).await?;

    PlanFeatureRepository::new(db)
        .create_many(plan.id, &[link(first.id), link(second.id)])
        .await?;

    let links = entity::prelude::PlanFeature::find().all(db).await?;
    assert_eq!(links.len(), 2);
    assert!(links.iter().all(|l| l.plan_id == plan.id));

    Ok(())
}

/// Tests linking an empty feature list.
///
/// Expected: Ok without inserting anything
#[tokio::test]
async fn ignores_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::helpers::create_plan_with_dependencies(db).await?;

    PlanFeatureRepository::new(db)
        .create_many(plan.id, &[])
        .await?;

    let links = entity::prelude::PlanFeature::find().all(db).await?;
    assert!(links.is_empty());

    Ok(())
}

/// Tests linking a feature that doesn't exist.
///
/// Expected: Err with foreign key constraint violation
#[tokio::test]
async fn fails_for_unknown_feature() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::helpers::create_plan_with_dependencies(db).await?;

    let result = PlanFeatureRepository::new(db)
        .create_many(plan.id, &[link(Uuid::new_v4())])
        .await;

    assert!(is_constraint_violation(&result.unwrap_err()));

    Ok(())
}
