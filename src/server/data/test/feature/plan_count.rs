use super::*;

/// Tests counting plans a feature is attached to.
///
/// Expected: Ok(1) for the attached feature, Ok(0) for an unattached one
#[tokio::test]
async fn counts_attached_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, attached) = factory::helpers::create_plan_with_feature(db).await?;
    let unattached = factory::create_feature(db).await?;

    let repo = FeatureRepository::new(db);

    assert_eq!(repo.plan_count(attached.id).await?, 1);
    assert_eq!(repo.plan_count(unattached.id).await?, 0);

    Ok(())
}
