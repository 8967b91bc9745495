use super::*;

/// Tests finding an existing feature by ID and by label.
///
/// Expected: Ok(Some) for both lookups
#[tokio::test]
async fn finds_existing_feature() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let feature = factory::create_feature(db).await?;
    let repo = FeatureRepository::new(db);

    let by_id = repo.find_by_id(feature.id).await?;
    let by_label = repo.find_by_label(&feature.label).await?;

    assert_eq!(by_id.map(|f| f.label), Some(feature.label.clone()));
    assert_eq!(by_label.map(|f| f.id), Some(feature.id));

    Ok(())
}

/// Tests looking up a feature that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FeatureRepository::new(db).find_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the locking lookup inside a transaction.
///
/// Expected: Ok(Some) for an existing feature, Ok(None) for an unknown ID
#[tokio::test]
async fn finds_feature_for_update_in_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let feature = factory::create_feature(db).await?;

    let txn = db.begin().await?;
    let repo = FeatureRepository::new(&txn);
    let locked = repo.find_by_id_for_update(feature.id).await?;
    let missing = repo.find_by_id_for_update(Uuid::new_v4()).await?;
    txn.commit().await?;

    assert_eq!(locked.map(|f| f.id), Some(feature.id));
    assert!(missing.is_none());

    Ok(())
}
