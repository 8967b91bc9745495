use super::*;

/// Tests counting a mix of known and unknown feature IDs.
///
/// Expected: Ok with only the existing features counted
#[tokio::test]
async fn counts_only_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_feature(db).await?;
    let second = factory::create_feature(db).await?;

    let count = FeatureRepository::new(db)
        .count_existing(&[first.id, second.id, Uuid::new_v4()])
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting an empty ID list.
///
/// Expected: Ok(0) without querying
#[tokio::test]
async fn returns_zero_for_empty_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_feature(db).await?;

    let count = FeatureRepository::new(db).count_existing(&[]).await?;

    assert_eq!(count, 0);

    Ok(())
}
