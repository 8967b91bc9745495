use super::*;

/// Tests listing features newest first.
///
/// Expected: Ok with the most recently created feature first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeatureRepository::new(db);
    let older = repo
        .create(CreateFeatureParam {
            label: "Older".to_string(),
            description: None,
        })
        .await?;
    let newer = repo
        .create(CreateFeatureParam {
            label: "Newer".to_string(),
            description: None,
        })
        .await?;

    let features = repo.get_all().await?;

    let ids: Vec<Uuid> = features.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests listing features on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_features() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let features = FeatureRepository::new(db).get_all().await?;

    assert!(features.is_empty());

    Ok(())
}
