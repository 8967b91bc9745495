use super::*;

/// Tests creating a feature.
///
/// Verifies that the repository generates an ID and persists the label and description.
///
/// Expected: Ok with the feature stored in the database
#[tokio::test]
async fn creates_feature() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeatureRepository::new(db);
    let feature = repo
        .create(CreateFeatureParam {
            label: "Unlimited projects".to_string(),
            description: Some("No cap on project count".to_string()),
        })
        .await?;

    assert_eq!(feature.label, "Unlimited projects");
    assert_eq!(
        feature.description.as_deref(),
        Some("No cap on project count")
    );

    let stored = entity::prelude::Feature::find_by_id(feature.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.label, "Unlimited projects");

    Ok(())
}

/// Tests creating a feature without description.
///
/// Expected: Ok with description stored as NULL
#[tokio::test]
async fn creates_feature_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let feature = FeatureRepository::new(db)
        .create(CreateFeatureParam {
            label: "API access".to_string(),
            description: None,
        })
        .await?;

    let stored = entity::prelude::Feature::find_by_id(feature.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.description.is_none());

    Ok(())
}

/// Tests creating two features with the same label.
///
/// Verifies that the unique constraint on label rejects the second insert with an error
/// recognized as a constraint violation.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn fails_for_duplicate_label() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feature).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_feature(db).await?;

    let result = FeatureRepository::new(db)
        .create(CreateFeatureParam {
            label: existing.label,
            description: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(is_constraint_violation(&err));

    Ok(())
}
