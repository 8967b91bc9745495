use super::*;

/// Tests creating a plan type.
///
/// Expected: Ok with the plan type stored in the database
#[tokio::test]
async fn creates_plan_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PlanType).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan_type = PlanTypeRepository::new(db)
        .create(CreatePlanTypeParam {
            name: "Pro".to_string(),
            description: Some("For growing teams".to_string()),
        })
        .await?;

    let stored = entity::prelude::PlanType::find_by_id(plan_type.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Pro");
    assert_eq!(stored.description.as_deref(), Some("For growing teams"));

    Ok(())
}

/// Tests creating two plan types with the same name.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PlanType).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_plan_type(db).await?;

    let result = PlanTypeRepository::new(db)
        .create(CreatePlanTypeParam {
            name: existing.name,
            description: None,
        })
        .await;

    assert!(is_constraint_violation(&result.unwrap_err()));

    Ok(())
}
