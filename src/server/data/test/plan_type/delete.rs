use super::*;

/// Tests deleting an unused plan type.
///
/// Expected: Ok(1) with plan type removed
#[tokio::test]
async fn deletes_plan_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PlanType).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan_type = factory::create_plan_type(db).await?;

    let rows = PlanTypeRepository::new(db).delete(plan_type.id).await?;

    assert_eq!(rows, 1);
    assert!(entity::prelude::PlanType::find_by_id(plan_type.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a nonexistent plan type.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_plan_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PlanType).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = PlanTypeRepository::new(db).delete(Uuid::new_v4()).await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests deleting a plan type that a plan still references.
///
/// Verifies the RESTRICT foreign key on `subscription_plans.plan_type_id`.
///
/// Expected: Err with foreign key constraint violation
#[tokio::test]
async fn fails_when_referenced_by_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PlanType)
        .with_table(SubscriptionPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan_type, _) = factory::helpers::create_plan_with_dependencies(db).await?;

    let result = PlanTypeRepository::new(db).delete(plan_type.id).await;

    assert!(is_constraint_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests that the RESTRICT failure translates into a conflict for the API.
///
/// Expected: AppError::Conflict carrying the supplied message
#[tokio::test]
async fn restricted_delete_maps_to_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PlanType)
        .with_table(SubscriptionPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (plan_type, _) = factory::helpers::create_plan_with_dependencies(db).await?;

    let err = PlanTypeRepository::new(db)
        .delete(plan_type.id)
        .await
        .unwrap_err();

    assert!(matches!(
        AppError::from_constraint(err, "in use"),
        AppError::Conflict(msg) if msg == "in use"
    ));

    Ok(())
}
