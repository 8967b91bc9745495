use super::*;

/// Tests finding plan types by name and by ID.
///
/// Expected: Ok(Some) for existing entries, Ok(None) otherwise
#[tokio::test]
async fn finds_plan_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PlanType).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plan_type = factory::create_plan_type(db).await?;
    let repo = PlanTypeRepository::new(db);

    assert_eq!(
        repo.find_by_name(&plan_type.name).await?.map(|p| p.id),
        Some(plan_type.id)
    );
    assert!(repo.find_by_id(plan_type.id).await?.is_some());
    assert!(repo.find_by_name("Nonexistent").await?.is_none());
    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
