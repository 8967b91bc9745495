use super::*;

/// Tests listing plan types in creation order.
///
/// Expected: Ok with the oldest plan type first
#[tokio::test]
async fn returns_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(PlanType).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanTypeRepository::new(db);
    let first = repo
        .create(CreatePlanTypeParam {
            name: "Starter".to_string(),
            description: None,
        })
        .await?;
    let second = repo
        .create(CreatePlanTypeParam {
            name: "Business".to_string(),
            description: None,
        })
        .await?;

    let plan_types = repo.get_all().await?;

    let ids: Vec<Uuid> = plan_types.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
