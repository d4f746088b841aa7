use super::*;

/// Tests the filtered read operations against a small fixture set.
///
/// Expected: Ok with each query returning exactly its matching tasks
#[tokio::test]
async fn filters_tasks_by_each_criterion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TaskService::new(db);
    let milk = service
        .create_task(create_param("Buy milk", "2% milk", false))
        .await?;
    let laundry = service
        .create_task(create_param("Laundry", "whites and milk stains", true))
        .await?;
    let taxes = service
        .create_task(create_param("Taxes", "file before April", false))
        .await?;

    assert_eq!(service.get_all_tasks().await?.len(), 3);

    let done = service.get_tasks_by_completion_status(true).await?;
    assert_eq!(done, vec![laundry.clone()]);

    let pending = service.get_tasks_by_completion_status(false).await?;
    assert_eq!(pending, vec![milk.clone(), taxes.clone()]);

    assert_eq!(service.get_tasks_by_title("Taxes").await?, vec![taxes.clone()]);
    assert!(service.get_tasks_by_title("Tax").await?.is_empty());

    assert_eq!(
        service.get_tasks_by_description_containing("milk").await?,
        vec![milk.clone(), laundry.clone()]
    );

    assert_eq!(
        service.get_tasks_by_title_or_description("April").await?,
        vec![taxes.clone()]
    );
    assert_eq!(
        service.get_tasks_by_title_or_description("Buy").await?,
        vec![milk.clone()]
    );

    Ok(())
}

/// Tests id range filtering regardless of creation order.
///
/// Expected: Ok with exactly ids 2 through 5
#[tokio::test]
async fn returns_inclusive_id_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..6 {
        factory::create_task(db).await?;
    }

    let ids: Vec<i32> = TaskService::new(db)
        .get_tasks_by_id_range(2, 5)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    assert_eq!(ids, vec![2, 3, 4, 5]);

    Ok(())
}
