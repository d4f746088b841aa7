use super::*;

/// Tests deleting a task twice and reading it afterwards.
///
/// Expected: first delete Ok, second delete Err(DoesNotExist), get Err(DoesNotExist)
#[tokio::test]
async fn deletes_once_then_reports_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_task(db).await?;
    let service = TaskService::new(db);

    service.delete_task(created.id).await?;

    assert!(matches!(
        service.delete_task(created.id).await,
        Err(AppError::TaskErr(TaskError::DoesNotExist { .. }))
    ));
    assert!(matches!(
        service.get_task_by_id(created.id).await,
        Err(AppError::TaskErr(TaskError::DoesNotExist { .. }))
    ));

    Ok(())
}
