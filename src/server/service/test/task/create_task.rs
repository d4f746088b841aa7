use super::*;

/// Tests creating a task with a fresh title.
///
/// Expected: Ok with an assigned id and the input fields
#[tokio::test]
async fn creates_task_with_assigned_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TaskService::new(db);
    let task = service
        .create_task(create_param("Buy milk", "2% milk", false))
        .await?;

    assert_eq!(task.id, 1);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "2% milk");
    assert!(!task.completed);

    Ok(())
}

/// Tests creating a second task with an identical title.
///
/// Expected: Err(AlreadyExists) and the first task still stored alone
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TaskService::new(db);
    let first = service
        .create_task(create_param("Buy milk", "2% milk", false))
        .await?;

    let result = service
        .create_task(create_param("Buy milk", "oat milk", true))
        .await;

    assert!(matches!(
        result,
        Err(AppError::TaskErr(TaskError::AlreadyExists { ref title })) if title == "Buy milk"
    ));

    let stored = entity::prelude::Task::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, first.id);
    assert_eq!(stored[0].description, "2% milk");

    Ok(())
}
