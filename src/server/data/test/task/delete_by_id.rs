use super::*;

/// Tests deleting a task by id.
///
/// Expected: Ok with only the targeted row removed
#[tokio::test]
async fn deletes_task_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_task(db).await?;
    let kept = factory::create_task(db).await?;

    let repo = TaskRepository::new(db);
    repo.delete_by_id(doomed.id).await?;

    assert!(entity::prelude::Task::find_by_id(doomed.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Task::find_by_id(kept.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(()) without touching other rows
#[tokio::test]
async fn deleting_unknown_id_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_task(db).await?;

    let repo = TaskRepository::new(db);
    repo.delete_by_id(1000).await?;

    assert_eq!(entity::prelude::Task::find().all(db).await?.len(), 1);

    Ok(())
}
