use super::*;

/// Tests listing all tasks.
///
/// Expected: Ok with every task ordered by id
#[tokio::test]
async fn finds_all_tasks_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_task(db).await?;
    let second = factory::create_task(db).await?;
    let third = factory::create_task(db).await?;

    let repo = TaskRepository::new(db);
    let ids: Vec<i32> = repo.find_all().await?.into_iter().map(|t| t.id).collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests filtering by completion flag.
///
/// Expected: Ok with only tasks matching the requested flag
#[tokio::test]
async fn finds_tasks_by_completion_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let done = factory::task::TaskFactory::new(db)
        .completed(true)
        .build()
        .await?;
    let open = factory::create_task(db).await?;

    let repo = TaskRepository::new(db);

    let completed = repo.find_by_completed(true).await?;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done.id);

    let pending = repo.find_by_completed(false).await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, open.id);

    Ok(())
}

/// Tests exact title matching, including duplicates written through `save`.
///
/// Expected: Ok with every task sharing the title and none with a longer title
#[tokio::test]
async fn finds_tasks_by_exact_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::task::TaskFactory::new(db)
        .title("Buy milk")
        .build()
        .await?;
    factory::task::TaskFactory::new(db)
        .title("Buy milk")
        .build()
        .await?;
    factory::task::TaskFactory::new(db)
        .title("Buy milk and eggs")
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.find_by_title("Buy milk").await?;

    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.title == "Buy milk"));

    Ok(())
}

/// Tests substring matching on description only.
///
/// Expected: Ok with tasks whose description contains the keyword, ignoring titles
#[tokio::test]
async fn finds_tasks_by_description_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::task::TaskFactory::new(db)
        .description("pick up oat milk")
        .build()
        .await?;
    factory::task::TaskFactory::new(db)
        .title("milk run")
        .description("weekly errand")
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.find_by_description_containing("milk").await?;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, matching.id);

    Ok(())
}

/// Tests substring matching across title or description.
///
/// Expected: Ok with tasks matching on either field, each listed once
#[tokio::test]
async fn finds_tasks_by_title_or_description_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let by_title = factory::task::TaskFactory::new(db)
        .title("milk run")
        .description("weekly errand")
        .build()
        .await?;
    let by_description = factory::task::TaskFactory::new(db)
        .title("Groceries")
        .description("oat milk")
        .build()
        .await?;
    let by_both = factory::task::TaskFactory::new(db)
        .title("milk")
        .description("more milk")
        .build()
        .await?;
    factory::task::TaskFactory::new(db)
        .title("Laundry")
        .description("whites")
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let ids: Vec<i32> = repo
        .find_by_title_or_description_containing("milk")
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    assert_eq!(ids, vec![by_title.id, by_description.id, by_both.id]);

    Ok(())
}

/// Tests inclusive id range filtering.
///
/// Expected: Ok with exactly the tasks whose id lies in [2, 5]
#[tokio::test]
async fn finds_tasks_in_inclusive_id_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..7 {
        factory::create_task(db).await?;
    }

    let repo = TaskRepository::new(db);
    let ids: Vec<i32> = repo
        .find_by_id_between(2, 5)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    assert_eq!(ids, vec![2, 3, 4, 5]);
    assert!(repo.find_by_id_between(5, 2).await?.is_empty());

    Ok(())
}

/// Tests that `%`, `_` and `\` in a keyword match only themselves.
///
/// Expected: Ok with only tasks containing the literal character
#[tokio::test]
async fn treats_like_wildcards_in_keyword_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::task::TaskFactory::new(db)
        .title("Plain")
        .description("plain text")
        .build()
        .await?;
    let discount = factory::task::TaskFactory::new(db)
        .title("Discount")
        .description("50% off")
        .build()
        .await?;
    let path = factory::task::TaskFactory::new(db)
        .title("snake_case")
        .description(r"C:\temp")
        .build()
        .await?;

    let repo = TaskRepository::new(db);

    let ids: Vec<i32> = repo
        .find_by_description_containing("%")
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![discount.id]);

    let ids: Vec<i32> = repo
        .find_by_title_or_description_containing("_")
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![path.id]);

    let ids: Vec<i32> = repo
        .find_by_description_containing(r"\")
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![path.id]);

    assert!(repo
        .find_by_description_containing("0_ o")
        .await?
        .is_empty());

    Ok(())
}
