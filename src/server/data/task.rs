//! Task data repository for database operations.
//!
//! This module provides the `TaskRepository` for managing task records in the database.
//! It covers existence checks, lookups, the filtered queries exposed by the API, saving
//! and deletion, converting entity models to domain models at the infrastructure
//! boundary.

use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::task::{SaveTaskParam, Task};

/// Repository providing database operations for task management.
pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    /// Creates a new TaskRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether any task has exactly the given title.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one task has the title
    /// - `Ok(false)` - No task has the title
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists_by_title(&self, title: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Task::find()
            .filter(entity::task::Column::Title.eq(title))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a task with the given id exists.
    pub async fn exists_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Task::find()
            .filter(entity::task::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a task by id.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - Task found
    /// - `Ok(None)` - No task with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Task>, DbErr> {
        let entity = entity::prelude::Task::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Task::from_entity))
    }

    /// Gets every task ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Task>, DbErr> {
        self.find_where(Condition::all()).await
    }

    /// Gets tasks whose completion flag equals `completed`.
    pub async fn find_by_completed(&self, completed: bool) -> Result<Vec<Task>, DbErr> {
        self.find_where(Condition::all().add(entity::task::Column::Completed.eq(completed)))
            .await
    }

    /// Gets tasks whose title is exactly `title`.
    ///
    /// Returns a sequence since title uniqueness is only checked at creation time and is
    /// not a storage constraint.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Task>, DbErr> {
        self.find_where(Condition::all().add(entity::task::Column::Title.eq(title)))
            .await
    }

    /// Gets tasks whose description contains `keyword`.
    ///
    /// `%` and `_` in the keyword match literally. Matching uses SQLite `LIKE`, so it is
    /// case-insensitive for ASCII letters only.
    pub async fn find_by_description_containing(&self, keyword: &str) -> Result<Vec<Task>, DbErr> {
        self.find_where(
            Condition::all().add(entity::task::Column::Description.like(containing(keyword))),
        )
        .await
    }

    /// Gets tasks whose title or description contains `keyword`.
    ///
    /// Same matching rules as `find_by_description_containing`.
    pub async fn find_by_title_or_description_containing(
        &self,
        keyword: &str,
    ) -> Result<Vec<Task>, DbErr> {
        self.find_where(
            Condition::any()
                .add(entity::task::Column::Title.like(containing(keyword)))
                .add(entity::task::Column::Description.like(containing(keyword))),
        )
        .await
    }

    /// Gets tasks with `start_id <= id <= end_id`.
    ///
    /// An inverted range (`start_id > end_id`) matches nothing.
    pub async fn find_by_id_between(&self, start_id: i32, end_id: i32) -> Result<Vec<Task>, DbErr> {
        self.find_where(Condition::all().add(entity::task::Column::Id.between(start_id, end_id)))
            .await
    }

    /// Inserts or updates a task.
    ///
    /// A param without an id is inserted and receives a generated id. A param with an id
    /// overwrites title, description and completed of the row with that id.
    ///
    /// # Returns
    /// - `Ok(Task)` - The stored task
    /// - `Err(DbErr::RecordNotUpdated)` - An id was given but no row matched it
    /// - `Err(DbErr)` - Other database error during insert or update
    pub async fn save(&self, param: SaveTaskParam) -> Result<Task, DbErr> {
        let active_model = entity::task::ActiveModel {
            id: param.id.map_or(ActiveValue::NotSet, ActiveValue::Unchanged),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            completed: ActiveValue::Set(param.completed),
        };

        let entity = match param.id {
            Some(_) => active_model.update(self.db).await?,
            None => active_model.insert(self.db).await?,
        };

        Ok(Task::from_entity(entity))
    }

    /// Deletes the task with the given id.
    ///
    /// # Returns
    /// - `Ok(())` - Task deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Task::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    async fn find_where(&self, condition: Condition) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find()
            .filter(condition)
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }
}

/// Builds a `LIKE` pattern matching any value that contains `keyword` verbatim.
fn containing(keyword: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
