//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::task::TaskFactory;
///
/// let task = TaskFactory::new(&db)
///     .title("Buy milk")
///     .description("2% milk")
///     .build()
///     .await?;
/// ```
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    completed: bool,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Task {id}"` where id is auto-incremented
    /// - description: `"Description for task {id}"`
    /// - completed: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Task {}", id),
            description: format!("Description for task {}", id),
            completed: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Builds and inserts the task entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::task::Model)` - Created task entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            completed: ActiveValue::Set(self.completed),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values.
///
/// Shorthand for `TaskFactory::new(db).build().await`.
pub async fn create_task(db: &DatabaseConnection) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db).build().await
}
