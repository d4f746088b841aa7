use sea_orm::DatabaseConnection;

use crate::server::{
    data::task::TaskRepository,
    error::{task::TaskError, AppError},
    model::task::{CreateTaskParam, PatchTaskParam, SaveTaskParam, Task, UpdateTaskParam},
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every task
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Creates a new task, rejecting titles that are already in use
    ///
    /// # Returns
    /// - `Ok(Task)`: The stored task with its assigned id
    /// - `Err(AppError::TaskErr(TaskError::AlreadyExists))`: A task with the same title exists
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create_task(&self, param: CreateTaskParam) -> Result<Task, AppError> {
        let repo = TaskRepository::new(self.db);

        if repo.exists_by_title(&param.title).await? {
            return Err(TaskError::AlreadyExists { title: param.title }.into());
        }

        let task = repo.save(param.into()).await?;

        tracing::info!("Created task {} ({})", task.id, task.title);

        Ok(task)
    }

    /// Deletes a task
    ///
    /// # Returns
    /// - `Ok(())`: Task deleted
    /// - `Err(AppError::TaskErr(TaskError::DoesNotExist))`: No task with that id
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn delete_task(&self, id: i32) -> Result<(), AppError> {
        let repo = TaskRepository::new(self.db);

        if !repo.exists_by_id(id).await? {
            return Err(TaskError::DoesNotExist { id }.into());
        }

        repo.delete_by_id(id).await?;

        tracing::info!("Deleted task {}", id);

        Ok(())
    }

    /// Gets a task by id, failing with `DoesNotExist` when absent
    pub async fn get_task_by_id(&self, id: i32) -> Result<Task, AppError> {
        let repo = TaskRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| TaskError::DoesNotExist { id }.into())
    }

    /// Replaces title, description and completion flag of an existing task
    ///
    /// # Returns
    /// - `Ok(Task)`: The updated task
    /// - `Err(AppError::TaskErr(TaskError::NotFound))`: No task with that id
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn update_task(&self, id: i32, param: UpdateTaskParam) -> Result<Task, AppError> {
        let repo = TaskRepository::new(self.db);

        let mut task = repo
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound { id })?;

        task.title = param.title;
        task.description = param.description;
        task.completed = param.completed;

        let task = repo.save(SaveTaskParam::from(task)).await?;

        tracing::debug!("Updated task {}", task.id);

        Ok(task)
    }

    /// Overwrites only the fields present in the patch
    ///
    /// # Returns
    /// - `Ok(Task)`: The updated task
    /// - `Err(AppError::TaskErr(TaskError::NotFound))`: No task with that id
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn patch_task(&self, id: i32, param: PatchTaskParam) -> Result<Task, AppError> {
        let repo = TaskRepository::new(self.db);

        let mut task = repo
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound { id })?;

        task.apply_patch(param);

        let task = repo.save(SaveTaskParam::from(task)).await?;

        tracing::debug!("Patched task {}", task.id);

        Ok(task)
    }

    pub async fn get_tasks_by_completion_status(
        &self,
        completed: bool,
    ) -> Result<Vec<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.find_by_completed(completed).await?)
    }

    pub async fn get_tasks_by_title(&self, title: &str) -> Result<Vec<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.find_by_title(title).await?)
    }

    pub async fn get_tasks_by_description_containing(
        &self,
        keyword: &str,
    ) -> Result<Vec<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.find_by_description_containing(keyword).await?)
    }

    /// Gets tasks with ids in `[start_id, end_id]`
    pub async fn get_tasks_by_id_range(
        &self,
        start_id: i32,
        end_id: i32,
    ) -> Result<Vec<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.find_by_id_between(start_id, end_id).await?)
    }

    /// Gets tasks whose title or description contains the keyword
    pub async fn get_tasks_by_title_or_description(
        &self,
        keyword: &str,
    ) -> Result<Vec<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.find_by_title_or_description_containing(keyword).await?)
    }
}
