use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, UpdateTaskData};
use crate::query::SearchQuery;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

pub mod tasks;

/// Storage operations on scheduled tasks.
///
/// Every operation that has to resolve a due date takes the caller's
/// `today`, captured once per logical operation.
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError>;
    async fn find_tasks_by_short_id_prefix(&self, short_id: &str) -> Result<Vec<Task>, CoreError>;
    async fn list_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError>;
    async fn search_tasks(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Task>, CoreError>;
    async fn update_task(&self, id: Uuid, data: UpdateTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn complete_task(&self, id: Uuid, today: NaiveDate) -> Result<CompletionResult, CoreError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
