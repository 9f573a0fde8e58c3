use anyhow::{anyhow, Result};
use scheduler_core::error::CoreError;
use scheduler_core::models::Task;
use scheduler_core::repository::TaskRepository;
use uuid::Uuid;

/// Resolves a full ID or a unique ID prefix to a task ID.
pub async fn resolve_task_id(repo: &(impl TaskRepository + Sync), short_id: &str) -> Result<Uuid> {
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::InvalidInput(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    let tasks = repo.find_tasks_by_short_id_prefix(short_id).await?;
    if tasks.len() == 1 {
        Ok(tasks[0].id)
    } else if tasks.is_empty() {
        Err(anyhow!(CoreError::NotFound(format!(
            "No task found with ID prefix '{}'",
            short_id
        ))))
    } else {
        let task_info: Vec<(String, String)> = tasks
            .into_iter()
            .map(|t| (t.id.to_string(), t.title))
            .collect();
        Err(anyhow!(CoreError::AmbiguousId(task_info)))
    }
}

/// Resolves an ID prefix and loads the task.
pub async fn resolve_task(repo: &(impl TaskRepository + Sync), short_id: &str) -> Result<Task> {
    let id = resolve_task_id(repo, short_id).await?;
    repo.find_task_by_id(id)
        .await?
        .ok_or_else(|| anyhow!(CoreError::NotFound(id.to_string())))
}
