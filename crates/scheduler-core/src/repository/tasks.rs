use crate::date::format_date;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, UpdateTaskData};
use crate::query::SearchQuery;
use crate::recurrence::{resolve_completion, resolve_initial_date, CompletionOutcome};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        data.validate()?;
        let date = resolve_initial_date(data.date.as_deref(), &data.repeat, today)?;
        let now = Utc::now();

        let mut tx = self.pool().begin().await?;
        let task: Task = sqlx::query_as(
            r#"INSERT INTO scheduler (id, date, title, comment, repeat, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7().to_string())
        .bind(format_date(date))
        .bind(data.title.trim())
        .bind(&data.comment)
        .bind(&data.repeat)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(id = %task.id, date = %format_date(task.date), "task added");
        Ok(task)
    }

    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn find_tasks_by_short_id_prefix(&self, short_id: &str) -> Result<Vec<Task>, CoreError> {
        // Ids are lowercase hyphenated UUIDs; anything else cannot match.
        if short_id.is_empty() || !short_id.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
            return Ok(Vec::new());
        }

        let mut pattern = String::with_capacity(short_id.len() + 1);
        pattern.push_str(&short_id.to_ascii_lowercase());
        pattern.push('%');

        let tasks: Vec<Task> = sqlx::query_as("SELECT * FROM scheduler WHERE id LIKE $1 ORDER BY date, id")
            .bind(pattern)
            .fetch_all(self.pool())
            .await?;
        Ok(tasks)
    }

    async fn list_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError> {
        let tasks: Vec<Task> = sqlx::query_as("SELECT * FROM scheduler ORDER BY date, id LIMIT $1")
            .bind(i64::from(limit))
            .fetch_all(self.pool())
            .await?;
        Ok(tasks)
    }

    async fn search_tasks(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Task>, CoreError> {
        let tasks: Vec<Task> = match query {
            SearchQuery::Date(date) => {
                sqlx::query_as("SELECT * FROM scheduler WHERE date = $1 ORDER BY date, id LIMIT $2")
                    .bind(format_date(*date))
                    .bind(i64::from(limit))
                    .fetch_all(self.pool())
                    .await?
            }
            SearchQuery::Text(text) => {
                sqlx::query_as(
                    r#"SELECT * FROM scheduler
                    WHERE title LIKE $1 ESCAPE '\' OR comment LIKE $1 ESCAPE '\'
                    ORDER BY date, id
                    LIMIT $2
                    "#,
                )
                .bind(SearchQuery::like_pattern(text))
                .bind(i64::from(limit))
                .fetch_all(self.pool())
                .await?
            }
        };
        Ok(tasks)
    }

    async fn update_task(&self, id: Uuid, data: UpdateTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;

        let current: Task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        if data.is_empty() {
            return Ok(current);
        }

        let merged = data.merge(&current);
        merged.validate()?;
        let date = resolve_initial_date(merged.date.as_deref(), &merged.repeat, today)?;

        let updated: Task = sqlx::query_as(
            r#"UPDATE scheduler
            SET date = $1, title = $2, comment = $3, repeat = $4, updated_at = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(format_date(date))
        .bind(merged.title.trim())
        .bind(&merged.comment)
        .bind(&merged.repeat)
        .bind(Utc::now())
        .bind(id.to_string())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(%id, date = %format_date(updated.date), "task updated");
        Ok(updated)
    }

    async fn complete_task(&self, id: Uuid, today: NaiveDate) -> Result<CompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let result = match resolve_completion(task.date, &task.repeat, today)? {
            CompletionOutcome::Delete => {
                sqlx::query("DELETE FROM scheduler WHERE id = $1")
                    .bind(id.to_string())
                    .execute(&mut *tx)
                    .await?;
                info!(%id, "one-off task completed and deleted");
                CompletionResult::Deleted(task)
            }
            CompletionOutcome::UpdateDate(next) => {
                let previous = task.date;
                let rescheduled: Task = sqlx::query_as(
                    r#"UPDATE scheduler
                    SET date = $1, updated_at = $2
                    WHERE id = $3
                    RETURNING *
                    "#,
                )
                .bind(format_date(next))
                .bind(Utc::now())
                .bind(id.to_string())
                .fetch_one(&mut *tx)
                .await?;
                info!(
                    %id,
                    from = %format_date(previous),
                    to = %format_date(next),
                    "recurring task rescheduled"
                );
                CompletionResult::Rescheduled { task: rescheduled, previous }
            }
        };

        tx.commit().await?;
        Ok(result)
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id.to_string())
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        info!(%id, "task deleted");
        Ok(())
    }
}
