use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::repository::TaskRepository;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::views::table::display_tasks;

pub async fn list_tasks(
    repo: &(impl TaskRepository + Sync),
    command: ListCommand,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let limit = command.limit.unwrap_or(config.list_limit);
    let tasks = repo.list_tasks(limit).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        display_tasks(&tasks, today);
    }

    Ok(())
}
