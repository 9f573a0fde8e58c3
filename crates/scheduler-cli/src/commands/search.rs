use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::query::SearchQuery;
use scheduler_core::repository::TaskRepository;

use crate::cli::SearchCommand;
use crate::config::Config;
use crate::views::table::display_tasks;

pub async fn search_tasks(
    repo: &(impl TaskRepository + Sync),
    command: SearchCommand,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let query = SearchQuery::parse(&command.key)?;
    let limit = command.limit.unwrap_or(config.list_limit);
    let tasks = repo.search_tasks(&query, limit).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        display_tasks(&tasks, today);
    }

    Ok(())
}
