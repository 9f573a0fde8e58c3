use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::repository::TaskRepository;

use crate::cli::ShowCommand;
use crate::util::resolve_task;
use crate::views::table::display_task_details;

pub async fn show_task(repo: &(impl TaskRepository + Sync), command: ShowCommand, today: NaiveDate) -> Result<()> {
    let task = resolve_task(repo, &command.id).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        display_task_details(&task, today);
    }

    Ok(())
}
