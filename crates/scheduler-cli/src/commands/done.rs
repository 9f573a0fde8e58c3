use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use scheduler_core::models::CompletionResult;
use scheduler_core::repository::TaskRepository;

use crate::cli::DoneCommand;
use crate::util::resolve_task_id;

pub async fn done_task(repo: &(impl TaskRepository + Sync), command: DoneCommand, today: NaiveDate) -> Result<()> {
    let task_id = resolve_task_id(repo, &command.id).await?;

    match repo.complete_task(task_id, today).await? {
        CompletionResult::Deleted(task) => {
            println!("{} Completed task: {}", "✓".green().bold(), task.title);
        }
        CompletionResult::Rescheduled { task, previous } => {
            println!("{} Completed task: {}", "✓".green().bold(), task.title);
            println!(
                "  {} Rescheduled from {} to {}",
                "↻".blue(),
                previous.format("%Y-%m-%d"),
                task.date.format("%Y-%m-%d").to_string().cyan()
            );
        }
    }

    Ok(())
}
