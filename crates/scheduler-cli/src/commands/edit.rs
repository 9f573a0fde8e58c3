use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use scheduler_core::error::CoreError;
use scheduler_core::models::UpdateTaskData;
use scheduler_core::repository::TaskRepository;

use crate::cli::EditCommand;
use crate::parser::parse_cli_date;
use crate::util::resolve_task_id;

pub async fn edit_task(repo: &(impl TaskRepository + Sync), command: EditCommand, today: NaiveDate) -> Result<()> {
    let task_id = resolve_task_id(repo, &command.id).await?;

    let date = command
        .date
        .as_deref()
        .map(|d| parse_cli_date(d, today))
        .transpose()?;

    let repeat = if command.repeat_clear {
        Some(String::new())
    } else {
        command.repeat
    };

    let comment = if command.comment_clear {
        Some(String::new())
    } else {
        command.comment
    };

    let update_data = UpdateTaskData {
        title: command.title,
        date,
        repeat,
        comment,
    };

    if update_data.is_empty() {
        return Err(anyhow!(CoreError::InvalidInput(
            "Nothing to update. Pass at least one of --title, --date, --repeat or --comment.".to_string()
        )));
    }

    let updated_task = repo.update_task(task_id, update_data, today).await?;

    println!("Updated task with ID: {}", updated_task.id);
    println!(
        "  Due: {}{}",
        updated_task.date.format("%Y-%m-%d").to_string().cyan(),
        if updated_task.is_recurring() {
            format!(", repeats {}", updated_task.repeat)
        } else {
            String::new()
        }
    );

    Ok(())
}
