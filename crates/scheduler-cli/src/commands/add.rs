use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};
use scheduler_core::models::NewTaskData;
use scheduler_core::repository::TaskRepository;

use crate::cli::AddCommand;
use crate::parser::parse_cli_date;
use crate::views::table::relative_due;

pub async fn add_task(repo: &(impl TaskRepository + Sync), command: AddCommand, today: NaiveDate) -> Result<()> {
    let date = command
        .date
        .as_deref()
        .map(|d| parse_cli_date(d, today))
        .transpose()?;

    let new_task_data = NewTaskData {
        title: command.title,
        date,
        repeat: command.repeat.unwrap_or_default(),
        comment: command.comment.unwrap_or_default(),
    };

    let added_task = repo.add_task(new_task_data, today).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        added_task.title.bright_white().bold()
    );
    println!(
        "  {} Task ID: {}",
        "→".style(info_style),
        added_task.id.to_string().yellow()
    );
    println!(
        "  {} Due: {} ({})",
        "→".style(info_style),
        added_task.date.format("%Y-%m-%d").to_string().cyan(),
        relative_due(added_task.date, today)
    );
    if added_task.is_recurring() {
        println!("  {} Repeats: {}", "→".style(info_style), added_task.repeat.cyan());
    }

    Ok(())
}
