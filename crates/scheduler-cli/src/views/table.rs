use chrono::{Duration, NaiveDate};
use chrono_humanize::{Accuracy, HumanTime, Tense};
use comfy_table::{Attribute, Cell, Color, Row, Table};
use scheduler_core::models::Task;

/// Relative due text, counted in whole days from `today`.
pub fn relative_due(date: NaiveDate, today: NaiveDate) -> String {
    let days = (date - today).num_days();
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        _ => {
            let tense = if days > 0 { Tense::Future } else { Tense::Past };
            HumanTime::from(Duration::days(days.abs())).to_text_en(Accuracy::Rough, tense)
        }
    }
}

fn due_cell(task: &Task, today: NaiveDate) -> Cell {
    let text = format!(
        "{} ({})",
        task.date.format("%Y-%m-%d"),
        relative_due(task.date, today)
    );
    if task.date < today {
        Cell::new(text).fg(Color::Red) // Overdue
    } else if task.date == today {
        Cell::new(text).fg(Color::Yellow) // Due today
    } else {
        Cell::new(text)
    }
}

pub fn display_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Due", "Repeat", "Comment"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.id.to_string()[..8]));

        let mut title = String::new();
        if task.is_recurring() {
            title.push('↻');
            title.push(' ');
        }
        title.push_str(&task.title);
        let title_cell = if task.date < today {
            Cell::new(title).add_attribute(Attribute::Bold)
        } else {
            Cell::new(title)
        };
        row.add_cell(title_cell);

        row.add_cell(due_cell(task, today));
        row.add_cell(Cell::new(if task.repeat.is_empty() { "-" } else { task.repeat.as_str() }));
        row.add_cell(Cell::new(&task.comment));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_task_details(task: &Task, today: NaiveDate) {
    let mut table = Table::new();
    table.add_row(vec![Cell::new("ID").add_attribute(Attribute::Bold), Cell::new(task.id)]);
    table.add_row(vec![Cell::new("Title").add_attribute(Attribute::Bold), Cell::new(&task.title)]);
    table.add_row(vec![Cell::new("Due").add_attribute(Attribute::Bold), due_cell(task, today)]);

    let repeat = match task.rule() {
        Ok(rule) if !rule.is_none() => format!("{} ({})", task.repeat, rule.kind()),
        Ok(_) => "none".to_string(),
        Err(_) => format!("{} (invalid)", task.repeat),
    };
    table.add_row(vec![Cell::new("Repeat").add_attribute(Attribute::Bold), Cell::new(repeat)]);
    table.add_row(vec![Cell::new("Comment").add_attribute(Attribute::Bold), Cell::new(&task.comment)]);
    table.add_row(vec![
        Cell::new("Created").add_attribute(Attribute::Bold),
        Cell::new(task.created_at.format("%Y-%m-%d %H:%M UTC")),
    ]);
    table.add_row(vec![
        Cell::new("Updated").add_attribute(Attribute::Bold),
        Cell::new(task.updated_at.format("%Y-%m-%d %H:%M UTC")),
    ]);

    println!("{table}");
}
