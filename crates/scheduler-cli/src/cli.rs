use clap::{Args, Parser, Subcommand};

/// A personal task scheduler with recurring due dates
///
/// Recurrence rules: `d <days>` (1..400), `w <weekdays>` (1 = Monday .. 7 = Sunday),
/// `m <days> [<months>]` (days 1..31, -1 last, -2 second to last), `y` (yearly).
#[derive(Parser, Debug)]
#[command(name = "scheduler", author, version, about, long_about = None)]
pub struct Cli {
    /// Use this date as today (YYYYMMDD) instead of the system date
    #[arg(long, global = true, value_name = "YYYYMMDD")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List upcoming tasks ordered by due date
    List(ListCommand),
    /// Search tasks by text or by date (DD.MM.YYYY)
    Search(SearchCommand),
    /// Show a single task
    Show(ShowCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Mark a task as done: one-off tasks are removed, recurring tasks move on
    Done(DoneCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Compute the next occurrence of a rule without touching the database
    NextDate(NextDateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The due date (YYYYMMDD or e.g. "tomorrow"); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// The recurrence rule, e.g. "d 7" or "m 1,-1"
    #[arg(short, long)]
    pub repeat: Option<String>,
    /// A free-form comment
    #[arg(short, long)]
    pub comment: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListCommand {
    /// Maximum number of tasks to show
    #[arg(short, long)]
    pub limit: Option<u32>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Text to look for in titles and comments, or a date
    pub key: String,
    #[arg(short, long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// The ID (or a unique prefix) of the task
    pub id: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EditCommand {
    /// The ID (or a unique prefix) of the task to edit
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub repeat: Option<String>,
    /// Remove the recurrence rule (convert to one-off task)
    #[arg(long, conflicts_with = "repeat")]
    pub repeat_clear: bool,

    #[arg(long)]
    pub comment: Option<String>,
    #[arg(long, conflicts_with = "comment")]
    pub comment_clear: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DoneCommand {
    /// The ID (or a unique prefix) of the task
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID (or a unique prefix) of the task to delete
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NextDateCommand {
    /// Reference "today" (YYYYMMDD); defaults to the global today
    #[arg(long)]
    pub now: Option<String>,
    /// The current due date (YYYYMMDD)
    #[arg(long)]
    pub date: String,
    /// The recurrence rule
    #[arg(long)]
    pub repeat: String,
}
