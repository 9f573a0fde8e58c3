use clap::Parser;
use owo_colors::{OwoColorize, Style};
use scheduler_core::db;
use scheduler_core::error::{CoreError, DateError, RecurrenceError};
use scheduler_core::repository::SqliteRepository;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let config = config::Config::new().unwrap_or_default();
    init_tracing(&config.log_filter);

    let cli = cli::Cli::parse();

    if let Err(e) = run(cli, &config).await {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

async fn run(cli: cli::Cli, config: &config::Config) -> anyhow::Result<()> {
    // Captured once; every date decision of this invocation uses it.
    let today = parser::resolve_today(cli.today.as_deref())?;

    // next-date is pure and never opens the database.
    let command = match cli.command {
        cli::Commands::NextDate(command) => return commands::next_date::next_date(command, today),
        command => command,
    };

    let db_pool = db::establish_connection(&config.database_path).await?;
    let repository = SqliteRepository::new(db_pool.clone());
    tracing::debug!(%today, db = %config.database_path, "running command");

    let result = match command {
        cli::Commands::Add(command) => commands::add::add_task(&repository, command, today).await,
        cli::Commands::List(command) => {
            commands::list::list_tasks(&repository, command, config, today).await
        }
        cli::Commands::Search(command) => {
            commands::search::search_tasks(&repository, command, config, today).await
        }
        cli::Commands::Show(command) => commands::show::show_task(&repository, command, today).await,
        cli::Commands::Edit(command) => commands::edit::edit_task(&repository, command, today).await,
        cli::Commands::Done(command) => commands::done::done_task(&repository, command, today).await,
        cli::Commands::Delete(command) => commands::delete::delete_task(&repository, command).await,
        cli::Commands::NextDate(command) => commands::next_date::next_date(command, today),
    };

    db_pool.close().await;
    result
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} Task not found: {}", "Error:".style(error_style), s);
            }
            CoreError::AmbiguousId(tasks) => {
                eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
                eprintln!("Did you mean one of these?");
                for (id, title) in tasks {
                    eprintln!("  {} ({})", id.yellow(), title);
                }
            }
            CoreError::MissingTitle => {
                eprintln!("{} A task needs a title.", "Error:".style(error_style));
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::Date(DateError::InvalidDate(s)) => {
                eprintln!(
                    "{} Invalid date '{}'. Use YYYYMMDD or a phrase like 'tomorrow'.",
                    "Error:".style(error_style),
                    s.yellow()
                );
            }
            CoreError::Recurrence(RecurrenceError::InvalidRule(s))
            | CoreError::Date(DateError::Recurrence(RecurrenceError::InvalidRule(s))) => {
                eprintln!(
                    "{} Invalid recurrence rule '{}'. Expected 'd <1-400>', 'w <1-7,..>', 'm <days> [<months>]' or 'y'.",
                    "Error:".style(error_style),
                    s.yellow()
                );
            }
            CoreError::Database(e) => {
                eprintln!("{} Database error: {}", "Error:".style(error_style), e);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), core_error),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
