//! # Scheduler Core Library
//!
//! Date resolution for a personal task planner and the SQLite store that
//! applies it.
//!
//! A task carries a due date in `YYYYMMDD` form and an optional recurrence
//! rule (`d 7`, `w 1,3`, `m 1,-1`, `m 15 3,9`, `y`). Completing a recurring
//! task moves it to the next occurrence of its rule; completing a one-off
//! task removes it.
//!
//! ## Core Modules
//!
//! - [`recurrence`]: rule parsing and next-occurrence computation
//! - [`date`]: the `YYYYMMDD` wire format
//! - [`db`]: Database connection and migration management
//! - [`models`]: Core data structures and transfer objects
//! - [`repository`]: Data access layer with Repository pattern
//! - [`query`]: search key parsing
//! - [`error`]: error types of every layer
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use scheduler_core::{
//!     db, models::NewTaskData, repository::{SqliteRepository, TaskRepository},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::establish_connection("scheduler.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!     let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//!
//!     let task = repo
//!         .add_task(
//!             NewTaskData {
//!                 title: "Water plants".to_string(),
//!                 repeat: "d 3".to_string(),
//!                 ..Default::default()
//!             },
//!             today,
//!         )
//!         .await?;
//!     println!("{} is due {}", task.title, task.date);
//!
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod recurrence;
pub mod repository;

pub use date::{format_date, parse_date};
pub use error::{CoreError, DateError, RecurrenceError};
pub use recurrence::{
    next_date, next_occurrence, resolve_completion, resolve_initial_date, validate_rule,
    CompletionOutcome, RecurrenceRule,
};
