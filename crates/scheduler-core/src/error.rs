use thiserror::Error;

/// Failures of rule parsing and next-occurrence computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Invalid recurrence rule: '{0}'")]
    InvalidRule(String),

    /// A forward search produced a date that is not after today. Always a defect.
    #[error("Computed occurrence {found} is not after today ({today})")]
    PastResult { found: String, today: String },

    #[error("Recurrence rule '{0}' never produces an occurrence")]
    NoOccurrence(String),
}

/// Failures of initial date assignment for created or edited tasks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: '{0}' (expected YYYYMMDD)")]
    InvalidDate(String),

    #[error("Date {date} is before today ({today})")]
    DateInPast { date: String, today: String },

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Ambiguous short ID. Did you mean one of these?")]
    AmbiguousId(Vec<(String, String)>), // Vec of (ID, Title)

    #[error("Task title is missing")]
    MissingTitle,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
}

impl From<crate::date::ParseDateError> for DateError {
    fn from(err: crate::date::ParseDateError) -> Self {
        DateError::InvalidDate(err.0)
    }
}

impl From<crate::date::ParseDateError> for CoreError {
    fn from(err: crate::date::ParseDateError) -> Self {
        CoreError::Date(err.into())
    }
}
