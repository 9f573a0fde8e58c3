use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::parse_date;

use crate::cli::NextDateCommand;

/// Prints the next occurrence as `YYYYMMDD`. Pure: no database access.
pub fn next_date(command: NextDateCommand, today: NaiveDate) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(raw) => parse_date(raw).map_err(scheduler_core::CoreError::from)?,
        None => today,
    };
    let next = scheduler_core::next_date(now, &command.date, &command.repeat)
        .map_err(scheduler_core::CoreError::from)?;
    println!("{}", next);
    Ok(())
}
