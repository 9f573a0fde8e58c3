use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use chrono_english::{parse_date_string, Dialect};
use scheduler_core::error::{CoreError, DateError};
use scheduler_core::{format_date, parse_date};

/// Turns a date typed on the command line into `YYYYMMDD`.
///
/// Eight digits are taken as `YYYYMMDD`; anything else is read as English
/// relative to `today` ("tomorrow", "next friday", "3 days").
pub fn parse_cli_date(input: &str, today: NaiveDate) -> Result<String> {
    let input = input.trim();
    if input.len() == 8 && input.bytes().all(|b| b.is_ascii_digit()) {
        let date = parse_date(input).map_err(|e| anyhow!(CoreError::from(e)))?;
        return Ok(format_date(date));
    }

    let base = today
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| anyhow!("Failed to build a reference time for '{}'", input))?
        .and_utc();

    parse_date_string(input, base, Dialect::Uk)
        .map(|parsed| format_date(parsed.date_naive()))
        .map_err(|_| anyhow!(CoreError::Date(DateError::InvalidDate(input.to_string()))))
}

/// Today's date, from `--today` when given.
pub fn resolve_today(flag: Option<&str>) -> Result<NaiveDate> {
    match flag {
        Some(raw) => Ok(parse_date(raw).map_err(|e| anyhow!(CoreError::from(e)))?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
