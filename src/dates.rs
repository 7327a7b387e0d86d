use crate::api::Error;
use crate::model::DateRange;
use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;

lazy_static! {
    static ref DATE_FORMAT: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Default start of the reporting period: the month preceding `today`, keeping today's
/// day-of-month. The result is not checked against the calendar (`2022-03-31` gives
/// `2022-02-31`).
pub fn default_start(today: NaiveDate) -> String {
    let last_month = today.with_day(1).unwrap_or(today) - Duration::days(1);
    format!("{}-{}", last_month.format("%Y-%m"), today.format("%d"))
}

pub fn default_end(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

fn validate(field: &str, date: &str) -> Result<(), Error> {
    if DATE_FORMAT.is_match(date) {
        Ok(())
    } else {
        Err(Error::ValidationError(format!(
            "{} date needs to be in the form YYYY-MM-DD",
            field
        )))
    }
}

/// Resolve the reporting period from optional `start`/`end` arguments, defaulting relative to
/// `today`.
pub fn resolve(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
) -> Result<DateRange, Error> {
    let start = start.map_or_else(|| default_start(today), str::to_owned);
    let end = end.map_or_else(|| default_end(today), str::to_owned);

    validate("Start", &start)?;
    validate("End", &end)?;

    log::debug!("reporting period: {} .. {}", start, end);

    Ok(DateRange { start, end })
}
