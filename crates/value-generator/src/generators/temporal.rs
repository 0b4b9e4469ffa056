//! Date, time and datetime generators.
//!
//! All temporal values are drawn with second precision so they survive the
//! `YYYY-MM-DD HH:MM:SS` rendering unchanged.

use crate::GeneratorError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rand::Rng;

/// Generate a random date in `[start, end]`.
pub fn date_range<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<NaiveDate, GeneratorError> {
    if end < start {
        return Err(GeneratorError::InvalidBounds(format!(
            "date_range end {end} is before start {start}"
        )));
    }
    let days = (end - start).num_days();
    Ok(start + Duration::days(rng.random_range(0..=days)))
}

/// Generate a random time of day in `[start, end]`.
pub fn time_range<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<NaiveTime, GeneratorError> {
    if end < start {
        return Err(GeneratorError::InvalidBounds(format!(
            "time_range end {end} is before start {start}"
        )));
    }
    let secs = rng.random_range(start.num_seconds_from_midnight()..=end.num_seconds_from_midnight());
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
        .ok_or_else(|| GeneratorError::InvalidBounds(format!("{secs} seconds past midnight")))
}

/// Generate a random datetime in `[start, end]`.
pub fn datetime_range<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<NaiveDateTime, GeneratorError> {
    if end < start {
        return Err(GeneratorError::InvalidBounds(format!(
            "datetime_range end {end} is before start {start}"
        )));
    }
    let start = start.with_nanosecond(0).unwrap_or(start);
    let seconds = (end - start).num_seconds();
    Ok(start + Duration::seconds(rng.random_range(0..=seconds)))
}
