use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crate::error::{BotError, BotResult};

/// Time used when the user gives a reminder date but skips the time.
pub fn default_reminder_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Parses a reminder date in `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> BotResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| BotError::InvalidFormat {
        input: input.trim().to_string(),
        expected: "date (YYYY-MM-DD)",
    })
}

/// Parses a 24-hour reminder time, `HH:MM` or `HH:MM:SS`.
pub fn parse_time(input: &str) -> BotResult<NaiveTime> {
    let s = input.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| BotError::InvalidFormat {
            input: s.to_string(),
            expected: "time (HH:MM)",
        })
}

/// Long-form rendering, e.g. "Tuesday, 01 July 2025 14:30".
pub fn format_reminder(at: NaiveDateTime) -> String {
    at.format("%A, %d %B %Y %H:%M").to_string()
}
