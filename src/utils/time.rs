//! Time utilities: parsing HH:MM, local→UTC conversion, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime, NaiveTime, Offset};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Convert a naive local timestamp to its UTC counterpart using the
/// current local offset (good enough for wall-clock attendance data).
pub fn local_to_utc(local: NaiveDateTime) -> NaiveDateTime {
    let offset_secs = Local::now().offset().fix().local_minus_utc() as i64;
    local - chrono::Duration::seconds(offset_secs)
}
