use chrono::NaiveDate;
use serde::Serialize;

/// Reconstructed attendance for one calendar day. Derived from the
/// event log on demand, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DayAttendance {
    pub date: NaiveDate,
    /// Formatted worked intervals, "HH:MM - HH:MM" or "HH:MM - ?"
    /// for an event left without its counterpart.
    pub intervals: Vec<String>,
    /// Sum of the paired intervals only, in hours (2 decimals).
    pub total_hours: f64,
}

impl DayAttendance {
    /// Join the intervals for display; an empty day renders as "—".
    pub fn intervals_joined(&self, separator: &str) -> String {
        if self.intervals.is_empty() {
            "—".to_string()
        } else {
            self.intervals.join(separator)
        }
    }
}
