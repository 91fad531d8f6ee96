//! Weekly attendance reconstruction from the raw event log.
//!
//! Pairing is a greedy single pass over the day's events in time
//! order: an Entrance immediately followed by an Exit forms a worked
//! interval, anything else is shown as "HH:MM - ?" and counts zero.
//! Dirty data (odd counts, Exit before Entrance) degrades the output
//! but never fails it, so attendance review stays usable.

use crate::models::day_attendance::DayAttendance;
use crate::models::event::ClockEvent;
use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the ISO week containing `d`.
pub fn iso_week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

/// The 7 dates of the ISO week containing `d`, Monday through Sunday.
pub fn week_dates(d: NaiveDate) -> Vec<NaiveDate> {
    let start = iso_week_start(d);
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// Pair one day's events into formatted intervals and a total.
///
/// Returns the interval strings in time order and the summed hours of
/// the successfully paired intervals, rounded to 2 decimals. Unpaired
/// events are kept visible but contribute nothing to the total.
pub fn pair_and_sum(events: &[ClockEvent]) -> (Vec<String>, f64) {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.local);

    let mut intervals = Vec::new();
    let mut total_seconds: i64 = 0;

    let mut i = 0;
    while i < sorted.len() {
        let ev = &sorted[i];

        if ev.kind.is_entrance()
            && i + 1 < sorted.len()
            && sorted[i + 1].kind.is_exit()
        {
            let out = &sorted[i + 1];
            intervals.push(format!(
                "{} - {}",
                ev.local.format("%H:%M"),
                out.local.format("%H:%M")
            ));
            total_seconds += (out.local - ev.local).num_seconds();
            i += 2;
            continue;
        }

        // unmatched or out-of-order event
        intervals.push(format!("{} - ?", ev.local.format("%H:%M")));
        i += 1;
    }

    let total_hours = (total_seconds as f64 / 3600.0 * 100.0).round() / 100.0;
    (intervals, total_hours)
}

/// One row per day of the week, in Monday→Sunday order, whether or
/// not any events exist for that day.
pub fn reconstruct_week(events: &[ClockEvent], week: &[NaiveDate]) -> Vec<DayAttendance> {
    week.iter()
        .map(|d| {
            let day_events: Vec<ClockEvent> = events
                .iter()
                .filter(|e| e.local_date() == *d)
                .cloned()
                .collect();

            let (intervals, total_hours) = pair_and_sum(&day_events);

            DayAttendance {
                date: *d,
                intervals,
                total_hours,
            }
        })
        .collect()
}
