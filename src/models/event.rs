use super::{event_kind::EventKind, source::EventSource};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A single immutable clock event. Rows are only ever inserted:
/// corrections are compensating `manual` pairs, never updates.
#[derive(Debug, Clone, Serialize)]
pub struct ClockEvent {
    pub id: i32,
    pub employee: String,      // ⇔ clock_events.employee
    pub local: NaiveDateTime,  // ⇔ clock_events.local_ts ("YYYY-MM-DD HH:MM:SS")
    pub utc: NaiveDateTime,    // ⇔ clock_events.utc_ts   ("YYYY-MM-DD HH:MM:SS", UTC)
    pub kind: EventKind,       // ⇔ clock_events.kind ('in' | 'out')
    pub note: String,          // ⇔ clock_events.note
    pub source: EventSource,   // ⇔ clock_events.source ('cli','geo','qr','manual')
    pub created_at: String,    // ⇔ clock_events.created_at (ISO8601)
}

impl ClockEvent {
    /// High-level constructor for events created by the CLI.
    /// - `id = 0` until the row is inserted
    /// - `created_at = now() in ISO8601`
    pub fn new(
        employee: &str,
        local: NaiveDateTime,
        utc: NaiveDateTime,
        kind: EventKind,
        note: &str,
        source: EventSource,
    ) -> Self {
        Self {
            id: 0,
            employee: employee.to_string(),
            local,
            utc,
            kind,
            note: note.to_string(),
            source,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Calendar day the event belongs to (local clock).
    pub fn local_date(&self) -> NaiveDate {
        self.local.date()
    }

    pub fn local_time(&self) -> NaiveTime {
        self.local.time()
    }

    pub fn local_str(&self) -> String {
        self.local.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn utc_str(&self) -> String {
        self.utc.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
