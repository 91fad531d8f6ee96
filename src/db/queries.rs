use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::models::source::EventSource;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

const TS_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn map_row(row: &Row) -> Result<ClockEvent> {
    let local_str: String = row.get("local_ts")?;
    let utc_str: String = row.get("utc_ts")?;

    let local = NaiveDateTime::parse_from_str(&local_str, TS_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(local_str.clone())),
        )
    })?;

    let utc = NaiveDateTime::parse_from_str(&utc_str, TS_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(utc_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventKind(kind_str.clone())),
        )
    })?;

    let source_str: String = row.get("source")?;
    let source = EventSource::from_db_str(&source_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidSource(source_str.clone())),
        )
    })?;

    Ok(ClockEvent {
        id: row.get("id")?,
        employee: row.get("employee")?,
        local,
        utc,
        kind,
        note: row.get::<_, Option<String>>("note")?.unwrap_or_default(),
        source,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO clock_events (employee, local_ts, utc_ts, kind, note, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.employee,
            ev.local_str(),
            ev.utc_str(),
            ev.kind.to_db_str(),
            ev.note,
            ev.source.to_db_str(),
            ev.created_at,
        ],
    )?;
    Ok(())
}

/// The fetchEvents(subject, limit) boundary: newest first.
pub fn load_recent_events(
    pool: &mut DbPool,
    employee: &str,
    limit: usize,
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM clock_events
         WHERE employee = ?1
         ORDER BY local_ts DESC
         LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![employee, limit as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every event for one employee, oldest first.
pub fn load_all_events(pool: &mut DbPool, employee: &str) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM clock_events
         WHERE employee = ?1
         ORDER BY local_ts ASC",
    )?;

    let rows = stmt.query_map(params![employee], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Events with a local date inside the inclusive range, oldest first.
pub fn load_events_between(
    pool: &mut DbPool,
    employee: &str,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM clock_events
         WHERE employee = ?1
           AND date(local_ts) >= ?2
           AND date(local_ts) <= ?3
         ORDER BY local_ts ASC",
    )?;

    let start_str = start.format("%Y-%m-%d").to_string();
    let end_str = end.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map(params![employee, start_str, end_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
