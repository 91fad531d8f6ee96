use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::token::{TokenSpec, now_epoch};
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::models::source::EventSource;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{local_to_utc, parse_optional_time};
use chrono::Local;

/// Record a single immutable clock event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        kind,
        date,
        at,
        employee,
        note,
        geo,
        qr_payload,
    } = cmd
    {
        //
        // 1. Parse kind (mandatory, exactly two values)
        //
        let kind = EventKind::from_code(kind)
            .ok_or_else(|| AppError::InvalidEventKind(kind.to_string()))?;

        //
        // 2. Resolve the source tag, validating the QR payload first
        //
        let source = if let Some(payload) = qr_payload {
            let spec = TokenSpec::new(&cfg.qr_secret()?, cfg.qr_period_hours, cfg.qr_skew)?;
            if !spec.is_payload_valid(payload, now_epoch()) {
                return Err(AppError::TokenRejected(
                    "payload is not in the currently valid window set".to_string(),
                ));
            }
            EventSource::Qr
        } else if *geo {
            EventSource::Geo
        } else {
            EventSource::Cli
        };

        //
        // 3. Parse date and time (default: now)
        //
        let d = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let t = match parse_optional_time(at.as_ref())? {
            Some(t) => t,
            None => Local::now().time(),
        };

        let local = d.and_time(t);
        let utc = local_to_utc(local);

        //
        // 4. Build and insert the event
        //
        let employee = employee.as_deref().unwrap_or(&cfg.employee);
        let note = note.as_deref().unwrap_or("");

        let ev = ClockEvent::new(employee, local, utc, kind, note, source);

        let mut pool = DbPool::new(&cfg.database)?;
        insert_event(&pool.conn, &ev)?;

        log::audit(
            &pool.conn,
            "clock",
            ev.kind.to_db_str(),
            &format!(
                "{} {} at {} (source={})",
                employee,
                ev.kind.to_db_str(),
                ev.local_str(),
                source.code()
            ),
        )?;

        match kind {
            EventKind::Entrance => success(format!("Entrance recorded — {}", ev.local_str())),
            EventKind::Exit => success(format!("Exit recorded — {}", ev.local_str())),
        }
    }

    Ok(())
}
