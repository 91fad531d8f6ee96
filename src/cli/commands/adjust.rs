use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::models::source::EventSource;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{local_to_utc, parse_time};

/// Insert a compensating entrance/exit pair for one day.
///
/// Existing events are never updated or deleted; a correction is a
/// new pair tagged with the 'manual' source.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Adjust {
        date,
        start,
        end,
        employee,
        note,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let t_in = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
        let t_out = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

        if t_out <= t_in {
            return Err(AppError::InvalidTime(format!(
                "exit time {} must be after entrance time {}",
                end, start
            )));
        }

        let employee = employee.as_deref().unwrap_or(&cfg.employee);
        let note = match note.as_deref() {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => "manual adjustment".to_string(),
        };

        let local_in = d.and_time(t_in);
        let local_out = d.and_time(t_out);

        let ev_in = ClockEvent::new(
            employee,
            local_in,
            local_to_utc(local_in),
            EventKind::Entrance,
            &note,
            EventSource::Manual,
        );
        let ev_out = ClockEvent::new(
            employee,
            local_out,
            local_to_utc(local_out),
            EventKind::Exit,
            &note,
            EventSource::Manual,
        );

        let mut pool = DbPool::new(&cfg.database)?;

        // both rows or neither
        let tx = pool.conn.transaction()?;
        insert_event(&tx, &ev_in)?;
        insert_event(&tx, &ev_out)?;
        tx.commit()?;

        log::audit(
            &pool.conn,
            "adjust",
            employee,
            &format!("manual pair {} {} - {}", d, start, end),
        )?;

        success(format!(
            "Manual pair recorded for {} — {} - {}",
            d, start, end
        ));
    }

    Ok(())
}
