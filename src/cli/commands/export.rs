use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_events, load_events_between};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::event::ClockEvent;
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Export clock events to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        employee,
        range,
        force,
    } = cmd
    {
        let employee = employee.as_deref().unwrap_or(&cfg.employee);

        let path = expand_tilde(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "file {} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let events = load_for_range(&mut pool, employee, range)?;

        let path_str = path.to_string_lossy().to_string();
        match format {
            ExportFormat::Csv => csv::write_csv(&path_str, &events)?,
            ExportFormat::Json => json::write_json(&path_str, &events)?,
        }

        notify_export_success(format.as_str(), &path);
    }

    Ok(())
}

fn load_for_range(
    pool: &mut DbPool,
    employee: &str,
    range: &Option<String>,
) -> AppResult<Vec<ClockEvent>> {
    let Some(r) = range else {
        // no filter: everything, oldest first for a readable dump
        return load_all_events(pool, employee);
    };

    let dates = if let Some((start, end)) = r.split_once(':') {
        date::generate_range(start.trim(), end.trim()).map_err(AppError::InvalidDate)?
    } else {
        date::generate_from_period(r).map_err(AppError::InvalidDate)?
    };

    let (first, last) = match (dates.first(), dates.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Err(AppError::InvalidDate(r.clone())),
    };

    load_events_between(pool, employee, &first, &last)
}
