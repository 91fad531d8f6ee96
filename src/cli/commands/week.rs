use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::{reconstruct_week, week_dates};
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::formatting::hours2str;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

/// Show the reconstructed attendance for the week containing the
/// reference date (Monday → Sunday, one row per day).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date, employee } = cmd {
        let reference = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let employee = employee.as_deref().unwrap_or(&cfg.employee);

        let week = week_dates(reference);
        let (first, last) = (week[0], week[6]);

        let mut pool = DbPool::new(&cfg.database)?;
        let events = load_events_between(&mut pool, employee, &first, &last)?;

        let days = reconstruct_week(&events, &week);

        println!(
            "Week {} for {} ({} to {})",
            reference.iso_week().week(),
            employee,
            first,
            last
        );
        println!();

        let mut table = Table::new(vec![
            Column {
                header: "Date".to_string(),
                width: 14,
            },
            Column {
                header: "Intervals".to_string(),
                width: 40,
            },
            Column {
                header: "Hours".to_string(),
                width: 6,
            },
        ]);

        let mut week_total = 0.0;
        for day in &days {
            week_total += day.total_hours;
            table.add_row(vec![
                date::short_weekday_date(day.date, false),
                day.intervals_joined(&cfg.separator_char),
                hours2str(day.total_hours),
            ]);
        }

        print!("{}", table.render());
        println!();
        println!("Total: {} h", hours2str(week_total));
    }

    Ok(())
}
