use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_recent_events;
use crate::errors::AppResult;

/// List raw clock events, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { employee, limit } = cmd {
        let employee = employee.as_deref().unwrap_or(&cfg.employee);

        let mut pool = DbPool::new(&cfg.database)?;
        let events = load_recent_events(&mut pool, employee, *limit)?;

        if events.is_empty() {
            println!("No events for {}", employee);
            return Ok(());
        }

        println!("EVENTS ({}):", employee);
        for ev in &events {
            println!(
                "- {} | {} | source={} | note={}",
                ev.local_str(),
                ev.kind.to_db_str(),
                ev.source.code(),
                ev.note,
            );
        }
    }
    Ok(())
}
