use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;

/// Print the internal audit log table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&mut pool)?;

        if rows.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        for (date, operation, message) in rows {
            println!("{} | {:<10} | {}", date, operation, message);
        }
    }
    Ok(())
}
