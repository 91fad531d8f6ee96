use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `clock_events` table exists.
fn clock_events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='clock_events'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `clock_events` table.
///
/// Events are append-only: there is no UPDATE path anywhere in the
/// code, corrections enter as compensating 'manual' rows.
fn create_clock_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clock_events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            employee   TEXT NOT NULL,
            local_ts   TEXT NOT NULL,
            utc_ts     TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('in','out')),
            note       TEXT DEFAULT '',
            source     TEXT NOT NULL DEFAULT 'cli'
                       CHECK(source IN ('cli','geo','qr','manual')),
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_clock_events_employee_local
            ON clock_events(employee, local_ts);
        CREATE INDEX IF NOT EXISTS idx_clock_events_employee_kind
            ON clock_events(employee, kind);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and safe to call on every startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure clock_events table exists
    if !clock_events_table_exists(conn)? {
        create_clock_events_table(conn)?;
        success("Created clock_events table.");

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', 'clock_events', 'Created clock_events table')",
            [],
        )?;
    } else {
        // keep indexes aligned on older databases
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_clock_events_employee_local
                ON clock_events(employee, local_ts);
            CREATE INDEX IF NOT EXISTS idx_clock_events_employee_kind
                ON clock_events(employee, kind);
            "#,
        )?;
    }

    Ok(())
}
