use crate::models::event::ClockEvent;
use csv::Writer;

/// Write the events as CSV to the given file.
pub fn write_csv(path: &str, events: &[ClockEvent]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["employee", "local_ts", "utc_ts", "kind", "source", "note"])?;

    for ev in events {
        wtr.write_record(&[
            ev.employee.clone(),
            ev.local_str(),
            ev.utc_str(),
            ev.kind.to_db_str().to_string(),
            ev.source.to_db_str().to_string(),
            ev.note.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
