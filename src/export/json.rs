use crate::models::event::ClockEvent;

/// Write the events as pretty-printed JSON.
pub fn write_json(path: &str, events: &[ClockEvent]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(events).unwrap();
    std::fs::write(path, json)
}
