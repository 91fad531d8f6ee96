//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render an hour total with 2 decimals, e.g. "8.00".
pub fn hours2str(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Returns a textual description and an ANSI color for a source tag.
pub fn describe_source(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "cli" => ("Command line".into(), "\x1b[34m"),
        "geo" => ("Geolocation".into(), "\x1b[36m"),
        "qr" => ("QR token".into(), "\x1b[33m"),
        "manual" => ("Manual adjustment".into(), "\x1b[35m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
