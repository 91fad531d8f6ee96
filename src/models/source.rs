use serde::Serialize;

/// How a clock event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventSource {
    Cli,    // plain CLI clock-in/out
    Geo,    // geolocation-gated clock-in
    Qr,     // QR presence-token clock-in
    Manual, // compensating adjustment pair
}

impl EventSource {
    pub fn code(&self) -> &str {
        match self {
            EventSource::Cli => "cli",
            EventSource::Geo => "geo",
            EventSource::Qr => "qr",
            EventSource::Manual => "manual",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "cli" => Some(EventSource::Cli),
            "geo" => Some(EventSource::Geo),
            "qr" => Some(EventSource::Qr),
            "manual" => Some(EventSource::Manual),
            _ => None,
        }
    }
}
