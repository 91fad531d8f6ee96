use serde::Serialize;

/// Kind of a clock event. Exactly two values exist; anything else
/// read from the outside world is rejected at construction.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    Entrance,
    Exit,
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Entrance => "in",
            EventKind::Exit => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(EventKind::Entrance),
            "out" => Some(EventKind::Exit),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        EventKind::from_db_str(&code.to_lowercase())
    }

    pub fn is_entrance(&self) -> bool {
        matches!(self, EventKind::Entrance)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, EventKind::Exit)
    }
}
