pub mod day_attendance;
pub mod event;
pub mod event_kind;
pub mod source;
