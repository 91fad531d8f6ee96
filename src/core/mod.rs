pub mod attendance;
pub mod token;
