pub mod adjust;
pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod qr;
pub mod week;
