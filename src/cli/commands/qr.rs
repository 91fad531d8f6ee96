use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::token::{TokenSpec, now_epoch};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Show the current presence payload, or check a presented one.
///
/// A rejected payload is a normal outcome reported on stdout, not a
/// process error; only a missing secret or a bad period fails.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Qr { show, check } = cmd {
        let spec = TokenSpec::new(&cfg.qr_secret()?, cfg.qr_period_hours, cfg.qr_skew)?;
        let now = now_epoch();

        if let Some(payload) = check {
            if spec.is_payload_valid(payload, now) {
                success("Payload accepted");
            } else {
                warning("Payload rejected");
            }
            return Ok(());
        }

        if *show {
            println!("Payload: {}", spec.payload(now));
            println!(
                "Window:  #{} (rotates every {} h, ±{} accepted)",
                spec.window_counter(now),
                spec.period_hours(),
                spec.skew()
            );
        }
    }

    Ok(())
}
