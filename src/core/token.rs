//! Rotating presence token.
//!
//! The code changes every `period_hours` and is derived from
//! HMAC-SHA256 over a time-bucket counter, so the generator and the
//! validator only need to share the secret and a roughly synchronized
//! clock. No state is persisted; a code "expires" when the counter
//! advances past the accepted skew.

use crate::errors::{AppError, AppResult};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Truncated token length: short enough to stay legible in a QR,
/// long enough (72 bits of the MAC) to be unguessable.
pub const TOKEN_LEN: usize = 12;

/// Fixed marker so foreign QR payloads are rejected outright.
pub const PAYLOAD_PREFIX: &str = "FICHAJE:";

/// Validated token parameters: shared secret, rotation period and
/// accepted clock skew (in whole windows).
#[derive(Debug, Clone)]
pub struct TokenSpec {
    secret: String,
    period_hours: i64,
    skew: i64,
}

impl TokenSpec {
    /// Fails fast on bad configuration: an empty secret or a
    /// non-positive period is never silently substituted.
    pub fn new(secret: &str, period_hours: i64, skew: i64) -> AppResult<Self> {
        if secret.trim().is_empty() {
            return Err(AppError::MissingSecret);
        }
        if period_hours <= 0 {
            return Err(AppError::InvalidPeriod(period_hours));
        }
        if skew < 0 {
            return Err(AppError::Config(format!("negative QR skew: {}", skew)));
        }
        Ok(Self {
            secret: secret.to_string(),
            period_hours,
            skew,
        })
    }

    pub fn period_hours(&self) -> i64 {
        self.period_hours
    }

    pub fn skew(&self) -> i64 {
        self.skew
    }

    /// Which rotation window `epoch_secs` falls into.
    pub fn window_counter(&self, epoch_secs: i64) -> i64 {
        epoch_secs.div_euclid(self.period_hours * 3600)
    }

    fn token_for_counter(&self, counter: i64) -> String {
        // HMAC-SHA256 accepts any key length, so this cannot fail
        let mut mac =
            HmacSha256::new_from_slice(self.secret.as_bytes()).expect("HMAC key");
        mac.update(counter.to_string().as_bytes());
        let digest = mac.finalize().into_bytes();

        let mut code = URL_SAFE_NO_PAD.encode(digest);
        code.truncate(TOKEN_LEN);
        code
    }

    /// Deterministic code for the window containing `epoch_secs`.
    pub fn current_token(&self, epoch_secs: i64) -> String {
        self.token_for_counter(self.window_counter(epoch_secs))
    }

    /// Codes accepted at `epoch_secs`: current window ± skew,
    /// `2*skew+1` codes in counter order.
    pub fn valid_tokens(&self, epoch_secs: i64) -> Vec<String> {
        let counter = self.window_counter(epoch_secs);
        (counter - self.skew..=counter + self.skew)
            .map(|c| self.token_for_counter(c))
            .collect()
    }

    /// Full payload as embedded in the QR image.
    pub fn payload(&self, epoch_secs: i64) -> String {
        format!("{}{}", PAYLOAD_PREFIX, self.current_token(epoch_secs))
    }

    /// Check a presented payload. Malformed input (wrong prefix, empty
    /// remainder, unknown code) is reported as `false`, never an error.
    pub fn is_payload_valid(&self, payload: &str, epoch_secs: i64) -> bool {
        let Some(rest) = payload.strip_prefix(PAYLOAD_PREFIX) else {
            return false;
        };
        let code = rest.trim();
        if code.is_empty() {
            return false;
        }
        self.valid_tokens(epoch_secs).iter().any(|t| t == code)
    }
}

/// Current wall-clock time as Unix seconds.
pub fn now_epoch() -> i64 {
    Utc::now().timestamp()
}
