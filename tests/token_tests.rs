use qrclock::core::token::{PAYLOAD_PREFIX, TOKEN_LEN, TokenSpec};
use qrclock::errors::AppError;

const SECRET: &str = "a-long-shared-secret-for-tests";
const PERIOD_H: i64 = 48;
const PERIOD_SECS: i64 = PERIOD_H * 3600;

fn spec(skew: i64) -> TokenSpec {
    TokenSpec::new(SECRET, PERIOD_H, skew).expect("valid spec")
}

#[test]
fn token_is_deterministic_and_short() {
    let s = spec(1);
    let now = 5 * PERIOD_SECS + 10;

    let t1 = s.current_token(now);
    let t2 = s.current_token(now);

    assert_eq!(t1, t2);
    assert_eq!(t1.len(), TOKEN_LEN);
    // base64url alphabet only, no padding
    assert!(
        t1.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn two_specs_with_same_parameters_agree() {
    let a = TokenSpec::new(SECRET, PERIOD_H, 1).unwrap();
    let b = TokenSpec::new(SECRET, PERIOD_H, 1).unwrap();
    assert_eq!(a.current_token(123_456_789), b.current_token(123_456_789));
}

#[test]
fn same_window_yields_same_token() {
    let s = spec(1);
    let start = 7 * PERIOD_SECS;

    let early = s.current_token(start + 1);
    let late = s.current_token(start + PERIOD_SECS - 1);

    assert_eq!(early, late);
}

#[test]
fn different_windows_yield_different_tokens() {
    let s = spec(1);
    let t1 = s.current_token(PERIOD_SECS);
    let t2 = s.current_token(2 * PERIOD_SECS);
    assert_ne!(t1, t2);
}

#[test]
fn current_token_is_member_of_valid_set_for_any_skew() {
    for skew in 0..4 {
        let s = spec(skew);
        let now = 9 * PERIOD_SECS + 42;
        let current = s.current_token(now);
        assert!(s.valid_tokens(now).contains(&current), "skew {}", skew);
    }
}

#[test]
fn valid_set_has_expected_size() {
    let now = 3 * PERIOD_SECS;
    assert_eq!(spec(0).valid_tokens(now).len(), 1);
    assert_eq!(spec(1).valid_tokens(now).len(), 3);
    assert_eq!(spec(2).valid_tokens(now).len(), 5);
}

#[test]
fn payload_valid_across_adjacent_window_boundary() {
    let s = spec(1);

    // generated right before the window rolls over
    let payload = s.payload(6 * PERIOD_SECS - 1);

    // checked right after
    assert!(s.is_payload_valid(&payload, 6 * PERIOD_SECS + 1));
}

#[test]
fn payload_expires_beyond_the_skew() {
    let s = spec(1);
    let generated = 10 * PERIOD_SECS;
    let payload = s.payload(generated);

    // 3 windows later: counter difference exceeds skew 1
    assert!(!s.is_payload_valid(&payload, generated + 3 * PERIOD_SECS));
}

#[test]
fn malformed_payloads_are_rejected_not_errors() {
    let s = spec(1);
    let now = 4 * PERIOD_SECS;

    assert!(!s.is_payload_valid("", now));
    assert!(!s.is_payload_valid(PAYLOAD_PREFIX, now)); // empty remainder
    assert!(!s.is_payload_valid("BADGE:abcdef123456", now)); // wrong prefix
    assert!(!s.is_payload_valid("FICHAJE:not-a-valid-code", now));

    // a lowercase prefix is not the exact prefix
    let good = s.payload(now);
    let lowered = good.to_lowercase();
    assert!(!s.is_payload_valid(&lowered, now));
}

#[test]
fn surrounding_whitespace_on_the_code_is_tolerated() {
    let s = spec(1);
    let now = 4 * PERIOD_SECS;
    let token = s.current_token(now);

    let padded = format!("{} {} ", PAYLOAD_PREFIX, token);
    assert!(s.is_payload_valid(&padded, now));
}

#[test]
fn empty_secret_is_a_configuration_error() {
    let err = TokenSpec::new("", PERIOD_H, 1).unwrap_err();
    assert!(matches!(err, AppError::MissingSecret));

    let err = TokenSpec::new("   ", PERIOD_H, 1).unwrap_err();
    assert!(matches!(err, AppError::MissingSecret));
}

#[test]
fn non_positive_period_is_a_configuration_error() {
    assert!(matches!(
        TokenSpec::new(SECRET, 0, 1).unwrap_err(),
        AppError::InvalidPeriod(0)
    ));
    assert!(matches!(
        TokenSpec::new(SECRET, -2, 1).unwrap_err(),
        AppError::InvalidPeriod(-2)
    ));
}

#[test]
fn different_secrets_yield_different_tokens() {
    let a = TokenSpec::new("secret-a", PERIOD_H, 1).unwrap();
    let b = TokenSpec::new("secret-b", PERIOD_H, 1).unwrap();
    let now = 11 * PERIOD_SECS;
    assert_ne!(a.current_token(now), b.current_token(now));
}
