//! # Credential Derivation
//!
//! The Daraja gateway authenticates requests two ways: a Basic-auth header
//! derived from the consumer key/secret pair, and a per-request password
//! derived from the shortcode, passkey and a compact timestamp.
//!
//! The timestamp is formatted directly from calendar components rather than
//! by slicing a pre-rendered ISO string, so it is exactly 14 digits for any
//! instant regardless of sub-second precision.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};

/// Format an instant as the gateway's compact `YYYYMMDDHHmmss` timestamp.
///
/// Always exactly 14 numeric characters, no separators.
pub fn stk_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d%H%M%S").to_string()
}

/// Derive the per-request STK password: `base64(shortcode + passkey + timestamp)`.
pub fn stk_password(shortcode: &str, passkey: &str, timestamp: &str) -> String {
    BASE64.encode(format!("{shortcode}{passkey}{timestamp}"))
}

/// Encode a consumer key/secret pair as a Basic-auth credential:
/// `base64(key:secret)`. The `Basic ` scheme prefix is not included.
pub fn basic_credential(consumer_key: &str, consumer_secret: &str) -> String {
    BASE64.encode(format!("{consumer_key}:{consumer_secret}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap();
        assert_eq!(stk_timestamp(at), "20240309070502");
    }

    #[test]
    fn test_timestamp_is_always_14_digits() {
        let instants = [
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2026, 12, 31, 9, 8, 7).unwrap(),
            Utc::now(),
        ];
        for at in instants {
            let ts = stk_timestamp(at);
            assert_eq!(ts.len(), 14, "timestamp {ts} is not 14 characters");
            assert!(ts.bytes().all(|b| b.is_ascii_digit()), "timestamp {ts} has non-digits");
        }
    }

    #[test]
    fn test_timestamp_pads_single_digit_components() {
        let at = Utc.with_ymd_and_hms(2025, 6, 3, 4, 5, 6).unwrap();
        assert_eq!(stk_timestamp(at), "20250603040506");
    }

    #[test]
    fn test_stk_password_derivation() {
        let password = stk_password("600100", "secret", "20261231235959");
        assert_eq!(password, "NjAwMTAwc2VjcmV0MjAyNjEyMzEyMzU5NTk=");
        // Matches encoding the concatenation directly
        assert_eq!(password, BASE64.encode("600100secret20261231235959"));
    }

    #[test]
    fn test_basic_credential() {
        assert_eq!(basic_credential("key", "secret"), "a2V5OnNlY3JldA==");
        assert_eq!(
            basic_credential("consumer-key", "consumer-secret"),
            "Y29uc3VtZXIta2V5OmNvbnN1bWVyLXNlY3JldA=="
        );
    }
}
