//! Field conversions from the explorer's string encodings.
//!
//! All conversions are lenient: a value that does not parse becomes the zero
//! value of its type (0, empty bytes, the Unix epoch) and a debug event is
//! emitted with the raw text.
//!
//! Amounts are bounded by `U256`: `dec_u256` and `hex_u256` treat a value at or
//! above 2^256 as malformed, so it becomes zero.

use std::fmt::Display;

use alloy::primitives::{Bytes, U256};
use chrono::{DateTime, Utc};

pub fn trim_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Wire form of an address or hash. Never doubles an existing prefix.
pub fn add_0x(s: &str) -> String {
    format!("0x{}", trim_0x(s))
}

fn lenient<T: Default, E: Display>(raw: &str, kind: &'static str, parsed: Result<T, E>) -> T {
    parsed.unwrap_or_else(|e| {
        if !raw.is_empty() {
            tracing::debug!(raw, kind, error = %e, "unparseable field, using zero value");
        }
        T::default()
    })
}

/// Decimal string (explorer-native fields) to U256.
pub fn dec_u256(s: &str) -> U256 {
    lenient(s, "decimal u256", U256::from_str_radix(s.trim(), 10))
}

/// Hex quantity, with or without `0x`, to U256.
pub fn hex_u256(s: &str) -> U256 {
    lenient(s, "hex u256", U256::from_str_radix(trim_0x(s.trim()), 16))
}

pub fn dec_u64(s: &str) -> u64 {
    lenient(s, "decimal u64", s.trim().parse::<u64>())
}

pub fn hex_u64(s: &str) -> u64 {
    lenient(s, "hex u64", u64::from_str_radix(trim_0x(s.trim()), 16))
}

pub fn dec_f64(s: &str) -> f64 {
    lenient(s, "decimal f64", s.trim().parse::<f64>())
}

/// Hex-encoded byte string. Decoding stops at the first byte pair that is
/// not valid hex; everything before it is kept.
pub fn hex_bytes(s: &str) -> Bytes {
    let digits = trim_0x(s.trim());
    let valid = digits.bytes().take_while(u8::is_ascii_hexdigit).count() & !1;
    if valid != digits.len() {
        tracing::debug!(raw = s, kind = "hex bytes", "truncating malformed byte string");
    }
    lenient(s, "hex bytes", hex::decode(&digits[..valid]).map(Bytes::from))
}

fn from_unix(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

/// Unix seconds in decimal.
pub fn unix_time(s: &str) -> DateTime<Utc> {
    from_unix(lenient(s, "decimal timestamp", s.trim().parse::<i64>()))
}

/// Unix seconds as a hex quantity.
pub fn unix_time_hex(s: &str) -> DateTime<Utc> {
    from_unix(lenient(
        s,
        "hex timestamp",
        i64::from_str_radix(trim_0x(s.trim()), 16),
    ))
}

/// `isError` style flag: `"0"` means the call did not fail.
pub fn succeeded_unless_error(is_error: &str) -> bool {
    is_error.trim() == "0"
}

/// `txreceipt_status` style flag: `"1"` means the transaction succeeded.
pub fn receipt_succeeded(status: &str) -> bool {
    status.trim() == "1"
}

/// Boolean sent either as a word or as a digit.
pub fn truthy(s: &str) -> bool {
    matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

pub fn strip_topics<'a>(topics: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    topics.into_iter().map(|t| trim_0x(t).to_string()).collect()
}

/// Hex string with its prefix removed, as every address and hash is stored.
pub fn bare_hex(s: &str) -> String {
    trim_0x(s).to_string()
}
