//! Primitive wire-value decoders.

use chrono::{DateTime, Utc};

use crate::errors::{ClientHistoryError, Result};

/// Parse a microseconds-since-epoch string into a UTC timestamp.
///
/// The wire carries microsecond precision; chrono keeps it.
///
/// # Errors
///
/// Returns `InvalidTimestamp` when the value is not an integer or lies
/// outside the representable range.
pub fn parse_micros_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let micros: i64 = value
        .parse()
        .map_err(|_| ClientHistoryError::InvalidTimestamp {
            value: value.to_string(),
        })?;
    DateTime::from_timestamp_micros(micros).ok_or_else(|| ClientHistoryError::InvalidTimestamp {
        value: value.to_string(),
    })
}

/// Parse an optional microsecond timestamp; absent or empty means no value.
///
/// # Errors
///
/// Returns `InvalidTimestamp` for present, non-empty, unparseable values.
pub fn parse_optional_micros(value: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    match value {
        None | Some("") => Ok(None),
        Some(v) => parse_micros_timestamp(v).map(Some),
    }
}

/// Parse an optional stringified 64-bit integer; absent or empty means no
/// value, anything else must parse.
///
/// # Errors
///
/// Returns `InvalidNumber` carrying `field` for present, non-empty,
/// unparseable values.
pub fn parse_optional_u64(field: &'static str, value: Option<&str>) -> Result<Option<u64>> {
    match value {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| ClientHistoryError::InvalidNumber {
                field,
                value: v.to_string(),
            }),
    }
}

/// Decode base64-packed bytes; absent or undecodable input yields an empty
/// buffer, which downstream formatters reject by length.
pub fn decode_packed_bytes(encoded: Option<&str>) -> Vec<u8> {
    match encoded {
        Some(s) => {
            base64::Engine::decode(&base64::engine::general_purpose::STANDARD, s)
                .unwrap_or_default()
        }
        None => Vec::new(),
    }
}

/// Format a 4-byte buffer as a dotted-decimal IPv4 address.
pub fn ipv4_string(bytes: &[u8]) -> Option<String> {
    if bytes.len() != 4 {
        return None;
    }
    Some(format!("{}.{}.{}.{}", bytes[0], bytes[1], bytes[2], bytes[3]))
}

/// Format a 16-byte buffer as a non-abbreviated uppercase IPv6 address.
pub fn ipv6_string(bytes: &[u8]) -> Option<String> {
    if bytes.len() != 16 {
        return None;
    }
    let groups: Vec<String> = bytes
        .chunks(2)
        .map(|pair| format!("{:02X}{:02X}", pair[0], pair[1]))
        .collect();
    Some(groups.join(":"))
}

/// Format a 6-byte buffer as a colon-separated uppercase MAC address.
pub fn mac_string(bytes: &[u8]) -> Option<String> {
    if bytes.len() != 6 {
        return None;
    }
    let parts: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
    Some(parts.join(":"))
}
