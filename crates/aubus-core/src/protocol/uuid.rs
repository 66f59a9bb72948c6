//! Correlation id validation.
//!
//! Envelope ids are caller-supplied UUIDv4 strings in canonical hyphenated
//! 8-4-4-4-12 form, accepted case-insensitively: the input is valid iff its
//! lowercase form equals the canonical rendering of the parsed value. The
//! "simple" (unhyphenated), braced, and URN forms the `uuid` crate would
//! otherwise accept are rejected here.

use serde_json::Value;
use uuid::{Uuid, Version};

/// Returns true iff `value` is a canonical hyphenated UUIDv4 string.
pub fn is_uuid4_text(value: &str) -> bool {
    let Ok(parsed) = Uuid::try_parse(value) else {
        return false;
    };
    if parsed.get_version() != Some(Version::Random) {
        return false;
    }
    parsed.hyphenated().to_string() == value.to_ascii_lowercase()
}

/// Returns true iff `value` is a JSON string holding a canonical UUIDv4.
///
/// Any non-string value (number, null, object, ...) is invalid rather than
/// an error.
pub fn is_valid_uuid4(value: &Value) -> bool {
    value.as_str().is_some_and(is_uuid4_text)
}
