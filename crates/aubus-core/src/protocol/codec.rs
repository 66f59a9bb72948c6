//! Line codec: one compact JSON object per newline-terminated line.

use serde_json::Value;

use crate::error::{BusError, Result};
use crate::protocol::envelope::Response;

/// Decode one line of text as JSON.
///
/// Syntactic failure is the caller's BAD_JSON case; shape checks happen in
/// the dispatcher.
pub fn decode(line: &str) -> Result<Value> {
    serde_json::from_str(line).map_err(|e| BusError::BadJson(format!("invalid JSON line: {e}")))
}

/// Encode a response as compact JSON with exactly one trailing newline.
///
/// serde_json escapes control characters inside strings, so the encoded line
/// never contains an embedded `\n`.
pub fn encode(resp: &Response) -> Result<String> {
    let mut line =
        serde_json::to_string(resp).map_err(|e| BusError::Internal(format!("encode failed: {e}")))?;
    line.push('\n');
    Ok(line)
}
