//! Message envelope (`{type, id, payload}`).
//!
//! Inbound lines are decoded as raw `serde_json::Value` objects so missing or
//! extra fields pass through the codec untouched; field validation happens in
//! the server's dispatcher. `Response` is the typed outbound side.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ErrorCode;

/// Outbound envelope (one JSON line).
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    /// Semantic response kind (e.g. "PONG", "ERROR").
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Correlation token echoed from the request; null when none could be
    /// extracted.
    pub id: Value,
    /// Response payload object.
    pub payload: Value,
}

impl Response {
    /// Build a response envelope.
    pub fn new(msg_type: impl Into<String>, id: Value, payload: Value) -> Self {
        Self {
            msg_type: msg_type.into(),
            id,
            payload,
        }
    }

    /// Build an ERROR envelope carrying a `{code, message}` payload.
    pub fn error(code: ErrorCode, message: impl Into<String>, id: Value) -> Self {
        let mut payload = Map::new();
        payload.insert("code".into(), Value::String(code.as_str().into()));
        payload.insert("message".into(), Value::String(message.into()));
        Self::new("ERROR", id, Value::Object(payload))
    }
}
