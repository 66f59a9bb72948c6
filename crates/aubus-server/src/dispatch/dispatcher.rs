//! Message validation and dispatch.
//!
//! Every decoded envelope flows through one validation pipeline (required
//! fields, then id format) before the registry routes it by `type`. The
//! registry is the extension seam for future message kinds: new types plug
//! in here without touching the validation ahead of them.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};

use aubus_core::error::{BusError, ErrorCode, Result};
use aubus_core::protocol::envelope::Response;
use aubus_core::protocol::uuid::is_valid_uuid4;

/// Validated request handed to a message handler.
#[derive(Debug, Clone)]
pub struct Request {
    /// Correlation id (already validated as UUIDv4).
    pub id: String,
    /// Request payload; `{}` when the envelope carried none.
    pub payload: Value,
}

/// One registered message kind.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Envelope `type` this handler answers.
    fn msg_type(&self) -> &'static str;

    /// Produce the response for one validated request.
    async fn handle(&self, req: Request) -> Result<Response>;
}

/// Registry and dispatcher for message handlers.
#[derive(Default)]
pub struct Dispatcher {
    handlers: DashMap<&'static str, Arc<dyn MessageHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    /// Register a handler. Message types must be unique.
    pub fn register(&self, handler: Arc<dyn MessageHandler>) -> Result<()> {
        let msg_type = handler.msg_type();
        if self.handlers.insert(msg_type, handler).is_some() {
            return Err(BusError::BadRequest(format!(
                "handler already registered for type: {msg_type}"
            )));
        }
        Ok(())
    }

    pub fn registered_types(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| *e.key()).collect()
    }

    /// Validate one decoded envelope and route it to its handler.
    ///
    /// Total: every input yields exactly one response envelope. Handler
    /// faults are logged and surfaced to the peer as SERVER_ERROR with the
    /// request id echoed.
    pub async fn dispatch(&self, raw: Value) -> Response {
        // A non-object line has no keys at all, so both required fields are
        // reported missing below.
        let empty = Map::new();
        let fields = raw.as_object().unwrap_or(&empty);

        let echo_id = fields.get("id").cloned().unwrap_or(Value::Null);

        // Required keys, reported in fixed order.
        let mut missing = Vec::new();
        if !fields.contains_key("type") {
            missing.push("type");
        }
        if !fields.contains_key("id") {
            missing.push("id");
        }
        if !missing.is_empty() {
            return Response::error(
                ErrorCode::BadRequest,
                format!("missing required field(s): {}", missing.join(", ")),
                echo_id,
            );
        }

        if !is_valid_uuid4(&echo_id) {
            return Response::error(
                ErrorCode::BadRequest,
                "id must be a valid UUIDv4 string",
                echo_id,
            );
        }
        // The validator only accepts strings, so this is always present.
        let id = echo_id.as_str().unwrap_or_default().to_owned();

        let handler = fields
            .get("type")
            .and_then(Value::as_str)
            .and_then(|t| self.handlers.get(t).map(|e| Arc::clone(e.value())));
        let Some(handler) = handler else {
            // A non-string `type` matches no handler; render it as raw JSON.
            let shown = match fields.get("type") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            return Response::error(
                ErrorCode::UnknownType,
                format!("Unsupported type: {shown}"),
                echo_id,
            );
        };

        let payload = fields
            .get("payload")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        match handler.handle(Request { id, payload }).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(error = %e, "handler failure");
                Response::error(ErrorCode::ServerError, "Internal error", echo_id)
            }
        }
    }
}
