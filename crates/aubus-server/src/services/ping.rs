use async_trait::async_trait;
use serde_json::json;

use aubus_core::error::Result;
use aubus_core::protocol::envelope::Response;

use crate::dispatch::{MessageHandler, Request};

/// Liveness check: PING is answered with PONG and an empty payload.
#[derive(Default)]
pub struct PingService;

impl PingService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageHandler for PingService {
    fn msg_type(&self) -> &'static str {
        "PING"
    }

    async fn handle(&self, req: Request) -> Result<Response> {
        Ok(Response::new("PONG", json!(req.id), json!({})))
    }
}
