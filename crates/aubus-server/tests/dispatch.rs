//! Dispatcher contract tests: validation order, dispatch table, fault
//! isolation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use aubus_core::error::{BusError, Result};
use aubus_core::protocol::envelope::Response;
use aubus_server::dispatch::{Dispatcher, MessageHandler, Request};
use aubus_server::services::{register_builtin, PingService};

const ID: &str = "b3b8c2e2-7e2a-4e2a-9e2a-7e2a4e2a9e2a";

fn dispatcher() -> Dispatcher {
    let d = Dispatcher::new();
    register_builtin(&d).unwrap();
    d
}

fn error_parts(resp: &Response) -> (String, String) {
    (
        resp.payload["code"].as_str().unwrap().to_owned(),
        resp.payload["message"].as_str().unwrap().to_owned(),
    )
}

#[tokio::test]
async fn ping_pongs_with_same_id() {
    let resp = dispatcher()
        .dispatch(json!({"type": "PING", "id": ID, "payload": {}}))
        .await;
    assert_eq!(resp.msg_type, "PONG");
    assert_eq!(resp.id, json!(ID));
    assert_eq!(resp.payload, json!({}));
}

#[tokio::test]
async fn missing_type_named() {
    let resp = dispatcher().dispatch(json!({"id": ID, "payload": {}})).await;
    let (code, message) = error_parts(&resp);
    assert_eq!(resp.msg_type, "ERROR");
    assert_eq!(code, "BAD_REQUEST");
    assert_eq!(message, "missing required field(s): type");
    assert_eq!(resp.id, json!(ID));
}

#[tokio::test]
async fn missing_id_named() {
    let resp = dispatcher().dispatch(json!({"type": "PING"})).await;
    let (code, message) = error_parts(&resp);
    assert_eq!(code, "BAD_REQUEST");
    assert_eq!(message, "missing required field(s): id");
    assert_eq!(resp.id, Value::Null);
}

#[tokio::test]
async fn missing_both_reported_in_fixed_order() {
    let resp = dispatcher().dispatch(json!({"payload": {}})).await;
    let (code, message) = error_parts(&resp);
    assert_eq!(code, "BAD_REQUEST");
    assert_eq!(message, "missing required field(s): type, id");
    assert_eq!(resp.id, Value::Null);
}

#[tokio::test]
async fn non_object_line_reports_both_missing() {
    let resp = dispatcher().dispatch(json!(42)).await;
    let (code, message) = error_parts(&resp);
    assert_eq!(code, "BAD_REQUEST");
    assert_eq!(message, "missing required field(s): type, id");
    assert_eq!(resp.id, Value::Null);
}

#[tokio::test]
async fn invalid_id_rejected_and_echoed() {
    let bad_ids = [
        json!("not-a-uuid"),
        json!("b3b8c2e2-7e2a-1e2a-9e2a-7e2a4e2a9e2a"),
        json!(7),
        json!(null),
    ];
    for bad in bad_ids {
        let resp = dispatcher()
            .dispatch(json!({"type": "PING", "id": bad.clone()}))
            .await;
        let (code, message) = error_parts(&resp);
        assert_eq!(code, "BAD_REQUEST");
        assert_eq!(message, "id must be a valid UUIDv4 string");
        assert_eq!(resp.id, bad);
    }
}

#[tokio::test]
async fn unknown_type_echoes_id() {
    let resp = dispatcher().dispatch(json!({"type": "FOO", "id": ID})).await;
    let (code, message) = error_parts(&resp);
    assert_eq!(code, "UNKNOWN_TYPE");
    assert_eq!(message, "Unsupported type: FOO");
    assert_eq!(resp.id, json!(ID));
}

#[tokio::test]
async fn id_validation_runs_before_type_dispatch() {
    // An unknown type with a bad id must fail on the id first.
    let resp = dispatcher()
        .dispatch(json!({"type": "FOO", "id": "nope"}))
        .await;
    let (code, _) = error_parts(&resp);
    assert_eq!(code, "BAD_REQUEST");
}

#[tokio::test]
async fn missing_payload_defaults_to_empty() {
    let resp = dispatcher().dispatch(json!({"type": "PING", "id": ID})).await;
    assert_eq!(resp.msg_type, "PONG");
    assert_eq!(resp.payload, json!({}));
}

struct FailingService;

#[async_trait]
impl MessageHandler for FailingService {
    fn msg_type(&self) -> &'static str {
        "FAIL"
    }

    async fn handle(&self, _req: Request) -> Result<Response> {
        Err(BusError::Internal("boom".into()))
    }
}

#[tokio::test]
async fn handler_fault_becomes_server_error() {
    let d = Dispatcher::new();
    d.register(Arc::new(FailingService)).unwrap();
    let resp = d.dispatch(json!({"type": "FAIL", "id": ID})).await;
    let (code, message) = error_parts(&resp);
    assert_eq!(resp.msg_type, "ERROR");
    assert_eq!(code, "SERVER_ERROR");
    assert_eq!(message, "Internal error");
    assert_eq!(resp.id, json!(ID));
}

#[tokio::test]
async fn duplicate_registration_rejected() {
    let d = Dispatcher::new();
    d.register(Arc::new(PingService::new())).unwrap();
    let err = d.register(Arc::new(PingService::new())).unwrap_err();
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert_eq!(d.registered_types(), vec!["PING"]);
}
