//! Correlation id validator tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use aubus_core::protocol::uuid::{is_uuid4_text, is_valid_uuid4};

const V4: &str = "b3b8c2e2-7e2a-4e2a-9e2a-7e2a4e2a9e2a";

#[test]
fn canonical_v4_accepted() {
    assert!(is_uuid4_text(V4));
}

#[test]
fn case_insensitive_acceptance() {
    assert!(is_uuid4_text(&V4.to_uppercase()));
    assert!(is_uuid4_text("B3B8C2E2-7e2a-4E2a-9e2a-7E2A4e2a9e2a"));
}

#[test]
fn version_1_rejected() {
    assert!(!is_uuid4_text("b3b8c2e2-7e2a-1e2a-9e2a-7e2a4e2a9e2a"));
}

#[test]
fn non_canonical_forms_rejected() {
    assert!(!is_uuid4_text("b3b8c2e27e2a4e2a9e2a7e2a4e2a9e2a"));
    assert!(!is_uuid4_text("urn:uuid:b3b8c2e2-7e2a-4e2a-9e2a-7e2a4e2a9e2a"));
    assert!(!is_uuid4_text("{b3b8c2e2-7e2a-4e2a-9e2a-7e2a4e2a9e2a}"));
    assert!(!is_uuid4_text("not-a-uuid"));
    assert!(!is_uuid4_text(""));
}

#[test]
fn non_string_values_rejected() {
    assert!(!is_valid_uuid4(&json!(null)));
    assert!(!is_valid_uuid4(&json!(42)));
    assert!(!is_valid_uuid4(&json!([V4])));
    assert!(is_valid_uuid4(&json!(V4)));
}
