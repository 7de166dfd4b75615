// Unit tests for Operation header bag semantics.

use crate::{AUTHORIZATION_HEADER, Operation};

use serde_json::json;

#[test]
fn given_new_operation_when_created_then_header_bag_is_empty() {
    let operation = Operation::new("GetProducts", json!({}));

    assert!(operation.headers().is_empty());
    assert_eq!(operation.name(), "GetProducts");
}

#[test]
fn given_operation_when_header_set_then_lookup_by_exact_name_succeeds() {
    let mut operation = Operation::new("GetProducts", json!({}));

    operation.set_header(AUTHORIZATION_HEADER, "Bearer abc");

    assert_eq!(operation.header(AUTHORIZATION_HEADER), Some("Bearer abc"));
    assert_eq!(operation.header("x-missing"), None);
}

/// **VALUE**: Verifies setting the same header twice overwrites.
///
/// **WHY THIS MATTERS**: The credential link runs once per submission, but a
/// caller may pre-populate its own authorization header; the link must win
/// without the bag accumulating duplicates.
#[test]
fn given_existing_header_when_set_again_then_value_is_overwritten() {
    let mut operation = Operation::new("GetProducts", json!({}));

    operation.set_header(AUTHORIZATION_HEADER, "Bearer old");
    operation.set_header(AUTHORIZATION_HEADER, "Bearer new");

    assert_eq!(operation.header(AUTHORIZATION_HEADER), Some("Bearer new"));
    assert_eq!(operation.headers().len(), 1);
}

#[test]
fn given_two_operations_when_created_then_correlation_ids_differ() {
    let first = Operation::new("GetProducts", json!({}));
    let second = Operation::new("GetProducts", json!({}));

    assert_ne!(first.id(), second.id());
}

#[test]
fn given_payload_when_operation_created_then_payload_is_preserved() {
    let operation = Operation::new("Login", json!({"email": "a@b.c"}));

    assert_eq!(operation.payload()["email"], "a@b.c");
}
