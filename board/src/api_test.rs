use futures::executor::block_on;

use super::*;
use crate::fixtures::{CHESS_ONLY, ScriptedTransport};
use crate::routes::Method;

fn client() -> ActivityClient<ScriptedTransport> {
    ActivityClient::new(ScriptedTransport::default())
}

#[test]
fn list_parses_catalog_from_success_body() {
    let client = client();
    client.transport().push(200, CHESS_ONLY);
    let catalog = block_on(client.list()).unwrap();
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Chess Club"]);
    assert_eq!(client.transport().sent.borrow()[0].method, Method::Get);
}

#[test]
fn list_rejects_non_success_status() {
    let client = client();
    client.transport().push(500, r#"{"detail": "boom"}"#);
    let err = block_on(client.list()).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 500, detail: Some("boom".to_owned()) });
}

#[test]
fn list_reports_decode_failure() {
    let client = client();
    client.transport().push(200, "<html>");
    let err = block_on(client.list()).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(err.is_transport());
}

#[test]
fn signup_returns_server_message() {
    let client = client();
    client.transport().push(200, r#"{"message": "Signed up a@x.com for Chess Club"}"#);
    let message = block_on(client.signup("Chess Club", "a@x.com")).unwrap();
    assert_eq!(message.as_deref(), Some("Signed up a@x.com for Chess Club"));
    assert_eq!(client.transport().sent.borrow()[0].path, "/activities/Chess%20Club/signup?email=a%40x.com");
}

#[test]
fn signup_surfaces_string_detail() {
    let client = client();
    client.transport().push(400, r#"{"detail": "Activity full"}"#);
    let err = block_on(client.signup("Chess Club", "a@x.com")).unwrap_err();
    assert_eq!(err.detail(), Some("Activity full"));
    assert!(!err.is_transport());
}

#[test]
fn signup_ignores_structured_detail() {
    let client = client();
    client.transport().push(422, r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#);
    let err = block_on(client.signup("Chess Club", "")).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 422, detail: None });
}

#[test]
fn unregister_with_unparseable_error_body_has_no_detail() {
    let client = client();
    client.transport().push(404, "Not Found");
    let err = block_on(client.unregister("Chess Club", "a@x.com")).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 404, detail: None });
    assert_eq!(client.transport().sent.borrow()[0].method, Method::Delete);
}

#[test]
fn unregister_success_without_message_is_none() {
    let client = client();
    client.transport().push(200, "{}");
    assert_eq!(block_on(client.unregister("Chess Club", "a@x.com")), Ok(None));
}

#[test]
fn empty_message_and_detail_count_as_absent() {
    let client = client();
    client.transport().push(200, r#"{"message": ""}"#);
    client.transport().push(400, r#"{"detail": ""}"#);
    assert_eq!(block_on(client.unregister("Chess Club", "a@x.com")), Ok(None));
    let err = block_on(client.signup("Chess Club", "a@x.com")).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 400, detail: None });
}

#[test]
fn transport_failure_propagates() {
    let client = client();
    client.transport().push_failure("connection refused");
    let err = block_on(client.unregister("Chess Club", "a@x.com")).unwrap_err();
    assert_eq!(err, ApiError::Transport(TransportError("connection refused".to_owned())));
    assert_eq!(err.detail(), None);
}
