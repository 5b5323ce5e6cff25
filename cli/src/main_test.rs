use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use board::state::LOAD_FAILED_MESSAGE;

use super::*;

// Backend whose catalog endpoint is down while mutations still answer.
async fn spawn_flaky_backend() -> String {
    let app = Router::new()
        .route("/activities", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/activities/{name}/signup", post(|| async { (StatusCode::BAD_REQUEST, r#"{"detail": "Activity full"}"#) }))
        .route("/activities/{name}/participants", delete(|| async { (StatusCode::OK, r#"{"message": ""}"#) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn env(base: &str) -> TerminalEnv {
    TerminalEnv::new(ReqwestTransport::new(base, Duration::from_secs(5)).unwrap(), true)
}

#[tokio::test]
async fn failed_listing_is_command_error() {
    let base = spawn_flaky_backend().await;
    let err = run_list(&env(&base)).await.unwrap_err();
    assert!(matches!(err, CliError::Failed(ref text) if text == LOAD_FAILED_MESSAGE));
}

#[tokio::test]
async fn rejected_signup_is_command_error() {
    let base = spawn_flaky_backend().await;
    let env = env(&base);
    assert!(!flow::signup(&env, "a@x.com", "Chess Club").await);
    let err = env.report_notice().unwrap_err();
    assert!(matches!(err, CliError::Failed(ref text) if text == "Activity full"));
}

#[tokio::test]
async fn accepted_unregister_succeeds_despite_failed_refresh() {
    let base = spawn_flaky_backend().await;
    let env = env(&base);
    assert!(flow::unregister(&env, "Chess Club", "a@x.com").await);
    assert!(env.report_notice().is_ok());
    let state = env.state.borrow();
    assert_eq!(state.notice.visible().map(|n| n.text.as_str()), Some(flow::UNREGISTER_SUCCESS_FALLBACK));
    assert_eq!(state.listing(), Listing::Failed);
}

#[tokio::test]
async fn unreachable_backend_is_command_error() {
    let env = env("http://127.0.0.1:9");
    flow::signup(&env, "a@x.com", "Chess Club").await;
    let err = env.report_notice().unwrap_err();
    assert!(matches!(err, CliError::Failed(ref text) if text == flow::SIGNUP_NETWORK_ERROR));
}
