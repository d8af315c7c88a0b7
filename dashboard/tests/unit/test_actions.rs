//! Deployment action controller unit tests

use shipdeck::deploy::actions::{resolve_delete, DeleteAction, DeploymentActions};
use shipdeck::errors::DashboardError;
use shipdeck::http::client::HttpClient;
use shipdeck::models::deploy::DeleteOutcome;

// Nothing listens here; requests fail with a transport error immediately.
const DEAD_BACKEND: &str = "http://127.0.0.1:1";

#[test]
fn test_resolve_delete_success_requests_refresh() {
    let action = resolve_delete(Ok(DeleteOutcome::Deleted { message: None }));
    assert_eq!(action, DeleteAction::Deleted { message: None });
}

#[test]
fn test_resolve_delete_rejection_keeps_local_state() {
    // A reported failure surfaces the message and must not re-fetch
    let action = resolve_delete(Ok(DeleteOutcome::Rejected {
        error: "not found".to_string(),
    }));
    assert_eq!(
        action,
        DeleteAction::Failed {
            error: "not found".to_string()
        }
    );
}

#[test]
fn test_resolve_delete_transport_failure() {
    let action = resolve_delete(Err(DashboardError::ApiError("503".to_string())));
    match action {
        DeleteAction::Failed { error } => assert!(error.contains("503")),
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[test]
fn test_delete_without_confirmation_sends_nothing() {
    let client = HttpClient::new(DEAD_BACKEND).unwrap();
    let actions = DeploymentActions::new(&client);

    // The dead backend would turn any sent request into Failed, so
    // Cancelled proves the request never left.
    let action = tokio_test::block_on(actions.delete("widget", false));
    assert_eq!(action, DeleteAction::Cancelled);
}

#[test]
fn test_fetch_details_failure_is_silent() {
    let client = HttpClient::new(DEAD_BACKEND).unwrap();
    let actions = DeploymentActions::new(&client);

    let details = tokio_test::block_on(actions.fetch_details("widget"));
    assert!(details.is_none());
}
