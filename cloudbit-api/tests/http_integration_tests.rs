//! End-to-end tests against a mock cloudBit API server

mod helpers;

use cloudbit_api::{ApiError, ClientConfig, EventRef, HttpError, NotificationManager};
use helpers::{load_fixture, CALLBACK_URL};
use mockito::{Matcher, Server};
use serde_json::json;

fn manager_for(server: &Server, token: Option<&str>) -> NotificationManager {
    let config = ClientConfig::new("CFG", CALLBACK_URL)
        .with_subscriptions_url(format!("{}/v2/subscriptions", server.url()));
    NotificationManager::with_token(config, token)
}

#[test]
fn test_list_subscriptions_over_http() {
    let mut server = Server::new();
    let fixture = load_fixture("subscriptions_list.json");

    let mock = server
        .mock("GET", "/v2/subscriptions")
        .match_query(Matcher::UrlEncoded("publisher_id".into(), "00e04c0379bb".into()))
        .match_header("authorization", "Bearer T1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture.to_string())
        .create();

    let manager = manager_for(&server, Some("T1"));
    let subscriptions = manager.list_subscriptions("00e04c0379bb").unwrap();

    assert_eq!(subscriptions.len(), 2);
    let events = subscriptions[0].publisher_events.as_ref().unwrap();
    assert_eq!(events[0].key.as_deref(), Some("amplitude:delta:ignite"));
    assert_eq!(events[1].key.as_deref(), Some("amplitude:delta:release"));
    assert!(subscriptions[1].publisher_events.is_none());

    mock.assert();
}

#[test]
fn test_subscribe_over_http() {
    let mut server = Server::new();
    let created = load_fixture("subscription_created.json");

    let mock = server
        .mock("POST", "/v2/subscriptions")
        .match_header("authorization", "Bearer T1")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "publisher_id": "dev-1",
            "subscriber_id": "https://example.com/hook?auth_token=T1",
            "publisher_events": [{"name": "press"}]
        })))
        .with_status(201)
        .with_body(created.to_string())
        .create();

    let manager = manager_for(&server, Some("T1"));
    let response = manager
        .subscribe_to_notifications("dev-1", None, &[EventRef::new("press")])
        .unwrap();

    assert_eq!(response, created);
    mock.assert();
}

#[test]
fn test_delete_over_http_uses_config_token_by_default() {
    let mut server = Server::new();

    let mock = server
        .mock("DELETE", "/v2/subscriptions")
        .match_header("authorization", "Bearer CFG")
        .match_body(Matcher::Json(json!({
            "subscriber_id": "dev-2",
            "publisher_id": "dev-1"
        })))
        .with_status(200)
        .with_body("[1]")
        .create();

    let manager = manager_for(&server, None);
    let response = manager.delete_subscription("dev-1", Some("dev-2")).unwrap();

    assert_eq!(response, json!([1]));
    mock.assert();
}

#[test]
fn test_http_failure_surfaces_as_transport_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/v2/subscriptions")
        .with_status(404)
        .with_body(r#"{"message":"device not found"}"#)
        .create();

    let manager = manager_for(&server, Some("T1"));
    let err = manager
        .subscribe_to_notifications("missing", None, &[EventRef::new("ignite")])
        .unwrap_err();

    match err {
        ApiError::Transport(HttpError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("device not found"));
        }
        other => panic!("Expected transport error, got {:?}", other),
    }
    mock.assert();
}

#[test]
fn test_validation_failure_sends_nothing() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create();

    let manager = manager_for(&server, Some("T1"));
    assert!(matches!(
        manager.list_subscriptions(""),
        Err(ApiError::InvalidParameter { .. })
    ));

    mock.assert();
}
