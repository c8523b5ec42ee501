//! Authentication exchange behavior tests.
//!
//! # Invariants
//! - No network call happens until the first data request (lazy first login)
//! - The auth payload carries the fixed client_id/grant_type/scope shape
//! - A malformed auth response is an application-level failure that leaves
//!   prior session state untouched

mod common;

use common::*;
use saur_client::ApiError;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn test_cold_client_authenticates_once_then_fetches() {
    let mock_server = MockServer::start().await;

    let auth_count = Arc::new(AtomicUsize::new(0));
    let auth_count_clone = auth_count.clone();

    Mock::given(method("POST"))
        .and(path("/admin/v2/auth"))
        .respond_with(move |_: &wiremock::Request| {
            auth_count_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200).set_body_json(auth_body("fresh-token"))
        })
        .mount(&mock_server)
        .await;

    let body = serde_json::json!({"deliveryPoints": [{"id": "dp-1"}]});
    Mock::given(method("GET"))
        .and(path("/deli/section_subscriptions/42/delivery_points"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let mut client = test_client(&mock_server.uri());
    let result = client.delivery_points().await.unwrap();

    // Exactly one auth exchange, and the JSON body comes back unchanged.
    assert_eq!(auth_count.load(Ordering::SeqCst), 1);
    assert_eq!(result, body);
    assert_eq!(client.session().bearer_token(), Some("fresh-token"));
    assert_eq!(client.session().section_id(), Some("42"));
}

#[tokio::test]
async fn test_auth_payload_has_fixed_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/v2/auth"))
        .and(body_partial_json(serde_json::json!({
            "username": "user@example.com",
            "password": "testpassword",
            "client_id": "frontjs-client",
            "grant_type": "password",
            "scope": "api-scope",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/deli/section_subscriptions/42/meter_indexes/last"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"index": 123})))
        .mount(&mock_server)
        .await;

    let mut client = test_client(&mock_server.uri());
    // A payload that does not match the body matcher would leave the auth
    // mock unmatched and this call failing.
    client.last_known_reading().await.unwrap();
}

#[tokio::test]
async fn test_preseeded_session_skips_auth_round_trip() {
    let mock_server = MockServer::start().await;

    // No auth mock mounted: any authentication attempt would 404 and fail
    // the call with AuthFailed.
    Mock::given(method("GET"))
        .and(path("/deli/section_subscriptions/42/delivery_points"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let mut client = test_client_with_session(&mock_server.uri(), "cached-token");
    let result = client.delivery_points().await.unwrap();
    assert_eq!(result["ok"], true);
}

#[tokio::test]
async fn test_malformed_auth_response_fails_and_preserves_state() {
    let mock_server = MockServer::start().await;

    // 200 with a body missing token.access_token
    Mock::given(method("POST"))
        .and(path("/admin/v2/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": {},
            "defaultSectionId": "42",
        })))
        .mount(&mock_server)
        .await;

    let mut client = test_client(&mock_server.uri());
    let err = client.delivery_points().await.unwrap_err();

    assert!(matches!(err, ApiError::AuthFailed(_)));
    assert!(client.session().bearer_token().is_none());
    assert!(client.session().section_id().is_none());
}

#[tokio::test]
async fn test_auth_rejection_maps_to_auth_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/v2/auth"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid_grant"
        })))
        .mount(&mock_server)
        .await;

    let mut client = test_client(&mock_server.uri());
    let err = client.monthly_consumption(2024, 9).await.unwrap_err();

    // The exchange itself is not retried; its failure propagates directly.
    assert!(matches!(err, ApiError::AuthFailed(_)));
}

#[tokio::test]
async fn test_numeric_section_id_is_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/v2/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": { "access_token": "tok" },
            "defaultSectionId": 42,
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/deli/section_subscriptions/42/delivery_points"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let mut client = test_client(&mock_server.uri());
    client.delivery_points().await.unwrap();
    assert_eq!(client.session().section_id(), Some("42"));
}
