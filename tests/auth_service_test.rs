//! Integration tests for the authentication service against a stubbed backend
//!
//! Covers the session lifecycle: sign in, restore at startup (success, 401,
//! 422, unreachable backend, unreadable store), profile update and sign out.

mod common;

use common::*;
use dasper::api::ProfileUpdate;
use dasper::logic::errors::{classify_error, user_message, ErrorType};
use dasper::model::SessionState;
use dasper::session_store::SessionStore;
use wiremock::MockServer;

#[tokio::test]
async fn test_sign_in_publishes_authenticated_and_persists() {
    let server = MockServer::start().await;
    mount_login_ok(&server, "ana@example.com", "Ana Reyes").await;

    let store = memory_store();
    let auth = auth_service(&server.uri(), store.clone());
    let mut session_rx = auth.session().subscribe();

    let user = auth.sign_in("  Ana@Example.com ", "secret1").await.unwrap();
    assert_eq!(user.full_name, "Ana Reyes");

    assert!(session_rx.has_changed().unwrap());
    let published = session_rx.borrow_and_update().clone();
    assert_eq!(published.user().map(|u| u.email.as_str()), Some("ana@example.com"));

    let stored = store.lock().unwrap().load_session().unwrap().unwrap();
    assert_eq!(stored.access_token, TOKEN);
    assert_eq!(stored.user.email, "ana@example.com");
}

#[tokio::test]
async fn test_sign_in_sends_normalized_email() {
    let server = MockServer::start().await;
    mount_login_ok(&server, "ana@example.com", "Ana").await;
    let auth = auth_service(&server.uri(), memory_store());

    auth.sign_in("ANA@example.com ", "secret1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["password"], "secret1");
}

#[tokio::test]
async fn test_rejected_sign_in_leaves_session_alone() {
    let server = MockServer::start().await;
    mount_login_rejected(&server).await;

    let store = memory_store();
    let auth = auth_service(&server.uri(), store.clone());

    let err = auth.sign_in("ana@example.com", "wrong").await.unwrap_err();
    assert_eq!(classify_error(&err), ErrorType::Unauthorized);
    assert_eq!(user_message(&err), "Invalid credentials");
    assert_eq!(auth.session().current(), SessionState::Unknown);
    assert!(store.lock().unwrap().load_session().unwrap().is_none());
}

#[tokio::test]
async fn test_restore_with_valid_stored_token() {
    let server = MockServer::start().await;
    mount_login_ok(&server, "ana@example.com", "Ana").await;
    mount_profile(&server, "ana@example.com", "Ana Reyes").await;

    // First run signs in, second run restores from the same store
    let store = memory_store();
    auth_service(&server.uri(), store.clone())
        .sign_in("ana@example.com", "secret1")
        .await
        .unwrap();

    let auth = auth_service(&server.uri(), store);
    let state = auth.restore_session().await;

    assert!(state.is_authenticated());
    assert_eq!(state.user().unwrap().full_name, "Ana Reyes");
    assert_eq!(auth.session().current(), state);
}

#[tokio::test]
async fn test_restore_with_rejected_token_clears_store() {
    let server = MockServer::start().await;
    mount_login_ok(&server, "ana@example.com", "Ana").await;
    mount_profile_unauthorized(&server).await;

    let store = memory_store();
    auth_service(&server.uri(), store.clone())
        .sign_in("ana@example.com", "secret1")
        .await
        .unwrap();

    let auth = auth_service(&server.uri(), store.clone());
    assert_eq!(auth.restore_session().await, SessionState::Unauthenticated);
    assert!(store.lock().unwrap().load_session().unwrap().is_none());
}

#[tokio::test]
async fn test_restore_with_malformed_token_clears_store() {
    let server = MockServer::start().await;
    mount_login_ok(&server, "ana@example.com", "Ana").await;
    mount_profile_token_rejected(&server, 422, "Signature verification failed").await;

    let store = memory_store();
    auth_service(&server.uri(), store.clone())
        .sign_in("ana@example.com", "secret1")
        .await
        .unwrap();

    let auth = auth_service(&server.uri(), store.clone());
    assert_eq!(auth.restore_session().await, SessionState::Unauthenticated);
    assert!(store.lock().unwrap().load_session().unwrap().is_none());
}

#[tokio::test]
async fn test_expired_token_message_comes_from_backend() {
    let server = MockServer::start().await;
    mount_login_ok(&server, "ana@example.com", "Ana").await;
    mount_profile_update_ok(&server).await;
    mount_profile_unauthorized(&server).await;

    let auth = auth_service(&server.uri(), memory_store());
    auth.sign_in("ana@example.com", "secret1").await.unwrap();

    let err = auth
        .update_profile(&ProfileUpdate {
            full_name: Some("Ana María Reyes".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(classify_error(&err), ErrorType::Unauthorized);
    assert_eq!(user_message(&err), "Token has expired");
}

#[tokio::test]
async fn test_restore_with_unreachable_backend_fails_closed() {
    let server = MockServer::start().await;
    mount_login_ok(&server, "ana@example.com", "Ana").await;

    let store = memory_store();
    auth_service(&server.uri(), store.clone())
        .sign_in("ana@example.com", "secret1")
        .await
        .unwrap();

    let auth = auth_service(&dead_url(), store.clone());
    assert_eq!(auth.restore_session().await, SessionState::Unauthenticated);

    // Token survives for the next launch
    let stored = store.lock().unwrap().load_session().unwrap();
    assert_eq!(stored.map(|s| s.access_token), Some(TOKEN.to_string()));
}

#[tokio::test]
async fn test_restore_with_corrupt_store_fails_closed() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("session.db");

    // Create the schema, then damage the stored user
    drop(SessionStore::open(&db_path).unwrap());
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute(
        "INSERT INTO session (id, access_token, user_json, saved_at) VALUES (1, ?1, '{not json', 'now')",
        [TOKEN],
    )
    .unwrap();
    drop(conn);

    let server = MockServer::start().await;
    mount_profile(&server, "ana@example.com", "Ana").await;

    let store = SessionStore::open(&db_path).unwrap().into_shared();
    let auth = auth_service(&server.uri(), store);

    assert_eq!(auth.restore_session().await, SessionState::Unauthenticated);
    // Never asked the backend
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_profile_refreshes_session_user() {
    let server = MockServer::start().await;
    mount_login_ok(&server, "ana@example.com", "Ana").await;
    mount_profile_update_ok(&server).await;
    mount_profile(&server, "ana@example.com", "Ana María Reyes").await;

    let auth = auth_service(&server.uri(), memory_store());
    auth.sign_in("ana@example.com", "secret1").await.unwrap();

    let update = ProfileUpdate {
        full_name: Some("Ana María Reyes".to_string()),
        ..Default::default()
    };
    let user = auth.update_profile(&update).await.unwrap();

    assert_eq!(user.full_name, "Ana María Reyes");
    assert_eq!(
        auth.session().current().user().map(|u| u.full_name.clone()),
        Some("Ana María Reyes".to_string())
    );

    let put = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.method.as_str() == "PUT")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&put.body).unwrap();
    assert_eq!(body, serde_json::json!({"full_name": "Ana María Reyes"}));
}

#[tokio::test]
async fn test_update_profile_without_session_never_calls_backend() {
    let server = MockServer::start().await;
    let auth = auth_service(&server.uri(), memory_store());

    let err = auth
        .update_profile(&ProfileUpdate {
            phone: Some("555-0100".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Not signed in"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sign_out_clears_session_and_store() {
    let server = MockServer::start().await;
    mount_login_ok(&server, "ana@example.com", "Ana").await;

    let store = memory_store();
    let auth = auth_service(&server.uri(), store.clone());
    auth.sign_in("ana@example.com", "secret1").await.unwrap();

    auth.sign_out();

    assert_eq!(auth.session().current(), SessionState::Unauthenticated);
    assert!(store.lock().unwrap().load_session().unwrap().is_none());
}
