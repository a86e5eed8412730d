//! Shared fixtures: a stubbed DASPER backend and wired-up services
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dasper::api::DasperClient;
use dasper::services::{AuthService, SessionHolder};
use dasper::session_store::{SessionStore, SharedSessionStore};

pub const TOKEN: &str = "test-token";

pub fn user_json(email: &str, full_name: &str) -> Value {
    json!({
        "_id": "665f1c2ab3e4d5f6a7b8c9d0",
        "email": email,
        "full_name": full_name,
        "profile_picture": "",
        "phone": "",
        "organization": "Red Cross",
        "role": "user",
        "preferences": {"notifications": true, "public_reports": false, "theme": "dark"},
        "created_at": "2024-06-04T09:15:22.123456",
        "last_login": "2024-06-05T10:00:00"
    })
}

pub fn health_ok() -> Value {
    json!({
        "status": "ok",
        "timestamp": "2024-06-05T10:00:00",
        "mongodb": true,
        "model_manager": true
    })
}

pub async fn mount_health(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(health_ok()))
        .mount(server)
        .await;
}

pub async fn mount_login_ok(server: &MockServer, email: &str, full_name: &str) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "user": user_json(email, full_name),
        })))
        .mount(server)
        .await;
}

pub async fn mount_login_rejected(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .mount(server)
        .await;
}

pub async fn mount_profile(server: &MockServer, email: &str, full_name: &str) {
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"user": user_json(email, full_name)})),
        )
        .mount(server)
        .await;
}

/// The JWT layer answers 401 for an expired token and 422 for a bad one
pub async fn mount_profile_token_rejected(server: &MockServer, status: u16, msg: &str) {
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({"msg": msg})))
        .mount(server)
        .await;
}

pub async fn mount_profile_unauthorized(server: &MockServer) {
    mount_profile_token_rejected(server, 401, "Token has expired").await;
}

pub async fn mount_profile_update_ok(server: &MockServer) {
    Mock::given(method("PUT"))
        .and(path("/api/auth/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Profile updated successfully"})),
        )
        .mount(server)
        .await;
}

pub fn memory_store() -> SharedSessionStore {
    SessionStore::in_memory()
        .expect("in-memory store")
        .into_shared()
}

/// Auth service talking to `base_url`, with its own holder
pub fn auth_service(base_url: &str, store: SharedSessionStore) -> Arc<AuthService> {
    let client = DasperClient::new(base_url, Duration::from_secs(5)).expect("client");
    Arc::new(AuthService::new(client, store, Arc::new(SessionHolder::new())))
}

/// A URL nothing listens on
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
