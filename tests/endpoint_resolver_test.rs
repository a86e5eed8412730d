//! Integration tests for health-probe endpoint resolution

mod common;

use std::time::Duration;

use common::*;
use dasper::services::{EndpointResolutionError, EndpointResolver, HealthProbeResolver};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::test]
async fn test_first_healthy_candidate_wins() {
    let server = MockServer::start().await;
    mount_health(&server).await;

    let resolver = HealthProbeResolver::new(vec![dead_url(), server.uri()], PROBE_TIMEOUT);
    let endpoint = resolver.resolve().await.unwrap();

    assert_eq!(endpoint.base_url, server.uri());
    assert!(endpoint.health.unwrap().mongodb);
}

#[tokio::test]
async fn test_resolution_is_cached() {
    let server = MockServer::start().await;
    mount_health(&server).await;

    let resolver = HealthProbeResolver::new(vec![server.uri()], PROBE_TIMEOUT);
    let first = resolver.resolve().await.unwrap();
    let second = resolver.resolve().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unhealthy_status_is_skipped() {
    let sick = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "degraded"})))
        .mount(&sick)
        .await;
    let healthy = MockServer::start().await;
    mount_health(&healthy).await;

    let resolver = HealthProbeResolver::new(vec![sick.uri(), healthy.uri()], PROBE_TIMEOUT);
    assert_eq!(resolver.resolve().await.unwrap().base_url, healthy.uri());
}

#[tokio::test]
async fn test_all_candidates_down_lists_every_attempt() {
    let failing = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&failing)
        .await;

    let dead = dead_url();
    let resolver = HealthProbeResolver::new(vec![dead.clone(), failing.uri()], PROBE_TIMEOUT);

    match resolver.resolve().await {
        Err(EndpointResolutionError::Unreachable { attempts }) => {
            let urls: Vec<_> = attempts.iter().map(|a| a.url.clone()).collect();
            assert_eq!(urls, vec![dead, failing.uri()]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_failure_is_not_cached() {
    let server = MockServer::start().await;
    let resolver = HealthProbeResolver::new(vec![server.uri()], PROBE_TIMEOUT);

    // Nothing mounted yet: wiremock answers 404
    assert!(resolver.resolve().await.is_err());

    mount_health(&server).await;
    assert_eq!(resolver.resolve().await.unwrap().base_url, server.uri());
}
