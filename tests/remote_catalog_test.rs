// ABOUTME: Integration tests for the remote catalog snapshot source
// ABOUTME: Uses wiremock to serve snapshots, failures, slow answers, and malformed documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{snapshot_a, snapshot_b};
use medspa_gateway::catalog::{CatalogError, CatalogService, CatalogSource, RemoteSource};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn remote_catalog(server: &MockServer, timeout: Duration) -> CatalogService {
    CatalogService::new(
        CatalogSource::Remote(RemoteSource {
            url: format!("{}/snapshot", server.uri()),
            timeout,
        }),
        reqwest::Client::new(),
    )
}

#[tokio::test]
async fn test_remote_snapshot_loads_lazily() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/snapshot"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_a()))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = remote_catalog(&server, Duration::from_secs(5));
    assert!(!catalog.is_loaded());

    let categories = catalog.categories().await.unwrap();
    assert_eq!(categories.total, 2);
    // Second query reuses the published snapshot
    let services = catalog.services_by_category("Injectables").await.unwrap();
    assert_eq!(services.total, 1);
    assert!(catalog.is_loaded());
}

#[tokio::test]
async fn test_remote_reload_swaps_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/snapshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_a()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/snapshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_b()))
        .mount(&server)
        .await;

    let catalog = remote_catalog(&server, Duration::from_secs(5));
    assert_eq!(catalog.reload().await.unwrap().categories_count, 2);

    let stats = catalog.reload().await.unwrap();
    assert_eq!(stats.categories_count, 1);
    assert!(matches!(
        catalog.addons_by_service("Deep Clean").await,
        Err(CatalogError::ServiceNotFound(_))
    ));
}

#[tokio::test]
async fn test_remote_error_status_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/snapshot"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let catalog = remote_catalog(&server, Duration::from_secs(5));
    let error = catalog.reload().await.unwrap_err();

    assert!(matches!(&error, CatalogError::Fetch { details, .. } if details.contains("500")));
    assert!(!catalog.is_loaded());
}

#[tokio::test]
async fn test_remote_timeout_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/snapshot"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(snapshot_a())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let catalog = remote_catalog(&server, Duration::from_secs(1));
    let error = catalog.categories().await.unwrap_err();

    assert!(
        matches!(&error, CatalogError::Fetch { details, .. } if details.contains("timed out after 1s")),
        "unexpected error: {error}"
    );
}

#[tokio::test]
async fn test_remote_malformed_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/snapshot"))
        .respond_with(ResponseTemplate::new(200).set_body_string("services_info = {}"))
        .mount(&server)
        .await;

    let catalog = remote_catalog(&server, Duration::from_secs(5));
    let error = catalog.all_data().await.unwrap_err();

    assert!(matches!(error, CatalogError::Malformed(_)));
    assert!(error.is_data_source());
}
