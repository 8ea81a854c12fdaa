// ABOUTME: Shared test utilities and fixtures for gateway integration tests
// ABOUTME: Catalog snapshot fixtures, snapshot files on disk, and router request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `medspa_gateway`

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use medspa_gateway::{
    catalog::{CatalogService, CatalogSource},
    config::ServerConfig,
    providers::{BookingProvider, StubProvider},
    resources::ServerResources,
    server::build_router,
};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Two categories, add-ons on one service, shared staff
pub fn snapshot_a() -> Value {
    json!({
        "servicesInfo": {
            "serviceCategories": [
                {"id": 1, "name": "Facials"},
                {"id": 2, "name": "Injectables"}
            ],
            "servicesById": {
                "10": {"name": "Deep Clean", "serviceCategoryId": 1, "defaultPrice": 150,
                       "defaultDuration": 60, "description": "Pore-clearing facial"},
                "11": {"name": "Hydrafacial", "serviceCategoryId": 1, "defaultPrice": 199.5,
                       "defaultDuration": 45},
                "20": {"name": "Botox", "serviceCategoryId": 2, "defaultPrice": 300,
                       "defaultDuration": 30}
            },
            "serviceOptionGroupIdsByServiceId": {"10": [7]},
            "serviceOptionGroupsById": {"7": {"name": "Boost", "prompt": "Add a boost?"}},
            "serviceOptionsById": {
                "70": {"serviceOptionGroupId": 7, "name": "LED", "price": 25},
                "71": {"serviceOptionGroupId": 7, "name": "Peel", "price": 40}
            }
        },
        "staffInfo": {
            "staffById": {
                "3": {"firstName": "Ana", "lastName": "Diaz"},
                "4": {"firstName": "Mia"}
            },
            "staffIdsByServiceId": {"10": [3], "20": [3, 4]}
        }
    })
}

/// Disjoint from `snapshot_a`
pub fn snapshot_b() -> Value {
    json!({
        "servicesInfo": {
            "serviceCategories": [{"id": 5, "name": "Massage"}],
            "servicesById": {
                "50": {"name": "Swedish", "serviceCategoryId": 5, "defaultPrice": 120,
                       "defaultDuration": 90}
            }
        },
        "staffInfo": {
            "staffById": {"8": {"firstName": "Lee", "lastName": "Park"}},
            "staffIdsByServiceId": {"50": [8]}
        }
    })
}

/// Write a snapshot document to `dir/services.json`
pub fn write_snapshot(dir: &Path, snapshot: &Value) -> PathBuf {
    let path = dir.join("services.json");
    std::fs::write(&path, serde_json::to_vec_pretty(snapshot).unwrap()).unwrap();
    path
}

/// Catalog service reading a snapshot file, not yet loaded
pub fn file_catalog(path: PathBuf) -> Arc<CatalogService> {
    Arc::new(CatalogService::new(
        CatalogSource::File(path),
        reqwest::Client::new(),
    ))
}

/// Resources with the given provider and catalog
pub fn resources_with(
    provider: Arc<dyn BookingProvider>,
    catalog: Arc<CatalogService>,
) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        provider,
        catalog,
    ))
}

/// Full router over the stub provider and a snapshot file
pub fn stub_router(catalog_path: PathBuf) -> Router {
    init_test_logging();
    build_router(resources_with(
        Arc::new(StubProvider::new()),
        file_catalog(catalog_path),
    ))
}

/// Send a request and decode the JSON response body
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// GET helper
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}
