// ABOUTME: Integration tests for the booking routes over the stub and canned external providers
// ABOUTME: Exercises clients, employees, services, centers, slots, and bookings through the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::http::{Method, StatusCode};
use common::{file_catalog, get_json, resources_with, send, snapshot_a, stub_router, write_snapshot};
use medspa_gateway::providers::MappedExternalProvider;
use medspa_gateway::server::build_router;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn stub() -> (TempDir, axum::Router) {
    let dir = TempDir::new().unwrap();
    let router = stub_router(write_snapshot(dir.path(), &snapshot_a()));
    (dir, router)
}

#[tokio::test]
async fn test_root_and_health() {
    let (_dir, router) = stub();

    let (status, body) = get_json(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "MedSpa Booking API" }));

    let (status, body) = get_json(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_reports_catalog_state() {
    let (_dir, router) = stub();

    let (_, before) = get_json(&router, "/ready").await;
    assert_eq!(before["provider"], "stub");
    assert_eq!(before["catalog"]["loaded"], false);

    get_json(&router, "/catalog/categories").await;
    let (_, after) = get_json(&router, "/ready").await;
    assert_eq!(after["catalog"]["loaded"], true);
    assert_eq!(after["catalog"]["services_count"], 3);
}

#[tokio::test]
async fn test_client_lifecycle() {
    let (_dir, router) = stub();

    let (status, created) = send(
        &router,
        Method::POST,
        "/clients",
        Some(json!({ "name": "Jane Doe", "phone": "555-0100", "email": "jane@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_owned();

    let (status, fetched) = get_json(&router, &format!("/clients/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    for field in ["id", "name", "phone", "email"] {
        assert_eq!(fetched[field], created[field], "{field}");
    }

    let (_, listed) = get_json(&router, "/clients").await;
    assert!(listed.as_array().unwrap().iter().any(|c| c["id"] == id.as_str()));

    let (status, body) = send(&router, Method::DELETE, &format!("/clients/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Client deleted successfully" }));

    let (status, body) = get_json(&router, &format!("/clients/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Client not found");

    let (status, _) = send(&router, Method::DELETE, &format!("/clients/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_body_is_bad_request() {
    let (_dir, router) = stub();

    let (status, body) = send(&router, Method::POST, "/employees", Some(json!({ "name": "No Center" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_employees_and_schema() {
    let (_dir, router) = stub();

    let (_, employees) = get_json(&router, "/employees").await;
    assert_eq!(employees[0]["name"], "Sarah Johnson");

    let (status, schema) = get_json(&router, "/employees/schema").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(schema["example"]["center_id"], "1");
    assert_eq!(schema["schema"]["required"], json!(["name", "center_id"]));

    let (status, body) = get_json(&router, "/employees/nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Employee not found");
}

#[tokio::test]
async fn test_services_and_centers() {
    let (_dir, router) = stub();

    let (_, service) = get_json(&router, "/services/1").await;
    assert_eq!(service["service_name"], "Botox Treatment");
    assert_eq!(service["price"], "300.00");

    let (status, created) = send(
        &router,
        Method::POST,
        "/centers",
        Some(json!({ "center_name": "Uptown", "zip_code": "10025", "time_zone": "America/New_York" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, centers) = get_json(&router, "/centers").await;
    assert_eq!(centers.as_array().unwrap().len(), 2);
    assert_eq!(centers[1]["id"], created["id"]);

    let (status, body) = get_json(&router, "/centers/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Center not found");
}

#[tokio::test]
async fn test_slots_query_validation() {
    let (_dir, router) = stub();

    let (status, slots) = get_json(&router, "/slots?customer=c1&service=1&date=2025-03-14").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slots[0]["date"], "2025-03-14");
    assert_eq!(slots[0]["currency"], "USD");

    let (status, body) = get_json(&router, "/slots?customer=c1&service=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let (status, _) = get_json(&router, "/slots?customer=c1&service=1&date=14-03-2025").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json(&router, "/slots/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Slot not found");
}

#[tokio::test]
async fn test_booking_round_trip() {
    let (_dir, router) = stub();

    let (status, receipt) = send(
        &router,
        Method::POST,
        "/bookings",
        Some(json!({
            "slot_id": "1",
            "customer_id": "c1",
            "service_id": "1",
            "employee_id": "1",
            "center_id": "1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["status"], "reserved");

    let id = receipt["id"].as_str().unwrap();
    let (status, detail) = get_json(&router, &format!("/bookings/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["status"], "confirmed");
    assert_eq!(detail["start_time"], "09:00:00");

    let (status, body) = get_json(&router, "/bookings/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Booking not found");
}

#[tokio::test]
async fn test_canned_external_provider_routes() {
    let dir = TempDir::new().unwrap();
    let resources = resources_with(
        Arc::new(MappedExternalProvider::canned()),
        file_catalog(write_snapshot(dir.path(), &snapshot_a())),
    );
    let router = build_router(resources);

    let (status, client) = send(&router, Method::POST, "/clients", Some(json!({ "name": "Jane Doe" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(client["id"], "ZEN123456");
    assert_eq!(client["name"], "Jane Doe");

    let (_, service) = get_json(&router, "/services/S1").await;
    assert_eq!(service["service_name"], "Facial");
    assert_eq!(service["price"], "150.00");

    let (status, _) = get_json(&router, "/centers/C1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, ready) = get_json(&router, "/ready").await;
    assert_eq!(ready["provider"], "external");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let (_dir, router) = stub();

    let (status, body) = get_json(&router, "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}
