// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Root banner, liveness, and readiness including catalog snapshot state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use crate::constants::service_names::API_TITLE;
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_root))
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_root() -> Json<Value> {
        Json(json!({ "message": API_TITLE }))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Ready even without a catalog snapshot; the first catalog query retries the load
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let catalog = resources.catalog.summary().map_or_else(
            || json!({ "loaded": false }),
            |stats| {
                json!({
                    "loaded": true,
                    "categories_count": stats.categories_count,
                    "services_count": stats.services_count,
                    "loaded_at": stats.loaded_at.to_rfc3339()
                })
            },
        );

        Json(json!({
            "status": "ready",
            "provider": resources.provider.name(),
            "catalog": catalog,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
