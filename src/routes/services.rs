// ABOUTME: Bookable service route handlers delegating to the selected booking provider
// ABOUTME: Distinct from the catalog routes, which read the published menu snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::ServiceCreate;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Service routes
pub struct ServiceRoutes;

impl ServiceRoutes {
    /// Create all service routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/services",
                get(Self::handle_list_services).post(Self::handle_create_service),
            )
            .route("/services/:service_id", get(Self::handle_get_service))
            .with_state(resources)
    }

    async fn handle_create_service(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<ServiceCreate>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let service = resources.provider.create_service(request).await?;
        Ok((StatusCode::OK, Json(service)).into_response())
    }

    async fn handle_get_service(
        State(resources): State<Arc<ServerResources>>,
        Path(service_id): Path<String>,
    ) -> Result<Response, AppError> {
        let service = resources.provider.get_service(&service_id).await?;
        Ok((StatusCode::OK, Json(service)).into_response())
    }

    async fn handle_list_services(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let services = resources.provider.list_services().await?;
        Ok((StatusCode::OK, Json(services)).into_response())
    }
}
