// ABOUTME: Treatment center route handlers delegating to the selected booking provider
// ABOUTME: Create, fetch, and list centers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::CenterCreate;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Center routes
pub struct CenterRoutes;

impl CenterRoutes {
    /// Create all center routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/centers",
                get(Self::handle_list_centers).post(Self::handle_create_center),
            )
            .route("/centers/:center_id", get(Self::handle_get_center))
            .with_state(resources)
    }

    async fn handle_create_center(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<CenterCreate>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let center = resources.provider.create_center(request).await?;
        Ok((StatusCode::OK, Json(center)).into_response())
    }

    async fn handle_get_center(
        State(resources): State<Arc<ServerResources>>,
        Path(center_id): Path<String>,
    ) -> Result<Response, AppError> {
        let center = resources.provider.get_center(&center_id).await?;
        Ok((StatusCode::OK, Json(center)).into_response())
    }

    async fn handle_list_centers(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let centers = resources.provider.list_centers().await?;
        Ok((StatusCode::OK, Json(centers)).into_response())
    }
}
