// ABOUTME: Slot availability route handlers with query-string validation
// ABOUTME: Missing or malformed customer, service, or date parameters answer 400
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::SlotQuery;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Slot routes
pub struct SlotRoutes;

impl SlotRoutes {
    /// Create all slot routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/slots", get(Self::handle_available_slots))
            .route("/slots/:slot_id", get(Self::handle_get_slot))
            .with_state(resources)
    }

    async fn handle_available_slots(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<SlotQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let slots = resources.provider.list_available_slots(&query).await?;
        Ok((StatusCode::OK, Json(slots)).into_response())
    }

    async fn handle_get_slot(
        State(resources): State<Arc<ServerResources>>,
        Path(slot_id): Path<String>,
    ) -> Result<Response, AppError> {
        let slot = resources.provider.get_slot(&slot_id).await?;
        Ok((StatusCode::OK, Json(slot)).into_response())
    }
}
