// ABOUTME: Booking route handlers for reserving slots and reading bookings back
// ABOUTME: Creation returns a reservation receipt; reads return the booking detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::BookingCreate;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Booking routes
pub struct BookingRoutes;

impl BookingRoutes {
    /// Create all booking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/bookings", post(Self::handle_create_booking))
            .route("/bookings/:booking_id", get(Self::handle_get_booking))
            .with_state(resources)
    }

    async fn handle_create_booking(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<BookingCreate>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let receipt = resources.provider.create_booking(request).await?;
        Ok((StatusCode::OK, Json(receipt)).into_response())
    }

    async fn handle_get_booking(
        State(resources): State<Arc<ServerResources>>,
        Path(booking_id): Path<String>,
    ) -> Result<Response, AppError> {
        let booking = resources.provider.get_booking(&booking_id).await?;
        Ok((StatusCode::OK, Json(booking)).into_response())
    }
}
