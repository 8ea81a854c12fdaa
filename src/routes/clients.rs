// ABOUTME: Client route handlers delegating to the selected booking provider
// ABOUTME: Create, fetch, list, and delete clients with fixed not-found messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::ClientCreate;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Client routes
pub struct ClientRoutes;

impl ClientRoutes {
    /// Create all client routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/clients",
                get(Self::handle_list_clients).post(Self::handle_create_client),
            )
            .route(
                "/clients/:client_id",
                get(Self::handle_get_client).delete(Self::handle_delete_client),
            )
            .with_state(resources)
    }

    async fn handle_create_client(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<ClientCreate>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let client = resources.provider.create_client(request).await?;
        Ok((StatusCode::OK, Json(client)).into_response())
    }

    async fn handle_get_client(
        State(resources): State<Arc<ServerResources>>,
        Path(client_id): Path<String>,
    ) -> Result<Response, AppError> {
        let client = resources.provider.get_client(&client_id).await?;
        Ok((StatusCode::OK, Json(client)).into_response())
    }

    async fn handle_list_clients(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let clients = resources.provider.list_clients().await?;
        Ok((StatusCode::OK, Json(clients)).into_response())
    }

    async fn handle_delete_client(
        State(resources): State<Arc<ServerResources>>,
        Path(client_id): Path<String>,
    ) -> Result<Response, AppError> {
        resources.provider.delete_client(&client_id).await?;
        Ok((
            StatusCode::OK,
            Json(json!({ "message": "Client deleted successfully" })),
        )
            .into_response())
    }
}
