// ABOUTME: Catalog route handlers for categories, services, add-ons, staff, and the full tree
// ABOUTME: Name lookups answer 404 on a miss; snapshot and integrity failures answer 500
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::CatalogError;
use crate::errors::{AppError, ErrorCode};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Reload outcome
#[derive(Debug, Serialize)]
struct ReloadResponse {
    success: bool,
    message: &'static str,
    categories_count: usize,
    services_count: usize,
}

/// Prefix server-side failures with the operation; lookup misses keep their message
fn catalog_failure(error: CatalogError, operation: &str) -> AppError {
    let app_error = AppError::from(error);
    if app_error.code == ErrorCode::ResourceNotFound {
        app_error
    } else {
        app_error.context(operation)
    }
}

/// Catalog routes
pub struct CatalogRoutes;

impl CatalogRoutes {
    /// Create all catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/catalog/categories", get(Self::handle_categories))
            .route("/catalog/services/:category", get(Self::handle_services))
            .route("/catalog/addons/:service", get(Self::handle_addons))
            .route("/catalog/staff/:service", get(Self::handle_staff))
            .route("/catalog/all", get(Self::handle_all))
            .route("/catalog/reload", get(Self::handle_reload))
            .with_state(resources)
    }

    async fn handle_categories(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let categories = resources
            .catalog
            .categories()
            .await
            .map_err(|e| catalog_failure(e, "Error loading service categories"))?;
        Ok((StatusCode::OK, Json(categories)).into_response())
    }

    async fn handle_services(
        State(resources): State<Arc<ServerResources>>,
        Path(category): Path<String>,
    ) -> Result<Response, AppError> {
        let services = resources
            .catalog
            .services_by_category(&category)
            .await
            .map_err(|e| catalog_failure(e, "Error loading services"))?;
        Ok((StatusCode::OK, Json(services)).into_response())
    }

    async fn handle_addons(
        State(resources): State<Arc<ServerResources>>,
        Path(service): Path<String>,
    ) -> Result<Response, AppError> {
        let addons = resources
            .catalog
            .addons_by_service(&service)
            .await
            .map_err(|e| catalog_failure(e, "Error loading add-ons"))?;
        Ok((StatusCode::OK, Json(addons)).into_response())
    }

    async fn handle_staff(
        State(resources): State<Arc<ServerResources>>,
        Path(service): Path<String>,
    ) -> Result<Response, AppError> {
        let staff = resources
            .catalog
            .staff_by_service(&service)
            .await
            .map_err(|e| catalog_failure(e, "Error loading staff"))?;
        Ok((StatusCode::OK, Json(staff)).into_response())
    }

    async fn handle_all(State(resources): State<Arc<ServerResources>>) -> Result<Response, AppError> {
        let tree = resources
            .catalog
            .all_data()
            .await
            .map_err(|e| catalog_failure(e, "Error loading all data"))?;
        Ok((StatusCode::OK, Json(tree)).into_response())
    }

    async fn handle_reload(State(resources): State<Arc<ServerResources>>) -> Result<Response, AppError> {
        let stats = resources
            .catalog
            .reload()
            .await
            .map_err(|e| catalog_failure(e, "Error refreshing services data"))?;

        Ok((
            StatusCode::OK,
            Json(ReloadResponse {
                success: true,
                message: "Services data refreshed successfully",
                categories_count: stats.categories_count,
                services_count: stats.services_count,
            }),
        )
            .into_response())
    }
}
