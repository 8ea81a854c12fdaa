// ABOUTME: HTTP server assembly merging domain routers under shared middleware
// ABOUTME: Binds the configured address and serves until Ctrl+C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{
    BookingRoutes, CatalogRoutes, CenterRoutes, ClientRoutes, EmployeeRoutes, HealthRoutes,
    ServiceRoutes, SlotRoutes,
};
use anyhow::Context;
use axum::{middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(CatalogRoutes::routes(Arc::clone(&resources)))
        .merge(ClientRoutes::routes(Arc::clone(&resources)))
        .merge(EmployeeRoutes::routes(Arc::clone(&resources)))
        .merge(ServiceRoutes::routes(Arc::clone(&resources)))
        .merge(CenterRoutes::routes(Arc::clone(&resources)))
        .merge(SlotRoutes::routes(Arc::clone(&resources)))
        .merge(BookingRoutes::routes(resources))
        .fallback(handle_unknown_route)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
}

async fn handle_unknown_route() -> AppError {
    AppError::not_found_with("Route not found")
}

/// Serve the router on the configured address until a shutdown signal arrives
pub async fn run(resources: Arc<ServerResources>) -> anyhow::Result<()> {
    let address = format!(
        "{}:{}",
        resources.config.host, resources.config.http_port
    );
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {address}"))?;

    info!(address = %address, "HTTP server listening");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("HTTP server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or, on unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
