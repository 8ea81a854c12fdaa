// ABOUTME: Gateway binary wiring configuration, logging, provider selection, and the catalog
// ABOUTME: Exits on configuration errors; a failed initial catalog load only warns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MedSpa Gateway Server Binary
//!
//! Starts the booking gateway with the provider named by `PROVIDER` and the
//! catalog snapshot named by `CATALOG_SOURCE`.

use anyhow::{Context, Result};
use clap::Parser;
use medspa_gateway::{
    catalog::CatalogService,
    config::ServerConfig,
    logging,
    providers::create_provider,
    resources::ServerResources,
    server,
    utils::http_client,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Parser)]
#[command(name = "medspa-gateway")]
#[command(about = "MedSpa Booking API - booking providers and a reloadable service catalog")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the booking provider selector (test, stub, external)
    #[arg(long)]
    provider: Option<String>,

    /// Override the catalog snapshot file
    #[arg(long)]
    catalog_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG and LOG_FORMAT may come from .env
    let dotenv = dotenvy::dotenv();
    logging::init_from_env()?;
    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env file"),
        Err(e) => debug!("No .env file found or failed to load: {e}"),
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(provider) = args.provider {
        config.provider = provider;
    }
    if let Some(catalog_file) = args.catalog_file {
        config.catalog.file = catalog_file;
    }
    config
        .validate()
        .context("Invalid configuration after command-line overrides")?;

    info!("Starting MedSpa Booking API");
    info!("{}", config.summary());

    let provider = create_provider(&config.provider, &config.external_api)
        .context("Failed to create booking provider")?;

    let catalog = Arc::new(CatalogService::new(
        config.catalog.to_source()?,
        http_client::shared_client().clone(),
    ));
    match catalog.reload().await {
        Ok(stats) => info!(
            categories = stats.categories_count,
            services = stats.services_count,
            "Initial catalog snapshot loaded"
        ),
        Err(e) => warn!(
            error = %e,
            "Initial catalog load failed; catalog routes retry on first request"
        ),
    }

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(config, provider, catalog));
    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}:{}", config.host, config.http_port);

    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Root:              GET  {base}/");
    info!("   Liveness:          GET  {base}/health");
    info!("   Readiness:         GET  {base}/ready");
    info!("Catalog:");
    info!("   Categories:        GET  {base}/catalog/categories");
    info!("   By Category:       GET  {base}/catalog/services/{{category}}");
    info!("   Add-ons:           GET  {base}/catalog/addons/{{service}}");
    info!("   Staff:             GET  {base}/catalog/staff/{{service}}");
    info!("   Full Tree:         GET  {base}/catalog/all");
    info!("   Reload:            GET  {base}/catalog/reload");
    info!("Booking ({}):", config.provider);
    info!("   Clients:           GET/POST {base}/clients, GET/DELETE {base}/clients/{{id}}");
    info!("   Employees:         GET/POST {base}/employees, GET {base}/employees/{{id}}");
    info!("   Employee Schema:   GET  {base}/employees/schema");
    info!("   Services:          GET/POST {base}/services, GET {base}/services/{{id}}");
    info!("   Centers:           GET/POST {base}/centers, GET {base}/centers/{{id}}");
    info!("   Slots:             GET  {base}/slots?customer=&service=&date=, GET {base}/slots/{{id}}");
    info!("   Bookings:          POST {base}/bookings, GET {base}/bookings/{{id}}");
    info!("=== End of Endpoint List ===");
}
