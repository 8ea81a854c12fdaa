// ABOUTME: Shared server resources injected into every route handler
// ABOUTME: Holds the selected booking provider, the catalog service, and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::CatalogService;
use crate::config::ServerConfig;
use crate::providers::BookingProvider;
use std::sync::Arc;

/// Dependencies resolved once at startup and shared by all requests
#[derive(Clone)]
pub struct ServerResources {
    /// Booking provider chosen by the `PROVIDER` selector
    pub provider: Arc<dyn BookingProvider>,
    /// Catalog snapshot service
    pub catalog: Arc<CatalogService>,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle resolved dependencies
    #[must_use]
    pub fn new(
        config: ServerConfig,
        provider: Arc<dyn BookingProvider>,
        catalog: Arc<CatalogService>,
    ) -> Self {
        Self {
            provider,
            catalog,
            config: Arc::new(config),
        }
    }
}
