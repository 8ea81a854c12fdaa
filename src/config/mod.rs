// ABOUTME: Configuration module for the booking gateway
// ABOUTME: Environment-driven server, catalog, provider, and CORS settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{
    CatalogConfig, CatalogSourceKind, CorsConfig, Environment, ExternalApiConfig, ServerConfig,
};
