// ABOUTME: Main library entry point for the MedSpa booking gateway
// ABOUTME: Booking provider facade plus a reloadable, read-only service catalog over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # MedSpa Booking Gateway
//!
//! An HTTP gateway that lets booking assistants work against one simplified
//! booking model while the selected provider maps it onto whatever scheduling
//! platform sits behind it.
//!
//! ## Architecture
//!
//! - **Providers**: `BookingProvider` implementations chosen once at startup
//!   (`StubProvider` in memory, `MappedExternalProvider` over a transport)
//! - **Catalog**: immutable menu snapshots (categories, services, add-ons,
//!   staff) published behind a swappable reference and reloadable on demand
//! - **Routes**: thin axum handlers over `ServerResources`
//! - **Config**: environment-driven `ServerConfig`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use medspa_gateway::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("MedSpa gateway configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Catalog snapshots, queries, and the reloading service
pub mod catalog;

/// Environment-driven server configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request ids)
pub mod middleware;

/// Simplified booking models
pub mod models;

/// Booking provider trait and implementations
pub mod providers;

/// Shared dependencies injected into route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and HTTP serving
pub mod server;

/// HTTP client helpers
pub mod utils;
