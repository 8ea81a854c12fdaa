// ABOUTME: Route module organization for the booking gateway HTTP endpoints
// ABOUTME: One route struct per domain, each with thin handlers over shared server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the booking provider or the catalog service.

pub mod bookings;
pub mod catalog;
pub mod centers;
pub mod clients;
pub mod employees;
pub mod health;
pub mod services;
pub mod slots;

pub use bookings::BookingRoutes;
pub use catalog::CatalogRoutes;
pub use centers::CenterRoutes;
pub use clients::ClientRoutes;
pub use employees::EmployeeRoutes;
pub use health::HealthRoutes;
pub use services::ServiceRoutes;
pub use slots::SlotRoutes;
