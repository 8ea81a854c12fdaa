// ABOUTME: Booking model re-exports for the gateway crate
// ABOUTME: Clients, employees, services, centers, slots, bookings, and money
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use medspa_core::models::*;
