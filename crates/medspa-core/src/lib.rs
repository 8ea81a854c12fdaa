// ABOUTME: Core types and constants for the MedSpa booking gateway
// ABOUTME: Foundation crate with error handling, booking models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MedSpa` Core
//!
//! Foundation crate providing shared types and constants for the booking
//! gateway. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and provider errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Simplified booking entities shared by every provider

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Simplified booking entities (clients, employees, services, slots, bookings, centers)
pub mod models;
