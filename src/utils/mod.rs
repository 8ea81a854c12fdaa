// ABOUTME: Shared utilities used across the gateway
// ABOUTME: Outbound HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Outbound HTTP clients
pub mod http_client;
