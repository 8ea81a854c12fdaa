// ABOUTME: Error handling re-exports for the gateway crate
// ABOUTME: AppError, ErrorCode, and ProviderError live in medspa-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use medspa_core::errors::*;
