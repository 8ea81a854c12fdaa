// ABOUTME: Constants re-exports for the gateway crate
// ABOUTME: Domain-grouped constants live in medspa-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use medspa_core::constants::*;
