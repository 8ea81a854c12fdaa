// ABOUTME: Bookable service records exposed by providers
// ABOUTME: Prices use fixed-point Money so they serialize as exact decimal strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Money;
use serde::{Deserialize, Serialize};

/// Service creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCreate {
    /// Service name
    pub service_name: String,
    /// List price
    pub price: Money,
    /// Duration in minutes
    pub duration: u32,
}

/// Service as returned by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Provider-assigned identifier
    pub id: String,
    /// Service name
    pub service_name: String,
    /// List price
    pub price: Money,
    /// Duration in minutes
    pub duration: u32,
}
