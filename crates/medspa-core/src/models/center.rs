// ABOUTME: Treatment center records exposed by providers
// ABOUTME: Centers carry the postal code and IANA time zone used for scheduling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Center creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterCreate {
    /// Center name
    pub center_name: String,
    /// Postal code
    pub zip_code: String,
    /// IANA time zone name
    pub time_zone: String,
}

/// Center as returned by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    /// Provider-assigned identifier
    pub id: String,
    /// Center name
    pub center_name: String,
    /// Postal code
    pub zip_code: String,
    /// IANA time zone name
    pub time_zone: String,
}

impl Center {
    /// Build a center from a creation request and an assigned id
    #[must_use]
    pub fn from_request(id: String, request: CenterCreate) -> Self {
        Self {
            id,
            center_name: request.center_name,
            zip_code: request.zip_code,
            time_zone: request.time_zone,
        }
    }
}
