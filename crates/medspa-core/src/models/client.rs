// ABOUTME: Client request and response records for the booking facade
// ABOUTME: All contact fields are optional so callers can register partial profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client creation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCreate {
    /// Full name
    #[serde(default)]
    pub name: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

/// Client as returned by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Provider-assigned identifier
    pub id: String,
    /// Full name
    pub name: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Creation time, when the provider tracks it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Client {
    /// Build a client from a creation request and an assigned id
    #[must_use]
    pub fn from_request(id: String, request: ClientCreate) -> Self {
        Self {
            id,
            name: request.name,
            phone: request.phone,
            email: request.email,
            created_at: None,
        }
    }
}
