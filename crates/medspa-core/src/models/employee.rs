// ABOUTME: Employee request and response records for the booking facade
// ABOUTME: Specialties default to empty and employees default to available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Employee creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    /// Display name
    pub name: String,
    /// Center the employee works at
    pub center_id: String,
    /// Treatments the employee performs
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
}

/// Employee as returned by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Provider-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Center the employee works at
    pub center_id: String,
    /// Treatments the employee performs
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether the employee currently takes bookings
    #[serde(default = "default_available")]
    pub is_available: bool,
}

const fn default_available() -> bool {
    true
}
