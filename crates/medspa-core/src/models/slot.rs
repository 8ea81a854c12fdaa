// ABOUTME: Appointment slot records and the availability query accepted by providers
// ABOUTME: Dates and times use chrono naive types, serialized as ISO-8601 strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Money;
use crate::constants::booking::DEFAULT_CURRENCY;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Availability query: who wants what, on which day, optionally with whom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQuery {
    /// Customer identifier
    pub customer: String,
    /// Service identifier
    pub service: String,
    /// Requested day
    pub date: NaiveDate,
    /// Preferred employee
    #[serde(default)]
    pub employee: Option<String>,
}

/// Bookable appointment slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot identifier
    pub id: String,
    /// Center hosting the appointment
    pub center_id: String,
    /// Service being booked
    pub service_id: String,
    /// Appointment day
    pub date: NaiveDate,
    /// Start time (center local)
    pub start_time: NaiveTime,
    /// End time (center local)
    pub end_time: NaiveTime,
    /// Employee performing the service
    pub employee_id: String,
    /// Price of the slot
    pub price: Money,
    /// ISO-4217 currency code
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}
