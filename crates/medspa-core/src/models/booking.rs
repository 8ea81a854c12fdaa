// ABOUTME: Booking creation request, reservation receipt, and booking detail records
// ABOUTME: A receipt confirms a held slot; the detail is what a later lookup returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreate {
    /// Slot being reserved
    pub slot_id: String,
    /// Customer making the booking
    pub customer_id: String,
    /// Service being booked
    pub service_id: String,
    /// Employee performing the service
    pub employee_id: String,
    /// Center hosting the appointment
    pub center_id: String,
}

/// Receipt returned when a booking is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    /// Booking identifier
    pub id: String,
    /// Reserved slot
    pub slot_id: String,
    /// Booking status
    pub status: String,
    /// When the reservation hold lapses
    pub expires_at: DateTime<Utc>,
}

/// Booking as returned by a lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetail {
    /// Booking identifier
    pub id: String,
    /// Booking status
    pub status: String,
    /// Booked service
    pub service_id: String,
    /// Assigned employee
    pub employee_id: String,
    /// Start time (center local)
    pub start_time: NaiveTime,
    /// End time (center local)
    pub end_time: NaiveTime,
}
