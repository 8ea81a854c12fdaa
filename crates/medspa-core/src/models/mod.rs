// ABOUTME: Simplified booking entities shared by every provider implementation
// ABOUTME: Request and response records for clients, employees, services, centers, slots, bookings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Booking models
//!
//! Providers accept these simple records and map them onto whatever richer
//! schema their backing platform uses. Responses are reduced back to the
//! same simple shapes so callers never see provider-specific fields.

/// Booking creation, receipt, and detail records
pub mod booking;
/// Treatment center records
pub mod center;
/// Client records
pub mod client;
/// Employee records
pub mod employee;
/// Fixed-point currency amounts
pub mod money;
/// Bookable service records
pub mod service;
/// Appointment slot records and slot queries
pub mod slot;

use std::fmt;

pub use booking::{BookingCreate, BookingDetail, BookingReceipt};
pub use center::{Center, CenterCreate};
pub use client::{Client, ClientCreate};
pub use employee::{Employee, EmployeeCreate};
pub use money::Money;
pub use service::{Service, ServiceCreate};
pub use slot::{Slot, SlotQuery};

/// Kinds of booking entity, used for not-found reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Client record
    Client,
    /// Bookable service
    Service,
    /// Treatment center
    Center,
    /// Staff member
    Employee,
    /// Appointment slot
    Slot,
    /// Booking
    Booking,
}

impl EntityKind {
    /// Display name used in error messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Service => "Service",
            Self::Center => "Center",
            Self::Employee => "Employee",
            Self::Slot => "Slot",
            Self::Booking => "Booking",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
