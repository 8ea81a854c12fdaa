// ABOUTME: Request and response shapes of the external scheduling platform
// ABOUTME: Field-level mapping helpers from simplified booking models to the richer external schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::external::{
    DEFAULT_CENTER_ID, DEFAULT_COMMISSION_PERCENTAGE, DEFAULT_SHIFT, STAFF_EMAIL_DOMAIN,
};
use crate::models::{
    BookingDetail, BookingReceipt, Center, CenterCreate, Client, ClientCreate, Employee,
    EmployeeCreate, Money, Service, ServiceCreate, Slot,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Placeholder first name when a request carries no name
pub const UNKNOWN_NAME: &str = "Unknown";

const WORKING_DAYS: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];

/// Split a display name into first name and the remaining words
///
/// ```rust
/// use medspa_gateway::providers::external::schema::split_name;
///
/// assert_eq!(split_name(Some("Mary Ann Lee")), ("Mary".to_owned(), "Ann Lee".to_owned()));
/// assert_eq!(split_name(None), ("Unknown".to_owned(), String::new()));
/// ```
#[must_use]
pub fn split_name(name: Option<&str>) -> (String, String) {
    let mut words = name.unwrap_or_default().split_whitespace();
    let first = words.next().unwrap_or(UNKNOWN_NAME).to_owned();
    let rest = words.collect::<Vec<_>>().join(" ");
    (first, rest)
}

/// Stable four-digit employee code derived from the name
///
/// The same name always yields the same code across restarts.
#[must_use]
pub fn employee_code(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    let mut prefix = [0_u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    format!("EMP{:04}", u64::from_be_bytes(prefix) % 10_000)
}

/// Generated staff mailbox: lowercase name, spaces replaced by dots
#[must_use]
pub fn staff_email(name: &str) -> String {
    format!("{}@{STAFF_EMAIL_DOMAIN}", name.to_lowercase().replace(' ', "."))
}

fn join_name(first: &str, last: &str) -> String {
    if last.is_empty() {
        first.to_owned()
    } else {
        format!("{first} {last}")
    }
}

// ============================================================================
// Guests
// ============================================================================

/// Guest registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCreateRequest {
    /// Given name, `Unknown` when absent
    pub first_name: String,
    /// Remaining name words
    pub last_name: String,
    /// Mobile number, empty when absent
    pub mobile_number: String,
    /// Email, empty when absent
    pub email: String,
    /// Defaulted gender
    pub gender: String,
    /// Home center
    pub center_id: String,
    /// Membership tier
    pub membership_type: String,
    /// Channel that created the guest
    pub source: String,
}

impl From<&ClientCreate> for GuestCreateRequest {
    fn from(client: &ClientCreate) -> Self {
        let (first_name, last_name) = split_name(client.name.as_deref());
        Self {
            first_name,
            last_name,
            mobile_number: client.phone.clone().unwrap_or_default(),
            email: client.email.clone().unwrap_or_default(),
            gender: "Other".to_owned(),
            center_id: DEFAULT_CENTER_ID.to_owned(),
            membership_type: "Regular".to_owned(),
            source: "API".to_owned(),
        }
    }
}

impl GuestCreateRequest {
    /// Display name the platform assigns to this guest
    #[must_use]
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// Guest record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Platform guest id
    pub guest_id: String,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Loyalty tier
    #[serde(default)]
    pub membership_level: Option<String>,
    /// Loyalty balance
    #[serde(default)]
    pub loyalty_points: u32,
}

impl From<Guest> for Client {
    fn from(guest: Guest) -> Self {
        Self {
            id: guest.guest_id,
            name: guest.full_name,
            phone: guest.phone,
            email: guest.email,
            created_at: None,
        }
    }
}

/// Guest listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestList {
    /// Guests
    #[serde(default)]
    pub guests: Vec<Guest>,
}

// ============================================================================
// Staff
// ============================================================================

/// Staff registration payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffCreateRequest {
    /// Name-derived code, `EMPnnnn`
    pub employee_code: String,
    /// Given name
    pub first_name: String,
    /// Remaining name words
    pub last_name: String,
    /// Generated mailbox
    pub email: String,
    /// Mobile number, empty when absent
    pub mobile_number: String,
    /// Job title
    pub designation: String,
    /// Assigned center
    pub center_id: String,
    /// Commission in percent
    pub commission_percentage: f64,
    /// Specialties
    pub service_categories: Vec<String>,
    /// Weekday shifts, Monday first
    pub working_hours: IndexMap<String, String>,
    /// Hire date
    pub hire_date: NaiveDate,
    /// Contract type
    pub employee_type: String,
    /// Active flag
    pub is_active: bool,
}

impl StaffCreateRequest {
    /// Map a simplified employee onto the platform schema
    #[must_use]
    pub fn from_employee(employee: &EmployeeCreate, hire_date: NaiveDate) -> Self {
        let (first_name, last_name) = split_name(Some(&employee.name));
        Self {
            employee_code: employee_code(&employee.name),
            first_name,
            last_name,
            email: staff_email(&employee.name),
            mobile_number: employee.phone.clone().unwrap_or_default(),
            designation: "Therapist".to_owned(),
            center_id: employee.center_id.clone(),
            commission_percentage: DEFAULT_COMMISSION_PERCENTAGE,
            service_categories: employee.specialties.clone(),
            working_hours: WORKING_DAYS
                .iter()
                .map(|day| ((*day).to_owned(), DEFAULT_SHIFT.to_owned()))
                .collect(),
            hire_date,
            employee_type: "full_time".to_owned(),
            is_active: true,
        }
    }

    /// Display name the platform assigns to this staff member
    #[must_use]
    pub fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// Staff record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// Platform staff id
    pub staff_id: String,
    /// Display name
    pub display_name: String,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Specialties
    #[serde(default)]
    pub specializations: Vec<String>,
    /// Assigned center
    pub center_id: String,
    /// Active flag
    #[serde(default)]
    pub is_active: bool,
}

impl From<StaffRecord> for Employee {
    fn from(staff: StaffRecord) -> Self {
        Self {
            id: staff.staff_id,
            name: staff.display_name,
            center_id: staff.center_id,
            specialties: staff.specializations,
            phone: staff.phone.filter(|phone| !phone.is_empty()),
            is_available: staff.is_active,
        }
    }
}

/// Staff listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffList {
    /// Staff records
    #[serde(default)]
    pub employees: Vec<StaffRecord>,
}

// ============================================================================
// Services and centers
// ============================================================================

/// Service record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Platform service id
    pub service_id: String,
    /// Display name
    pub name: String,
    /// List price
    pub price: Money,
    /// Duration in minutes
    pub duration_minutes: u32,
}

impl From<ServiceRecord> for Service {
    fn from(record: ServiceRecord) -> Self {
        Self {
            id: record.service_id,
            service_name: record.name,
            price: record.price,
            duration: record.duration_minutes,
        }
    }
}

/// Service registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCreateRequest {
    /// Display name
    pub name: String,
    /// List price
    pub price: Money,
    /// Duration in minutes
    pub duration_minutes: u32,
}

impl From<&ServiceCreate> for ServiceCreateRequest {
    fn from(service: &ServiceCreate) -> Self {
        Self {
            name: service.service_name.clone(),
            price: service.price,
            duration_minutes: service.duration,
        }
    }
}

/// Service listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceList {
    /// Services
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}

/// Center record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterRecord {
    /// Platform center id
    pub center_id: String,
    /// Display name
    pub display_name: String,
    /// Postal code
    pub zip: String,
    /// IANA time zone
    pub timezone: String,
}

impl From<CenterRecord> for Center {
    fn from(record: CenterRecord) -> Self {
        Self {
            id: record.center_id,
            center_name: record.display_name,
            zip_code: record.zip,
            time_zone: record.timezone,
        }
    }
}

/// Center registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterCreateRequest {
    /// Display name
    pub display_name: String,
    /// Postal code
    pub zip: String,
    /// IANA time zone
    pub timezone: String,
}

impl From<&CenterCreate> for CenterCreateRequest {
    fn from(center: &CenterCreate) -> Self {
        Self {
            display_name: center.center_name.clone(),
            zip: center.zip_code.clone(),
            timezone: center.time_zone.clone(),
        }
    }
}

/// Center listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CenterList {
    /// Centers
    #[serde(default)]
    pub centers: Vec<CenterRecord>,
}

// ============================================================================
// Availability and appointments
// ============================================================================

/// Open appointment slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Platform slot id
    pub slot_id: String,
    /// Center offering the slot
    pub center_id: String,
    /// Service the slot is for
    pub service_id: String,
    /// Therapist
    pub therapist_id: String,
    /// Day
    pub date: NaiveDate,
    /// Start time
    pub start_time: NaiveTime,
    /// End time
    pub end_time: NaiveTime,
    /// Price
    pub price: Money,
    /// ISO currency code
    pub currency: String,
}

impl From<SlotRecord> for Slot {
    fn from(record: SlotRecord) -> Self {
        Self {
            id: record.slot_id,
            center_id: record.center_id,
            service_id: record.service_id,
            date: record.date,
            start_time: record.start_time,
            end_time: record.end_time,
            employee_id: record.therapist_id,
            price: record.price,
            currency: record.currency,
        }
    }
}

/// Slot listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotList {
    /// Slots
    #[serde(default)]
    pub slots: Vec<SlotRecord>,
}

/// Appointment reservation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCreateRequest {
    /// Slot to reserve
    pub slot_id: String,
    /// Guest reserving it
    pub guest_id: String,
    /// Service booked
    pub service_id: String,
    /// Therapist
    pub therapist_id: String,
    /// Center
    pub center_id: String,
}

/// Reservation confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentReservation {
    /// Platform booking id
    pub booking_id: String,
    /// Reserved slot
    pub slot_id: String,
    /// Reservation status
    pub status: String,
    /// When the hold lapses
    pub expires_at: DateTime<Utc>,
}

impl From<AppointmentReservation> for BookingReceipt {
    fn from(reservation: AppointmentReservation) -> Self {
        Self {
            id: reservation.booking_id,
            slot_id: reservation.slot_id,
            status: reservation.status,
            expires_at: reservation.expires_at,
        }
    }
}

/// Appointment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    /// Platform booking id
    pub booking_id: String,
    /// Current status
    pub status: String,
    /// Service booked
    pub service_id: String,
    /// Therapist
    pub therapist_id: String,
    /// Start time
    pub start_time: NaiveTime,
    /// End time
    pub end_time: NaiveTime,
}

impl From<AppointmentRecord> for BookingDetail {
    fn from(record: AppointmentRecord) -> Self {
        Self {
            id: record.booking_id,
            status: record.status,
            service_id: record.service_id,
            employee_id: record.therapist_id,
            start_time: record.start_time,
            end_time: record.end_time,
        }
    }
}
