// ABOUTME: Booking provider trait shared by every scheduling backend
// ABOUTME: Simplified request and response models in, typed AppError out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Booking Provider Contract
//!
//! Every backend accepts the same simplified models (`ClientCreate`,
//! `SlotQuery`, ...) and returns the same simplified responses. Whatever
//! richer schema a backend speaks stays inside its implementation.
//!
//! ## Error Handling
//!
//! All operations return `AppResult<T>`:
//! - Missing entities are `ResourceNotFound` with a fixed per-kind message
//! - Upstream failures arrive as `ProviderError` and map to 502/503
//! - Corrupted internal state (poisoned locks) maps to a configuration error
//!
//! ## Example
//!
//! ```rust,no_run
//! use medspa_gateway::providers::{BookingProvider, StubProvider};
//! use medspa_gateway::models::ClientCreate;
//!
//! # async fn example() -> medspa_gateway::errors::AppResult<()> {
//! let provider = StubProvider::new();
//! let client = provider
//!     .create_client(ClientCreate {
//!         name: Some("Jane Doe".to_owned()),
//!         phone: Some("555-0100".to_owned()),
//!         email: None,
//!     })
//!     .await?;
//! let fetched = provider.get_client(&client.id).await?;
//! assert_eq!(fetched.name, client.name);
//! # Ok(())
//! # }
//! ```

use crate::errors::AppResult;
use crate::models::{
    BookingCreate, BookingDetail, BookingReceipt, Center, CenterCreate, Client, ClientCreate,
    Employee, EmployeeCreate, Service, ServiceCreate, Slot, SlotQuery,
};
use async_trait::async_trait;

/// Capability set every booking backend implements
#[async_trait]
pub trait BookingProvider: Send + Sync {
    /// Selector name of this provider
    fn name(&self) -> &'static str;

    // ------------------------------------------------------------------------
    // Clients
    // ------------------------------------------------------------------------

    /// Register a client
    async fn create_client(&self, request: ClientCreate) -> AppResult<Client>;

    /// Fetch a client by id
    async fn get_client(&self, client_id: &str) -> AppResult<Client>;

    /// All known clients
    async fn list_clients(&self) -> AppResult<Vec<Client>>;

    /// Remove a client
    async fn delete_client(&self, client_id: &str) -> AppResult<()>;

    // ------------------------------------------------------------------------
    // Employees
    // ------------------------------------------------------------------------

    /// Register an employee
    async fn create_employee(&self, request: EmployeeCreate) -> AppResult<Employee>;

    /// Fetch an employee by id
    async fn get_employee(&self, employee_id: &str) -> AppResult<Employee>;

    /// All known employees
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    // ------------------------------------------------------------------------
    // Services
    // ------------------------------------------------------------------------

    /// Register a bookable service
    async fn create_service(&self, request: ServiceCreate) -> AppResult<Service>;

    /// Fetch a service by id
    async fn get_service(&self, service_id: &str) -> AppResult<Service>;

    /// All bookable services
    async fn list_services(&self) -> AppResult<Vec<Service>>;

    // ------------------------------------------------------------------------
    // Centers
    // ------------------------------------------------------------------------

    /// Register a center
    async fn create_center(&self, request: CenterCreate) -> AppResult<Center>;

    /// Fetch a center by id
    async fn get_center(&self, center_id: &str) -> AppResult<Center>;

    /// All centers
    async fn list_centers(&self) -> AppResult<Vec<Center>>;

    // ------------------------------------------------------------------------
    // Slots and bookings
    // ------------------------------------------------------------------------

    /// Open slots for a customer, service, and date
    async fn list_available_slots(&self, query: &SlotQuery) -> AppResult<Vec<Slot>>;

    /// Fetch a slot by id
    async fn get_slot(&self, slot_id: &str) -> AppResult<Slot>;

    /// Reserve a slot
    async fn create_booking(&self, request: BookingCreate) -> AppResult<BookingReceipt>;

    /// Fetch a booking by id
    async fn get_booking(&self, booking_id: &str) -> AppResult<BookingDetail>;
}
