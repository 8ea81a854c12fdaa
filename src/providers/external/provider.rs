// ABOUTME: Booking provider that translates simplified models to the external platform schema
// ABOUTME: Sends mapped requests through an ExternalTransport and reduces replies to simple models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::schema::{
    AppointmentCreateRequest, AppointmentRecord, AppointmentReservation, CenterCreateRequest,
    CenterList, CenterRecord, Guest, GuestCreateRequest, GuestList, ServiceCreateRequest,
    ServiceList, ServiceRecord, SlotList, SlotRecord, StaffCreateRequest, StaffList, StaffRecord,
};
use super::transport::{CannedTransport, ExternalRequest, ExternalTransport};
use crate::constants::provider_selectors::EXTERNAL;
use crate::errors::{AppError, AppResult, ProviderError};
use crate::models::{
    BookingCreate, BookingDetail, BookingReceipt, Center, CenterCreate, Client, ClientCreate,
    Employee, EmployeeCreate, EntityKind, Service, ServiceCreate, Slot, SlotQuery,
};
use crate::providers::core::BookingProvider;
use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

fn decode<T: DeserializeOwned>(endpoint: &str, payload: Value) -> Result<T, ProviderError> {
    serde_json::from_value(payload).map_err(|e| ProviderError::malformed(EXTERNAL, endpoint, e.to_string()))
}

/// Provider backed by the external scheduling platform
pub struct MappedExternalProvider {
    transport: Box<dyn ExternalTransport>,
}

impl MappedExternalProvider {
    /// Provider using the given transport
    #[must_use]
    pub fn new(transport: Box<dyn ExternalTransport>) -> Self {
        Self { transport }
    }

    /// Provider answering from canned platform payloads
    #[must_use]
    pub fn canned() -> Self {
        Self::new(Box::new(CannedTransport))
    }

    /// Call that must find a resource; a miss is `NotFound` for `kind`
    async fn fetch<T: DeserializeOwned>(&self, request: ExternalRequest, kind: EntityKind) -> AppResult<T> {
        let endpoint = request.path();
        debug!(transport = self.transport.name(), endpoint = %endpoint, "Calling external platform");
        let payload = self
            .transport
            .send(request)
            .await?
            .ok_or_else(|| AppError::not_found(kind))?;
        Ok(decode(&endpoint, payload)?)
    }

    /// Listing call; a missing collection is empty
    async fn fetch_list<T: DeserializeOwned + Default>(&self, request: ExternalRequest) -> AppResult<T> {
        let endpoint = request.path();
        match self.transport.send(request).await? {
            Some(payload) => Ok(decode(&endpoint, payload)?),
            None => Ok(T::default()),
        }
    }
}

impl Default for MappedExternalProvider {
    fn default() -> Self {
        Self::canned()
    }
}

#[async_trait]
impl BookingProvider for MappedExternalProvider {
    fn name(&self) -> &'static str {
        EXTERNAL
    }

    async fn create_client(&self, request: ClientCreate) -> AppResult<Client> {
        let guest = GuestCreateRequest::from(&request);
        let created: Guest = self
            .fetch(ExternalRequest::post(&["guests"], &guest)?, EntityKind::Client)
            .await?;
        info!(client_id = %created.guest_id, provider = self.name(), "Client created");
        Ok(created.into())
    }

    async fn get_client(&self, client_id: &str) -> AppResult<Client> {
        let guest: Guest = self
            .fetch(ExternalRequest::get(&["guests", client_id]), EntityKind::Client)
            .await?;
        Ok(guest.into())
    }

    async fn list_clients(&self) -> AppResult<Vec<Client>> {
        let list: GuestList = self.fetch_list(ExternalRequest::get(&["guests"])).await?;
        Ok(list.guests.into_iter().map(Client::from).collect())
    }

    async fn delete_client(&self, client_id: &str) -> AppResult<()> {
        let endpoint = ExternalRequest::delete(&["guests", client_id]);
        if self.transport.send(endpoint).await?.is_none() {
            return Err(AppError::not_found(EntityKind::Client));
        }
        info!(client_id, provider = self.name(), "Client deleted");
        Ok(())
    }

    async fn create_employee(&self, request: EmployeeCreate) -> AppResult<Employee> {
        let staff = StaffCreateRequest::from_employee(&request, Utc::now().date_naive());
        let created: StaffRecord = self
            .fetch(ExternalRequest::post(&["employees"], &staff)?, EntityKind::Employee)
            .await?;
        info!(
            employee_id = %created.staff_id,
            employee_code = %staff.employee_code,
            provider = self.name(),
            "Employee created"
        );
        Ok(created.into())
    }

    async fn get_employee(&self, employee_id: &str) -> AppResult<Employee> {
        let staff: StaffRecord = self
            .fetch(ExternalRequest::get(&["employees", employee_id]), EntityKind::Employee)
            .await?;
        Ok(staff.into())
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        let list: StaffList = self.fetch_list(ExternalRequest::get(&["employees"])).await?;
        Ok(list.employees.into_iter().map(Employee::from).collect())
    }

    async fn create_service(&self, request: ServiceCreate) -> AppResult<Service> {
        let body = ServiceCreateRequest::from(&request);
        let created: ServiceRecord = self
            .fetch(ExternalRequest::post(&["services"], &body)?, EntityKind::Service)
            .await?;
        info!(service_id = %created.service_id, provider = self.name(), "Service created");
        Ok(created.into())
    }

    async fn get_service(&self, service_id: &str) -> AppResult<Service> {
        let record: ServiceRecord = self
            .fetch(ExternalRequest::get(&["services", service_id]), EntityKind::Service)
            .await?;
        Ok(record.into())
    }

    async fn list_services(&self) -> AppResult<Vec<Service>> {
        let list: ServiceList = self.fetch_list(ExternalRequest::get(&["services"])).await?;
        Ok(list.services.into_iter().map(Service::from).collect())
    }

    async fn create_center(&self, request: CenterCreate) -> AppResult<Center> {
        let body = CenterCreateRequest::from(&request);
        let created: CenterRecord = self
            .fetch(ExternalRequest::post(&["centers"], &body)?, EntityKind::Center)
            .await?;
        info!(center_id = %created.center_id, provider = self.name(), "Center created");
        Ok(created.into())
    }

    async fn get_center(&self, center_id: &str) -> AppResult<Center> {
        let record: CenterRecord = self
            .fetch(ExternalRequest::get(&["centers", center_id]), EntityKind::Center)
            .await?;
        Ok(record.into())
    }

    async fn list_centers(&self) -> AppResult<Vec<Center>> {
        let list: CenterList = self.fetch_list(ExternalRequest::get(&["centers"])).await?;
        Ok(list.centers.into_iter().map(Center::from).collect())
    }

    async fn list_available_slots(&self, query: &SlotQuery) -> AppResult<Vec<Slot>> {
        let mut request = ExternalRequest::get(&["slots"])
            .with_query("guest_id", query.customer.as_str())
            .with_query("service_id", query.service.as_str())
            .with_query("date", query.date.to_string());
        if let Some(employee) = &query.employee {
            request = request.with_query("therapist_id", employee.as_str());
        }
        let list: SlotList = self.fetch_list(request).await?;
        Ok(list.slots.into_iter().map(Slot::from).collect())
    }

    async fn get_slot(&self, slot_id: &str) -> AppResult<Slot> {
        let record: SlotRecord = self
            .fetch(ExternalRequest::get(&["slots", slot_id]), EntityKind::Slot)
            .await?;
        Ok(record.into())
    }

    async fn create_booking(&self, request: BookingCreate) -> AppResult<BookingReceipt> {
        let body = AppointmentCreateRequest {
            slot_id: request.slot_id,
            guest_id: request.customer_id,
            service_id: request.service_id,
            therapist_id: request.employee_id,
            center_id: request.center_id,
        };
        let reservation: AppointmentReservation = self
            .fetch(ExternalRequest::post(&["bookings"], &body)?, EntityKind::Booking)
            .await?;
        info!(
            booking_id = %reservation.booking_id,
            slot_id = %reservation.slot_id,
            provider = self.name(),
            "Booking reserved"
        );
        Ok(reservation.into())
    }

    async fn get_booking(&self, booking_id: &str) -> AppResult<BookingDetail> {
        let record: AppointmentRecord = self
            .fetch(ExternalRequest::get(&["bookings", booking_id]), EntityKind::Booking)
            .await?;
        Ok(record.into())
    }
}
