// ABOUTME: In-memory booking provider for development, demos, and tests
// ABOUTME: Seeded employees, services, and a center; fabricated availability; non-persistent stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//
// RwLock poisoning errors are converted to ProviderError::ConfigurationError

//! Stub provider
//!
//! Keeps every entity in process memory behind `RwLock`s. Nothing survives a
//! restart. Availability is fabricated: any query yields the same single
//! morning slot.

use super::core::BookingProvider;
use crate::constants::booking::{DEFAULT_CURRENCY, STATUS_CONFIRMED, STATUS_RESERVED};
use crate::constants::provider_selectors;
use crate::errors::{AppError, AppResult, ProviderError};
use crate::models::{
    BookingCreate, BookingDetail, BookingReceipt, Center, CenterCreate, Client, ClientCreate,
    Employee, EmployeeCreate, EntityKind, Money, Service, ServiceCreate, Slot, SlotQuery,
};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;
use uuid::Uuid;

/// Id of the only slot the stub ever offers
const FABRICATED_SLOT_ID: &str = "1";
const FABRICATED_CENTER_ID: &str = "1";
const FABRICATED_EMPLOYEE_ID: &str = "1";
const FABRICATED_SERVICE_ID: &str = "1";

fn slot_start() -> NaiveTime {
    NaiveTime::MIN + chrono::Duration::hours(9)
}

fn slot_end() -> NaiveTime {
    NaiveTime::MIN + chrono::Duration::hours(10)
}

fn poisoned(lock: &str) -> AppError {
    ProviderError::ConfigurationError {
        provider: provider_selectors::STUB.to_owned(),
        details: format!("RwLock poisoned: {lock} lock"),
    }
    .into()
}

fn read<'a, T>(lock: &'a RwLock<T>, name: &str) -> AppResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| poisoned(name))
}

fn write<'a, T>(lock: &'a RwLock<T>, name: &str) -> AppResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| poisoned(name))
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// In-memory provider
///
/// ```rust
/// use medspa_gateway::providers::{BookingProvider, StubProvider};
///
/// let provider = StubProvider::new();
/// assert_eq!(provider.name(), "stub");
/// ```
pub struct StubProvider {
    clients: RwLock<IndexMap<String, Client>>,
    employees: RwLock<IndexMap<String, Employee>>,
    services: RwLock<IndexMap<String, Service>>,
    centers: RwLock<IndexMap<String, Center>>,
    bookings: RwLock<HashMap<String, BookingDetail>>,
}

impl StubProvider {
    /// Provider seeded with demo employees, services, and one center
    #[must_use]
    pub fn new() -> Self {
        let employees = [
            Employee {
                id: "1".to_owned(),
                name: "Sarah Johnson".to_owned(),
                center_id: "1".to_owned(),
                specialties: vec!["Botox".to_owned(), "Facials".to_owned()],
                phone: Some("555-0123".to_owned()),
                is_available: true,
            },
            Employee {
                id: "2".to_owned(),
                name: "Mike Chen".to_owned(),
                center_id: "1".to_owned(),
                specialties: vec!["Massage".to_owned(), "Wellness".to_owned()],
                phone: Some("555-0456".to_owned()),
                is_available: true,
            },
        ];
        let services = [
            Service {
                id: "1".to_owned(),
                service_name: "Botox Treatment".to_owned(),
                price: Money::from_units(300),
                duration: 60,
            },
            Service {
                id: "2".to_owned(),
                service_name: "Facial".to_owned(),
                price: Money::from_units(150),
                duration: 90,
            },
        ];
        let center = Center {
            id: "1".to_owned(),
            center_name: "Downtown MedSpa".to_owned(),
            zip_code: "10001".to_owned(),
            time_zone: "America/New_York".to_owned(),
        };

        Self {
            clients: RwLock::new(IndexMap::new()),
            employees: RwLock::new(employees.into_iter().map(|e| (e.id.clone(), e)).collect()),
            services: RwLock::new(services.into_iter().map(|s| (s.id.clone(), s)).collect()),
            centers: RwLock::new(IndexMap::from([(center.id.clone(), center)])),
            bookings: RwLock::new(HashMap::new()),
        }
    }

    fn fabricated_slot(service_id: &str, date: NaiveDate, employee_id: Option<&str>) -> Slot {
        Slot {
            id: FABRICATED_SLOT_ID.to_owned(),
            center_id: FABRICATED_CENTER_ID.to_owned(),
            service_id: service_id.to_owned(),
            date,
            start_time: slot_start(),
            end_time: slot_end(),
            employee_id: employee_id.unwrap_or(FABRICATED_EMPLOYEE_ID).to_owned(),
            price: Money::from_units(300),
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }
}

impl Default for StubProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingProvider for StubProvider {
    fn name(&self) -> &'static str {
        provider_selectors::STUB
    }

    async fn create_client(&self, request: ClientCreate) -> AppResult<Client> {
        let mut client = Client::from_request(new_id(), request);
        client.created_at = Some(Utc::now());

        write(&self.clients, "clients")?.insert(client.id.clone(), client.clone());
        info!(client_id = %client.id, provider = self.name(), "Client created");
        Ok(client)
    }

    async fn get_client(&self, client_id: &str) -> AppResult<Client> {
        read(&self.clients, "clients")?
            .get(client_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EntityKind::Client))
    }

    async fn list_clients(&self) -> AppResult<Vec<Client>> {
        Ok(read(&self.clients, "clients")?.values().cloned().collect())
    }

    async fn delete_client(&self, client_id: &str) -> AppResult<()> {
        if write(&self.clients, "clients")?.shift_remove(client_id).is_none() {
            return Err(AppError::not_found(EntityKind::Client));
        }
        info!(client_id, provider = self.name(), "Client deleted");
        Ok(())
    }

    async fn create_employee(&self, request: EmployeeCreate) -> AppResult<Employee> {
        let employee = Employee {
            id: new_id(),
            name: request.name,
            center_id: request.center_id,
            specialties: request.specialties,
            phone: request.phone,
            is_available: true,
        };

        write(&self.employees, "employees")?.insert(employee.id.clone(), employee.clone());
        info!(employee_id = %employee.id, provider = self.name(), "Employee created");
        Ok(employee)
    }

    async fn get_employee(&self, employee_id: &str) -> AppResult<Employee> {
        read(&self.employees, "employees")?
            .get(employee_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EntityKind::Employee))
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(read(&self.employees, "employees")?.values().cloned().collect())
    }

    async fn create_service(&self, request: ServiceCreate) -> AppResult<Service> {
        let service = Service {
            id: new_id(),
            service_name: request.service_name,
            price: request.price,
            duration: request.duration,
        };

        write(&self.services, "services")?.insert(service.id.clone(), service.clone());
        info!(service_id = %service.id, provider = self.name(), "Service created");
        Ok(service)
    }

    async fn get_service(&self, service_id: &str) -> AppResult<Service> {
        read(&self.services, "services")?
            .get(service_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EntityKind::Service))
    }

    async fn list_services(&self) -> AppResult<Vec<Service>> {
        Ok(read(&self.services, "services")?.values().cloned().collect())
    }

    async fn create_center(&self, request: CenterCreate) -> AppResult<Center> {
        let center = Center::from_request(new_id(), request);

        write(&self.centers, "centers")?.insert(center.id.clone(), center.clone());
        info!(center_id = %center.id, provider = self.name(), "Center created");
        Ok(center)
    }

    async fn get_center(&self, center_id: &str) -> AppResult<Center> {
        read(&self.centers, "centers")?
            .get(center_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EntityKind::Center))
    }

    async fn list_centers(&self) -> AppResult<Vec<Center>> {
        Ok(read(&self.centers, "centers")?.values().cloned().collect())
    }

    async fn list_available_slots(&self, query: &SlotQuery) -> AppResult<Vec<Slot>> {
        Ok(vec![Self::fabricated_slot(
            &query.service,
            query.date,
            query.employee.as_deref(),
        )])
    }

    async fn get_slot(&self, slot_id: &str) -> AppResult<Slot> {
        if slot_id != FABRICATED_SLOT_ID {
            return Err(AppError::not_found(EntityKind::Slot));
        }
        Ok(Self::fabricated_slot(
            FABRICATED_SERVICE_ID,
            Utc::now().date_naive(),
            None,
        ))
    }

    async fn create_booking(&self, request: BookingCreate) -> AppResult<BookingReceipt> {
        let receipt = BookingReceipt {
            id: new_id(),
            slot_id: request.slot_id,
            status: STATUS_RESERVED.to_owned(),
            expires_at: Utc::now(),
        };
        let detail = BookingDetail {
            id: receipt.id.clone(),
            status: STATUS_CONFIRMED.to_owned(),
            service_id: request.service_id,
            employee_id: request.employee_id,
            start_time: slot_start(),
            end_time: slot_end(),
        };

        write(&self.bookings, "bookings")?.insert(detail.id.clone(), detail);
        info!(booking_id = %receipt.id, slot_id = %receipt.slot_id, provider = self.name(), "Booking reserved");
        Ok(receipt)
    }

    async fn get_booking(&self, booking_id: &str) -> AppResult<BookingDetail> {
        read(&self.bookings, "bookings")?
            .get(booking_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EntityKind::Booking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[tokio::test]
    async fn test_seeded_entities() {
        let provider = StubProvider::new();

        let employees = provider.list_employees().await.unwrap();
        let names: Vec<_> = employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Sarah Johnson", "Mike Chen"]);

        let botox = provider.get_service("1").await.unwrap();
        assert_eq!(botox.service_name, "Botox Treatment");
        assert_eq!(botox.price.to_string(), "300.00");
        assert_eq!(provider.get_service("2").await.unwrap().duration, 90);

        assert_eq!(provider.list_centers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_entities_use_fixed_messages() {
        let provider = StubProvider::new();

        let error = provider.get_employee("missing").await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Employee not found");

        let error = provider.delete_client("missing").await.unwrap_err();
        assert_eq!(error.message, "Client not found");
    }

    #[tokio::test]
    async fn test_fabricated_slot_defaults_employee() {
        let provider = StubProvider::new();
        let query = SlotQuery {
            customer: "c-1".to_owned(),
            service: "2".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            employee: None,
        };

        let slots = provider.list_available_slots(&query).await.unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].employee_id, "1");
        assert_eq!(slots[0].service_id, "2");
        assert_eq!(slots[0].start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slots[0].currency, "USD");

        let with_employee = SlotQuery {
            employee: Some("2".to_owned()),
            ..query
        };
        let slots = provider.list_available_slots(&with_employee).await.unwrap();
        assert_eq!(slots[0].employee_id, "2");

        assert!(provider.get_slot("1").await.is_ok());
        assert!(provider.get_slot("2").await.is_err());
    }

    #[tokio::test]
    async fn test_booking_is_recorded() {
        let provider = StubProvider::new();
        let receipt = provider
            .create_booking(BookingCreate {
                slot_id: "1".to_owned(),
                customer_id: "c-1".to_owned(),
                service_id: "2".to_owned(),
                employee_id: "2".to_owned(),
                center_id: "1".to_owned(),
            })
            .await
            .unwrap();
        assert_eq!(receipt.status, "reserved");

        let detail = provider.get_booking(&receipt.id).await.unwrap();
        assert_eq!(detail.status, "confirmed");
        assert_eq!(detail.service_id, "2");
        assert!(provider.get_booking("unknown").await.is_err());
    }
}
