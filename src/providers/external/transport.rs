// ABOUTME: Transport seam between the mapped provider and the external scheduling platform
// ABOUTME: Canned in-process responses by default, or real HTTP calls with typed failure mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::schema::{GuestCreateRequest, StaffCreateRequest};
use crate::constants::external::API_KEY_HEADER;
use crate::constants::provider_selectors::EXTERNAL;
use crate::errors::ProviderError;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// HTTP verb of an external call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read
    Get,
    /// Create
    Post,
    /// Remove
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        })
    }
}

/// One call against the external platform
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalRequest {
    /// HTTP verb
    pub method: Method,
    /// Path segments below the base URL
    pub segments: Vec<String>,
    /// Query parameters
    pub query: Vec<(&'static str, String)>,
    /// JSON body
    pub body: Option<Value>,
}

impl ExternalRequest {
    fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| (*s).to_owned()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// `GET` request
    #[must_use]
    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::Get, segments)
    }

    /// `DELETE` request
    #[must_use]
    pub fn delete(segments: &[&str]) -> Self {
        Self::new(Method::Delete, segments)
    }

    /// `POST` request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MalformedPayload`] if the body cannot be serialized.
    pub fn post(segments: &[&str], body: &impl Serialize) -> Result<Self, ProviderError> {
        let mut request = Self::new(Method::Post, segments);
        let path = request.path();
        request.body = Some(
            serde_json::to_value(body)
                .map_err(|e| ProviderError::malformed(EXTERNAL, &path, e.to_string()))?,
        );
        Ok(request)
    }

    /// Add a query parameter
    #[must_use]
    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Path for logs and error messages
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    fn decode_body<T: DeserializeOwned>(&self) -> Result<T, ProviderError> {
        serde_json::from_value(self.body.clone().unwrap_or(Value::Null))
            .map_err(|e| ProviderError::malformed(EXTERNAL, &self.path(), e.to_string()))
    }
}

/// Carries requests to the external platform
#[async_trait]
pub trait ExternalTransport: Send + Sync {
    /// Transport name for logs
    fn name(&self) -> &'static str;

    /// Perform a call; `Ok(None)` means the platform has no such resource
    async fn send(&self, request: ExternalRequest) -> Result<Option<Value>, ProviderError>;
}

// ============================================================================
// Canned Transport
// ============================================================================

/// In-process transport answering with fixed platform payloads
///
/// Makes no network calls. Creation requests are echoed back with
/// platform-style ids so the mapping round trip can be observed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedTransport;

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

#[async_trait]
impl ExternalTransport for CannedTransport {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn send(&self, request: ExternalRequest) -> Result<Option<Value>, ProviderError> {
        let segments: Vec<&str> = request.segments.iter().map(String::as_str).collect();
        let payload = match (request.method, segments.as_slice()) {
            (Method::Post, ["guests"]) => {
                let guest: GuestCreateRequest = request.decode_body()?;
                json!({
                    "guest_id": "ZEN123456",
                    "full_name": guest.full_name(),
                    "phone": non_empty(&guest.mobile_number),
                    "email": non_empty(&guest.email),
                    "membership_level": "Silver",
                    "loyalty_points": 0
                })
            }
            (Method::Get, ["guests", guest_id]) => json!({
                "guest_id": guest_id,
                "full_name": "John Doe",
                "phone": "+1234567890",
                "email": "john@example.com"
            }),
            (Method::Get, ["guests"]) => json!({ "guests": [] }),
            (Method::Delete, ["guests", _]) => Value::Null,
            (Method::Post, ["employees"]) => {
                let staff: StaffCreateRequest = request.decode_body()?;
                json!({
                    "staff_id": format!("ST{}", staff.employee_code),
                    "display_name": staff.display_name(),
                    "email": staff.email,
                    "phone": staff.mobile_number,
                    "specializations": staff.service_categories,
                    "center_id": staff.center_id,
                    "is_active": true
                })
            }
            (Method::Get, ["employees", staff_id]) => json!({
                "staff_id": staff_id,
                "display_name": "Sarah Johnson",
                "email": "sarah@spa.com",
                "phone": "555-0123",
                "specializations": ["Facial", "Chemical Peels"],
                "center_id": "center_001",
                "is_active": true
            }),
            (Method::Get, ["employees"]) => json!({ "employees": [] }),
            (Method::Post, ["services"]) => {
                let mut service = request.body.clone().unwrap_or(Value::Null);
                service["service_id"] = json!("SRV123456");
                service
            }
            (Method::Get, ["services", service_id]) => json!({
                "service_id": service_id,
                "name": "Facial",
                "price": "150.00",
                "duration_minutes": 60
            }),
            (Method::Get, ["services"]) => json!({ "services": [] }),
            (Method::Post, ["centers"]) => {
                let mut center = request.body.clone().unwrap_or(Value::Null);
                center["center_id"] = json!("CTR123456");
                center
            }
            (Method::Get, ["centers"]) => json!({ "centers": [] }),
            (Method::Get, ["slots"]) => json!({ "slots": [] }),
            (Method::Get, ["centers" | "slots", _]) => return Ok(None),
            (Method::Post, ["bookings"]) => json!({
                "booking_id": "booking-123",
                "slot_id": request.body.as_ref().and_then(|b| b.get("slot_id")).cloned(),
                "status": "reserved",
                "expires_at": Utc::now()
            }),
            (Method::Get, ["bookings", booking_id]) => json!({
                "booking_id": booking_id,
                "status": "confirmed",
                "service_id": "1",
                "therapist_id": "1",
                "start_time": "09:00:00",
                "end_time": "10:00:00"
            }),
            _ => {
                return Err(ProviderError::ConfigurationError {
                    provider: EXTERNAL.to_owned(),
                    details: format!(
                        "no canned response for {} {}",
                        request.method,
                        request.path()
                    ),
                })
            }
        };
        Ok(Some(payload))
    }
}

// ============================================================================
// HTTP Transport
// ============================================================================

/// Transport calling the platform's REST API
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpTransport {
    /// Transport rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ConfigurationError`] when the base URL does not
    /// parse or cannot carry path segments.
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let invalid = |details: String| ProviderError::ConfigurationError {
            provider: EXTERNAL.to_owned(),
            details,
        };
        let base_url =
            Url::parse(base_url).map_err(|e| invalid(format!("invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid(format!("base URL '{base_url}' cannot carry a path")));
        }
        Ok(Self {
            client,
            base_url,
            api_key,
            timeout,
        })
    }

    fn url_for(&self, request: &ExternalRequest) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ProviderError::ConfigurationError {
                provider: EXTERNAL.to_owned(),
                details: format!("base URL '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }
}

#[async_trait]
impl ExternalTransport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn send(&self, request: ExternalRequest) -> Result<Option<Value>, ProviderError> {
        let endpoint = request.path();
        let url = self.url_for(&request)?;
        let timeout_secs = self.timeout.as_secs();
        debug!(method = %request.method, %endpoint, "Calling external platform");

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        }
        .timeout(self.timeout)
        .header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(EXTERNAL, &endpoint, timeout_secs, &e))?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(EXTERNAL, &endpoint, timeout_secs, &e))?;
        if !status.is_success() {
            return Err(ProviderError::http_status(
                EXTERNAL,
                &endpoint,
                status.as_u16(),
                &text,
            ));
        }
        if text.trim().is_empty() {
            return Ok(Some(Value::Null));
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ProviderError::malformed(EXTERNAL, &endpoint, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_rendering() {
        let request = ExternalRequest::get(&["guests", "ZEN1"]).with_query("date", "2025-03-14");
        assert_eq!(request.path(), "/guests/ZEN1");
        assert_eq!(request.query, [("date", "2025-03-14".to_owned())]);
    }

    #[test]
    fn test_http_transport_joins_segments_below_base_path() {
        let transport = HttpTransport::new(
            reqwest::Client::new(),
            "https://platform.example.com/api/v1/",
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        let url = transport
            .url_for(&ExternalRequest::get(&["guests", "a b"]))
            .unwrap();
        assert_eq!(url.as_str(), "https://platform.example.com/api/v1/guests/a%20b");
    }

    #[test]
    fn test_http_transport_rejects_bad_base_url() {
        let result = HttpTransport::new(reqwest::Client::new(), "not a url", None, Duration::from_secs(5));
        assert!(matches!(result, Err(ProviderError::ConfigurationError { .. })));
    }

    #[tokio::test]
    async fn test_canned_transport_has_no_slot_records() {
        let payload = CannedTransport.send(ExternalRequest::get(&["slots", "1"])).await.unwrap();
        assert!(payload.is_none());
    }
}
