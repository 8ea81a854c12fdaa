// ABOUTME: Structured error types for booking provider operations and outbound transports
// ABOUTME: Distinguishes timeouts, non-2xx answers, and malformed payloads from upstream systems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AppError;
use thiserror::Error;

/// Failure talking to the scheduling platform behind a provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Outbound call exceeded its deadline
    #[error("{provider} timed out after {timeout_secs}s calling {endpoint}")]
    Timeout {
        /// Provider name
        provider: String,
        /// Endpoint that was called
        endpoint: String,
        /// Configured timeout
        timeout_secs: u64,
    },

    /// Upstream answered with a non-success status
    #[error("{provider} returned HTTP {status} for {endpoint}: {body}")]
    HttpStatus {
        /// Provider name
        provider: String,
        /// Endpoint that was called
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },

    /// Upstream payload could not be decoded into the expected schema
    #[error("{provider} returned a malformed payload for {endpoint}: {details}")]
    MalformedPayload {
        /// Provider name
        provider: String,
        /// Endpoint that was called
        endpoint: String,
        /// Decoder message
        details: String,
    },

    /// Connection-level failure (DNS, TLS, reset)
    #[error("{provider} request to {endpoint} failed: {details}")]
    Network {
        /// Provider name
        provider: String,
        /// Endpoint that was called
        endpoint: String,
        /// Transport message
        details: String,
    },

    /// Provider is misconfigured or its internal state is unusable
    #[error("{provider} configuration error: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// What is wrong
        details: String,
    },
}

impl ProviderError {
    /// Longest upstream body kept in `HttpStatus` errors
    pub const MAX_BODY_CHARS: usize = 512;

    /// Build an `HttpStatus` error, truncating the body
    #[must_use]
    pub fn http_status(provider: &str, endpoint: &str, status: u16, body: &str) -> Self {
        Self::HttpStatus {
            provider: provider.to_owned(),
            endpoint: endpoint.to_owned(),
            status,
            body: body.chars().take(Self::MAX_BODY_CHARS).collect(),
        }
    }

    /// Build a `MalformedPayload` error
    #[must_use]
    pub fn malformed(provider: &str, endpoint: &str, details: impl Into<String>) -> Self {
        Self::MalformedPayload {
            provider: provider.to_owned(),
            endpoint: endpoint.to_owned(),
            details: details.into(),
        }
    }

    /// Classify a `reqwest` failure as timeout or network error
    #[cfg(feature = "provider-errors")]
    #[must_use]
    pub fn from_reqwest(
        provider: &str,
        endpoint: &str,
        timeout_secs: u64,
        error: &reqwest::Error,
    ) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                provider: provider.to_owned(),
                endpoint: endpoint.to_owned(),
                timeout_secs,
            }
        } else if error.is_decode() {
            Self::malformed(provider, endpoint, error.to_string())
        } else {
            Self::Network {
                provider: provider.to_owned(),
                endpoint: endpoint.to_owned(),
                details: error.to_string(),
            }
        }
    }

    /// Name of the provider that raised the error
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::Timeout { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::MalformedPayload { provider, .. }
            | Self::Network { provider, .. }
            | Self::ConfigurationError { provider, .. } => provider,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let provider = error.provider().to_owned();
        let message = error.to_string();
        match error {
            ProviderError::Timeout { .. } | ProviderError::Network { .. } => {
                Self::external_unavailable(provider, message)
            }
            ProviderError::HttpStatus { .. } | ProviderError::MalformedPayload { .. } => {
                Self::external_service(provider, message)
            }
            ProviderError::ConfigurationError { .. } => Self::config(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_timeout_maps_to_unavailable() {
        let error = ProviderError::Timeout {
            provider: "external".to_owned(),
            endpoint: "/guests".to_owned(),
            timeout_secs: 10,
        };
        let app: AppError = error.into();
        assert_eq!(app.code, ErrorCode::ExternalServiceUnavailable);
        assert_eq!(app.http_status(), 503);
    }

    #[test]
    fn test_status_and_payload_map_to_bad_gateway() {
        let status: AppError = ProviderError::http_status("external", "/guests", 500, "boom").into();
        let malformed: AppError = ProviderError::malformed("external", "/guests", "missing field").into();

        assert_eq!(status.http_status(), 502);
        assert_eq!(malformed.http_status(), 502);
        assert!(malformed.message.contains("missing field"));
    }

    #[test]
    fn test_http_status_truncates_body() {
        let body = "x".repeat(ProviderError::MAX_BODY_CHARS * 2);
        let ProviderError::HttpStatus { body, .. } =
            ProviderError::http_status("external", "/staff", 502, &body)
        else {
            panic!("expected HttpStatus");
        };
        assert_eq!(body.len(), ProviderError::MAX_BODY_CHARS);
    }
}
