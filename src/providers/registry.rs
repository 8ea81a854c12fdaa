// ABOUTME: Resolves the configured provider selector into a concrete booking provider
// ABOUTME: Unknown selectors are configuration errors that stop startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::core::BookingProvider;
use super::external::{HttpTransport, MappedExternalProvider};
use super::stub_provider::StubProvider;
use crate::config::ExternalApiConfig;
use crate::constants::provider_selectors;
use crate::errors::ProviderError;
use crate::utils::http_client;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Provider variants selectable at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// In-memory stub (`test` or `stub`)
    Stub,
    /// Mapped external platform (`external`)
    MappedExternal,
}

impl FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector.trim().to_lowercase().as_str() {
            provider_selectors::TEST | provider_selectors::STUB => Ok(Self::Stub),
            provider_selectors::EXTERNAL => Ok(Self::MappedExternal),
            other => Err(ProviderError::ConfigurationError {
                provider: other.to_owned(),
                details: format!(
                    "unknown provider selector '{other}', expected one of: {}, {}, {}",
                    provider_selectors::TEST,
                    provider_selectors::STUB,
                    provider_selectors::EXTERNAL
                ),
            }),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stub => provider_selectors::STUB,
            Self::MappedExternal => provider_selectors::EXTERNAL,
        })
    }
}

/// Build the provider named by `selector`
///
/// # Errors
///
/// Returns [`ProviderError::ConfigurationError`] for an unknown selector or
/// an unusable external base URL.
pub fn create_provider(
    selector: &str,
    external_api: &ExternalApiConfig,
) -> Result<Arc<dyn BookingProvider>, ProviderError> {
    let provider: Arc<dyn BookingProvider> = match selector.parse::<ProviderKind>()? {
        ProviderKind::Stub => Arc::new(StubProvider::new()),
        ProviderKind::MappedExternal => match &external_api.base_url {
            Some(base_url) => {
                let timeout = Duration::from_secs(external_api.timeout_secs);
                let transport = HttpTransport::new(
                    http_client::create_client_with_timeout(timeout),
                    base_url,
                    external_api.api_key.clone(),
                    timeout,
                )?;
                Arc::new(MappedExternalProvider::new(Box::new(transport)))
            }
            None => Arc::new(MappedExternalProvider::canned()),
        },
    };

    info!(selector, provider = provider.name(), "Booking provider selected");
    Ok(provider)
}
