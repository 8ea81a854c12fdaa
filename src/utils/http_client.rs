// ABOUTME: Shared HTTP client utilities with connection pooling and timeout configuration
// ABOUTME: Every outbound client identifies itself with the gateway user agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::service_names::MEDSPA_GATEWAY;
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Connect timeout applied to every client
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// `medspa-gateway/<version>`
#[must_use]
pub fn user_agent() -> String {
    format!("{MEDSPA_GATEWAY}/{}", env!("CARGO_PKG_VERSION"))
}

fn builder() -> ClientBuilder {
    ClientBuilder::new()
        .user_agent(user_agent())
        .connect_timeout(CONNECT_TIMEOUT)
}

/// Get or create the shared HTTP client
///
/// Requests set their own deadlines; the client only bounds connecting.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| builder().build().unwrap_or_else(|_| Client::new()))
}

/// Create a new HTTP client with a request timeout
#[must_use]
pub fn create_client_with_timeout(timeout: Duration) -> Client {
    builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_carries_version() {
        let agent = user_agent();
        assert!(agent.starts_with("medspa-gateway/"));
        assert!(agent.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
