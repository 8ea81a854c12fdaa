// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for service identity, ports, provider selectors, and catalog defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identity used in logs and outbound headers
pub mod service_names {
    /// Canonical service name
    pub const MEDSPA_GATEWAY: &str = "medspa-gateway";
    /// Human-readable API title
    pub const API_TITLE: &str = "MedSpa Booking API";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Provider selector values accepted by the `PROVIDER` setting
pub mod provider_selectors {
    /// In-memory stub provider
    pub const TEST: &str = "test";
    /// Alias for the stub provider
    pub const STUB: &str = "stub";
    /// Provider that maps onto the external scheduling schema
    pub const EXTERNAL: &str = "external";
}

/// Catalog source defaults
pub mod catalog {
    /// Default snapshot file
    pub const DEFAULT_SNAPSHOT_FILE: &str = "services.json";
    /// Default timeout for the remote snapshot fetch
    pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
}

/// External scheduling platform defaults
pub mod external {
    /// Default timeout for outbound provider calls
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "x-api-key";
    /// Center assigned to guests when the caller does not name one
    pub const DEFAULT_CENTER_ID: &str = "default_center";
    /// Domain used for generated staff email addresses
    pub const STAFF_EMAIL_DOMAIN: &str = "spa.com";
    /// Default commission for newly created staff
    pub const DEFAULT_COMMISSION_PERCENTAGE: f64 = 30.0;
    /// Default weekday shift
    pub const DEFAULT_SHIFT: &str = "09:00-17:00";
}

/// Booking defaults
pub mod booking {
    /// Currency used when a provider does not report one
    pub const DEFAULT_CURRENCY: &str = "USD";
    /// Status of a freshly created booking
    pub const STATUS_RESERVED: &str = "reserved";
    /// Status of a booking read back after creation
    pub const STATUS_CONFIRMED: &str = "confirmed";
}
