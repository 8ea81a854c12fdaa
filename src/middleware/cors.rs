// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for browser-based booking clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CorsConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

fn configured_origins(allowed_origins: &str) -> impl Iterator<Item = &str> {
    allowed_origins.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn allows_any(allowed_origins: &str) -> bool {
    let trimmed = allowed_origins.trim();
    trimmed.is_empty() || trimmed == "*"
}

/// Configured origins that are not valid header values
#[must_use]
pub fn invalid_origins(allowed_origins: &str) -> Vec<&str> {
    if allows_any(allowed_origins) {
        return Vec::new();
    }
    configured_origins(allowed_origins)
        .filter(|origin| HeaderValue::from_str(origin).is_err())
        .collect()
}

/// Parse the configured origin list; `None` means any origin
///
/// Invalid entries are dropped, so a list with none left allows no origin.
fn parse_origins(allowed_origins: &str) -> Option<Vec<HeaderValue>> {
    if allows_any(allowed_origins) {
        return None;
    }
    let origins = configured_origins(allowed_origins)
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "Dropping invalid CORS origin");
                None
            }
        })
        .collect();
    Some(origins)
}

/// Configure CORS from `CORS_ALLOWED_ORIGINS`
///
/// `*` or an empty value allows any origin; otherwise a comma-separated
/// list is enforced.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://book.example.com,https://admin.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let allow_origin = parse_origins(&config.allowed_origins)
        .map_or_else(AllowOrigin::any, AllowOrigin::list);

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .expose_headers([HeaderName::from_static("x-request-id")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_and_empty_allow_any() {
        assert!(parse_origins("*").is_none());
        assert!(parse_origins("  ").is_none());
    }

    #[test]
    fn test_origin_list_is_trimmed() {
        let origins = parse_origins("https://a.example.com, https://b.example.com,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://b.example.com");
    }

    #[test]
    fn test_invalid_origins_never_widen_to_any() {
        let origins = parse_origins("https://bad\norigin.example.com").unwrap();
        assert!(origins.is_empty());
        assert_eq!(
            invalid_origins("https://ok.example.com, https://bad\norigin.example.com"),
            ["https://bad\norigin.example.com"]
        );
        assert!(invalid_origins("*").is_empty());
        assert!(invalid_origins("https://ok.example.com").is_empty());
    }
}
