// ABOUTME: Mapped provider for an external scheduling platform with a richer schema
// ABOUTME: Groups the platform schema, the transport seam, and the mapping provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # External Platform Provider
//!
//! Callers speak the simplified booking models. This provider expands each
//! request into the platform schema (split names, generated employee codes,
//! defaulted memberships and shifts), sends it through an
//! [`ExternalTransport`], and reduces the reply back to the simple model.
//!
//! Two transports exist:
//! - [`CannedTransport`] answers in-process with fixed payloads
//! - [`HttpTransport`] calls the platform's REST API and maps timeouts,
//!   error statuses, and undecodable bodies onto `ProviderError`

/// Mapping provider
pub mod provider;
/// Platform request and response shapes
pub mod schema;
/// Transport seam and implementations
pub mod transport;

pub use provider::MappedExternalProvider;
pub use transport::{CannedTransport, ExternalRequest, ExternalTransport, HttpTransport, Method};
