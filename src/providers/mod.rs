// ABOUTME: Booking provider integrations behind one capability trait
// ABOUTME: In-memory stub, mapped external platform, and the startup selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Provider trait
pub mod core;
/// Mapped external platform provider
pub mod external;
/// Selector resolution
pub mod registry;
/// In-memory provider
pub mod stub_provider;

pub use self::core::BookingProvider;
pub use external::MappedExternalProvider;
pub use registry::{create_provider, ProviderKind};
pub use stub_provider::StubProvider;
