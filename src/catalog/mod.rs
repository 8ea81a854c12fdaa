// ABOUTME: Service catalog loaded from a denormalized snapshot and served from memory
// ABOUTME: Joins categories, services, staff, and add-on groups into query-shaped response trees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Service Catalog
//!
//! The catalog answers read-only questions about what a spa sells: which
//! categories exist, which services sit in a category, which add-ons and
//! staff apply to a service, and the whole tree at once.
//!
//! ## Data Flow
//!
//! 1. A [`CatalogSource`] produces raw JSON (bundled file or remote fetch)
//! 2. [`CatalogSnapshot::from_json`] validates it and builds indexed tables
//! 3. [`CatalogService`] publishes the snapshot through an atomic pointer swap
//! 4. Queries run against whichever snapshot is current and build fresh
//!    response values (see [`views`])
//!
//! ## Reload Semantics
//!
//! A reload fetches and parses a complete new snapshot before publishing it.
//! Readers holding the previous `Arc` keep a consistent view until they drop
//! it; new readers see the replacement in full. A failed reload leaves the
//! previous snapshot in place.

/// Catalog error types
pub mod errors;
/// Query logic over a loaded snapshot
pub mod queries;
/// Reloadable catalog service shared by request handlers
pub mod service;
/// Snapshot wire format and indexed in-memory tables
pub mod snapshot;
/// Where snapshots come from (file or remote endpoint)
pub mod source;
/// Response shapes returned by catalog queries
pub mod views;

pub use errors::CatalogError;
pub use service::CatalogService;
pub use snapshot::{AddonGroup, AddonOption, CatalogSnapshot, Category, ServiceItem, SnapshotStats, StaffMember};
pub use source::{CatalogSource, RemoteSource};
