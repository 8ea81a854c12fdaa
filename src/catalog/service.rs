// ABOUTME: Reloadable catalog service publishing immutable snapshots through an atomic swap
// ABOUTME: Loads lazily on first query when startup loading failed and serializes reloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::errors::CatalogError;
use super::snapshot::{CatalogSnapshot, SnapshotStats};
use super::source::CatalogSource;
use super::views::{CatalogTree, CategoryList, CategoryServices, ServiceAddons, ServiceStaff};
use arc_swap::ArcSwapOption;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Shared catalog state
///
/// Readers take a cheap `Arc` of the current snapshot and keep a consistent
/// view for the lifetime of one query.
pub struct CatalogService {
    source: CatalogSource,
    http: Client,
    current: ArcSwapOption<CatalogSnapshot>,
    reload_lock: Mutex<()>,
}

impl CatalogService {
    /// Service with no snapshot yet; the first query loads it
    #[must_use]
    pub fn new(source: CatalogSource, http: Client) -> Self {
        Self {
            source,
            http,
            current: ArcSwapOption::empty(),
            reload_lock: Mutex::new(()),
        }
    }

    /// Service publishing an already parsed snapshot
    #[must_use]
    pub fn with_snapshot(source: CatalogSource, http: Client, snapshot: CatalogSnapshot) -> Self {
        let service = Self::new(source, http);
        service.current.store(Some(Arc::new(snapshot)));
        service
    }

    /// Configured snapshot source
    #[must_use]
    pub const fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Whether a snapshot has been published
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    /// Counts and load time of the published snapshot
    #[must_use]
    pub fn summary(&self) -> Option<SnapshotStats> {
        self.current.load_full().map(|snapshot| snapshot.stats())
    }

    /// Fetch a fresh snapshot and publish it
    ///
    /// A failed reload leaves the previous snapshot published.
    ///
    /// # Errors
    ///
    /// Returns the data-source error from the configured source.
    pub async fn reload(&self) -> Result<SnapshotStats, CatalogError> {
        let _guard = self.reload_lock.lock().await;
        self.load_and_publish().await.map(|snapshot| snapshot.stats())
    }

    async fn load_and_publish(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let snapshot = match self.source.fetch(&self.http).await {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                warn!(source = %self.source, error = %e, "Catalog snapshot load failed");
                return Err(e);
            }
        };

        let stats = snapshot.stats();
        self.current.store(Some(Arc::clone(&snapshot)));
        info!(
            source = %self.source,
            categories = stats.categories_count,
            services = stats.services_count,
            "Catalog snapshot published"
        );
        Ok(snapshot)
    }

    /// Current snapshot, loading it first if nothing is published yet
    ///
    /// # Errors
    ///
    /// Returns the data-source error when the lazy load fails.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        if let Some(snapshot) = self.current.load_full() {
            return Ok(snapshot);
        }

        let _guard = self.reload_lock.lock().await;
        // Another caller may have loaded while this one waited
        if let Some(snapshot) = self.current.load_full() {
            return Ok(snapshot);
        }
        self.load_and_publish().await
    }

    /// All categories
    ///
    /// # Errors
    ///
    /// Returns the data-source error when no snapshot can be loaded.
    pub async fn categories(&self) -> Result<CategoryList, CatalogError> {
        Ok(self.snapshot().await?.list_categories())
    }

    /// Services of a category, matched by name ignoring case
    ///
    /// # Errors
    ///
    /// Returns a data-source error or [`CatalogError::CategoryNotFound`].
    pub async fn services_by_category(&self, category: &str) -> Result<CategoryServices, CatalogError> {
        self.snapshot().await?.services_by_category(category)
    }

    /// Add-on groups of a service, matched by name ignoring case
    ///
    /// # Errors
    ///
    /// Returns a data-source error, [`CatalogError::ServiceNotFound`], or a
    /// dangling group reference.
    pub async fn addons_by_service(&self, service: &str) -> Result<ServiceAddons, CatalogError> {
        self.snapshot().await?.addons_by_service(service)
    }

    /// Staff of a service, matched by name ignoring case
    ///
    /// # Errors
    ///
    /// Returns a data-source error, [`CatalogError::ServiceNotFound`], or a
    /// dangling staff reference.
    pub async fn staff_by_service(&self, service: &str) -> Result<ServiceStaff, CatalogError> {
        self.snapshot().await?.staff_by_service(service)
    }

    /// Entire catalog tree
    ///
    /// # Errors
    ///
    /// Returns a data-source error or a dangling staff reference.
    pub async fn all_data(&self) -> Result<CatalogTree, CatalogError> {
        self.snapshot().await?.all_data()
    }
}
