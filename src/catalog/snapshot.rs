// ABOUTME: Catalog snapshot wire format and the validated, indexed tables built from it
// ABOUTME: Parses strict JSON, converts string map keys to integer ids, and preserves source ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::errors::CatalogError;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::{HashMap, HashSet};

// ============================================================================
// Wire Format
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSnapshot {
    services_info: WireServicesInfo,
    staff_info: WireStaffInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireServicesInfo {
    service_categories: Vec<Category>,
    services_by_id: IndexMap<String, WireService>,
    #[serde(default)]
    service_option_group_ids_by_service_id: HashMap<String, Vec<i64>>,
    #[serde(default)]
    service_option_groups_by_id: HashMap<String, WireOptionGroup>,
    #[serde(default)]
    service_options_by_id: IndexMap<String, WireOption>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireService {
    name: String,
    service_category_id: i64,
    default_price: Number,
    default_duration: i64,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Deserialize)]
struct WireOptionGroup {
    name: String,
    prompt: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireOption {
    service_option_group_id: i64,
    name: String,
    price: Number,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStaffInfo {
    staff_by_id: HashMap<String, WireStaff>,
    staff_ids_by_service_id: HashMap<String, Vec<i64>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStaff {
    first_name: String,
    #[serde(default)]
    last_name: Option<String>,
}

// ============================================================================
// Indexed Records
// ============================================================================

/// Service category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id
    pub id: i64,
    /// Display name
    pub name: String,
}

/// Bookable service entry
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceItem {
    /// Service id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Owning category
    pub category_id: i64,
    /// Default price, exactly as written in the snapshot
    pub price: Number,
    /// Default duration in minutes
    pub duration_minutes: i64,
    /// Optional marketing description
    pub description: Option<String>,
}

/// Staff member who can perform services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    /// Staff id
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name, if recorded
    pub last_name: Option<String>,
}

impl StaffMember {
    /// First name followed by the last name when one is present
    #[must_use]
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }
}

/// Group of optional add-ons offered with a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonGroup {
    /// Group id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Question shown to the customer
    pub prompt: String,
}

/// Single selectable add-on
#[derive(Debug, Clone, PartialEq)]
pub struct AddonOption {
    /// Option id
    pub id: i64,
    /// Group this option belongs to
    pub group_id: i64,
    /// Display name
    pub name: String,
    /// Surcharge, exactly as written in the snapshot
    pub price: Number,
}

/// Counts and load time of a published snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
    /// Number of categories
    pub categories_count: usize,
    /// Number of services
    pub services_count: usize,
    /// When the snapshot was parsed
    pub loaded_at: DateTime<Utc>,
}

/// Immutable, fully indexed catalog
///
/// Built once per load and never modified; a reload builds a new value.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    categories: Vec<Category>,
    services: IndexMap<i64, ServiceItem>,
    staff: HashMap<i64, StaffMember>,
    staff_by_service: HashMap<i64, Vec<i64>>,
    addon_groups: HashMap<i64, AddonGroup>,
    addon_groups_by_service: HashMap<i64, Vec<i64>>,
    options_by_group: HashMap<i64, Vec<AddonOption>>,
    loaded_at: DateTime<Utc>,
}

fn parse_key(table: &str, key: &str) -> Result<i64, CatalogError> {
    key.trim()
        .parse()
        .map_err(|_| CatalogError::Malformed(format!("{table} key '{key}' is not an integer id")))
}

fn duplicate_key(table: &str, id: i64) -> CatalogError {
    CatalogError::Malformed(format!("{table} has more than one entry for id {id}"))
}

fn index_lists(
    table: &str,
    lists: HashMap<String, Vec<i64>>,
) -> Result<HashMap<i64, Vec<i64>>, CatalogError> {
    let mut indexed = HashMap::with_capacity(lists.len());
    for (key, ids) in lists {
        let id = parse_key(table, &key)?;
        if indexed.insert(id, ids).is_some() {
            return Err(duplicate_key(table, id));
        }
    }
    Ok(indexed)
}

impl CatalogSnapshot {
    /// Parse and validate a JSON snapshot
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when the document does not match the
    /// snapshot schema, a map key is not an integer, or an id repeats within a table.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let wire: WireSnapshot =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::from_wire(wire)
    }

    fn from_wire(wire: WireSnapshot) -> Result<Self, CatalogError> {
        let WireSnapshot {
            services_info,
            staff_info,
        } = wire;

        let mut seen = HashSet::with_capacity(services_info.service_categories.len());
        for category in &services_info.service_categories {
            if !seen.insert(category.id) {
                return Err(CatalogError::Malformed(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }

        let mut services = IndexMap::with_capacity(services_info.services_by_id.len());
        for (key, service) in services_info.services_by_id {
            let id = parse_key("servicesById", &key)?;
            let previous = services.insert(
                id,
                ServiceItem {
                    id,
                    name: service.name,
                    category_id: service.service_category_id,
                    price: service.default_price,
                    duration_minutes: service.default_duration,
                    description: service.description,
                },
            );
            if previous.is_some() {
                return Err(duplicate_key("servicesById", id));
            }
        }

        let mut addon_groups = HashMap::with_capacity(services_info.service_option_groups_by_id.len());
        for (key, group) in services_info.service_option_groups_by_id {
            let id = parse_key("serviceOptionGroupsById", &key)?;
            let group = AddonGroup {
                id,
                name: group.name,
                prompt: group.prompt,
            };
            if addon_groups.insert(id, group).is_some() {
                return Err(duplicate_key("serviceOptionGroupsById", id));
            }
        }

        let mut options_by_group: HashMap<i64, Vec<AddonOption>> = HashMap::new();
        let mut option_ids = HashSet::with_capacity(services_info.service_options_by_id.len());
        for (key, option) in services_info.service_options_by_id {
            let id = parse_key("serviceOptionsById", &key)?;
            if !option_ids.insert(id) {
                return Err(duplicate_key("serviceOptionsById", id));
            }
            options_by_group
                .entry(option.service_option_group_id)
                .or_default()
                .push(AddonOption {
                    id,
                    group_id: option.service_option_group_id,
                    name: option.name,
                    price: option.price,
                });
        }

        let mut staff = HashMap::with_capacity(staff_info.staff_by_id.len());
        for (key, member) in staff_info.staff_by_id {
            let id = parse_key("staffById", &key)?;
            let member = StaffMember {
                id,
                first_name: member.first_name,
                last_name: member.last_name,
            };
            if staff.insert(id, member).is_some() {
                return Err(duplicate_key("staffById", id));
            }
        }

        Ok(Self {
            categories: services_info.service_categories,
            services,
            staff,
            staff_by_service: index_lists("staffIdsByServiceId", staff_info.staff_ids_by_service_id)?,
            addon_groups,
            addon_groups_by_service: index_lists(
                "serviceOptionGroupIdsByServiceId",
                services_info.service_option_group_ids_by_service_id,
            )?,
            options_by_group,
            loaded_at: Utc::now(),
        })
    }

    /// Categories in snapshot order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Services in snapshot order
    pub fn services(&self) -> impl Iterator<Item = &ServiceItem> {
        self.services.values()
    }

    /// Services belonging to a category, in snapshot order
    pub fn services_in_category(&self, category_id: i64) -> impl Iterator<Item = &ServiceItem> {
        self.services
            .values()
            .filter(move |service| service.category_id == category_id)
    }

    /// First category whose name matches ignoring case
    #[must_use]
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let needle = name.to_lowercase();
        self.categories
            .iter()
            .find(|category| category.name.to_lowercase() == needle)
    }

    /// First service whose name matches ignoring case
    #[must_use]
    pub fn service_by_name(&self, name: &str) -> Option<&ServiceItem> {
        let needle = name.to_lowercase();
        self.services
            .values()
            .find(|service| service.name.to_lowercase() == needle)
    }

    /// Staff record by id
    #[must_use]
    pub fn staff_member(&self, id: i64) -> Option<&StaffMember> {
        self.staff.get(&id)
    }

    /// Staff ids available for a service, empty when none are listed
    #[must_use]
    pub fn staff_ids_for(&self, service_id: i64) -> &[i64] {
        self.staff_by_service
            .get(&service_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Add-on group record by id
    #[must_use]
    pub fn addon_group(&self, id: i64) -> Option<&AddonGroup> {
        self.addon_groups.get(&id)
    }

    /// Add-on group ids attached to a service, empty when none are listed
    #[must_use]
    pub fn addon_group_ids_for(&self, service_id: i64) -> &[i64] {
        self.addon_groups_by_service
            .get(&service_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Options of an add-on group in snapshot order
    #[must_use]
    pub fn options_in_group(&self, group_id: i64) -> &[AddonOption] {
        self.options_by_group
            .get(&group_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Counts and load time
    #[must_use]
    pub fn stats(&self) -> SnapshotStats {
        SnapshotStats {
            categories_count: self.categories.len(),
            services_count: self.services.len(),
            loaded_at: self.loaded_at,
        }
    }
}
