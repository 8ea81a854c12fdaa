// ABOUTME: Serializable response trees produced by catalog queries
// ABOUTME: Owned values built fresh per request, never borrowed from the live snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::snapshot::{AddonOption, ServiceItem, StaffMember};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Category id and name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category id
    pub id: i64,
    /// Display name
    pub name: String,
}

/// All categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    /// Number of categories
    pub total: usize,
    /// Categories in snapshot order
    pub categories: Vec<CategorySummary>,
}

/// Service as listed under a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    /// Service id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Default price
    pub price: Number,
    /// Duration in minutes
    pub duration: i64,
    /// Description, `null` when absent
    pub description: Option<String>,
}

impl From<&ServiceItem> for ServiceSummary {
    fn from(service: &ServiceItem) -> Self {
        Self {
            id: service.id,
            name: service.name.clone(),
            price: service.price.clone(),
            duration: service.duration_minutes,
            description: service.description.clone(),
        }
    }
}

/// Services of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryServices {
    /// Category name as the caller wrote it
    pub category: String,
    /// Resolved category id
    pub category_id: i64,
    /// Number of services
    pub total: usize,
    /// Services in snapshot order
    pub services: Vec<ServiceSummary>,
}

/// Selectable add-on option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonOptionView {
    /// Option id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Surcharge
    pub price: Number,
}

impl From<&AddonOption> for AddonOptionView {
    fn from(option: &AddonOption) -> Self {
        Self {
            id: option.id,
            name: option.name.clone(),
            price: option.price.clone(),
        }
    }
}

/// Add-on group with its prompt and options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonGroupView {
    /// Group id
    pub group_id: i64,
    /// Group name
    pub group_name: String,
    /// Question shown to the customer
    pub prompt: String,
    /// Options in snapshot order
    pub options: Vec<AddonOptionView>,
}

/// Add-on groups of one service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAddons {
    /// Service name as the caller wrote it
    pub service: String,
    /// Resolved service id
    pub service_id: i64,
    /// Number of groups
    pub total_groups: usize,
    /// Groups in association order
    pub addon_groups: Vec<AddonGroupView>,
}

/// Staff member able to perform a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffView {
    /// Staff id
    pub id: i64,
    /// First name plus last name when present
    pub name: String,
    /// Given name
    pub first_name: String,
    /// Family name, `null` when absent
    pub last_name: Option<String>,
}

impl From<&StaffMember> for StaffView {
    fn from(member: &StaffMember) -> Self {
        Self {
            id: member.id,
            name: member.full_name(),
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
        }
    }
}

/// Staff of one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStaff {
    /// Service name as the caller wrote it
    pub service: String,
    /// Resolved service id
    pub service_id: i64,
    /// Number of staff entries
    pub total: usize,
    /// Staff in availability order
    pub staff: Vec<StaffView>,
}

// ============================================================================
// Full Tree
// ============================================================================

/// Staff reference inside the full tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRef {
    /// Staff id
    pub id: i64,
    /// Full name
    pub name: String,
}

/// Add-on group inside the full tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonGroupNode {
    /// Group id
    pub group_id: i64,
    /// Group name
    pub group_name: String,
    /// Options in snapshot order
    pub options: Vec<AddonOptionView>,
}

/// Service inside the full tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceNode {
    /// Service id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Default price
    pub price: Number,
    /// Duration in minutes
    pub duration: i64,
    /// Description, `null` when absent
    pub description: Option<String>,
    /// Staff who perform the service
    pub staff: Vec<StaffRef>,
    /// Add-on groups offered with the service
    pub addons: Vec<AddonGroupNode>,
}

/// Category inside the full tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Category id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Services in snapshot order, possibly empty
    pub services: Vec<ServiceNode>,
}

/// Every category with its services, staff, and add-ons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTree {
    /// Number of categories
    pub total_categories: usize,
    /// Categories in snapshot order
    pub categories: Vec<CategoryNode>,
}
