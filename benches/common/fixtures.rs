// ABOUTME: Benchmark fixtures generating catalog snapshots of configurable size
// ABOUTME: Deterministic so repeated runs measure the same menu shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for catalog snapshots.

use serde_json::{json, Map, Value};

/// Predefined menu sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Single-location spa
    Small,
    /// Multi-category menu
    Medium,
    /// Chain-wide menu
    Large,
}

impl CatalogSize {
    /// Categories and services per category
    #[must_use]
    pub const fn shape(self) -> (usize, usize) {
        match self {
            Self::Small => (4, 5),
            Self::Medium => (12, 20),
            Self::Large => (40, 50),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Name of the last service of the last category, the slowest first-match lookup
#[must_use]
pub fn last_service_name(size: CatalogSize) -> String {
    let (categories, per_category) = size.shape();
    format!("Service {}", categories * per_category - 1)
}

/// Snapshot document with every third service carrying two add-on groups
/// and every service staffed by two of ten staff members
#[must_use]
pub fn generate_snapshot(size: CatalogSize) -> Vec<u8> {
    let (categories, per_category) = size.shape();

    let mut services = Map::new();
    let mut group_ids = Map::new();
    let mut groups = Map::new();
    let mut options = Map::new();
    let mut staff_ids = Map::new();

    for index in 0..categories * per_category {
        let category_id = index / per_category + 1;
        services.insert(
            index.to_string(),
            json!({
                "name": format!("Service {index}"),
                "serviceCategoryId": category_id,
                "defaultPrice": 100 + index % 200,
                "defaultDuration": 30 + (index % 4) * 15,
                "description": format!("Treatment number {index}")
            }),
        );
        staff_ids.insert(index.to_string(), json!([index % 10, (index + 3) % 10]));

        if index % 3 == 0 {
            let first = index * 2;
            group_ids.insert(index.to_string(), json!([first, first + 1]));
            for group in [first, first + 1] {
                groups.insert(
                    group.to_string(),
                    json!({ "name": format!("Group {group}"), "prompt": "Add an extra?" }),
                );
                for option in 0..3 {
                    options.insert(
                        (group * 10 + option).to_string(),
                        json!({
                            "serviceOptionGroupId": group,
                            "name": format!("Option {option}"),
                            "price": 15 + option * 5
                        }),
                    );
                }
            }
        }
    }

    let staff: Map<String, Value> = (0..10)
        .map(|id| {
            (
                id.to_string(),
                json!({ "firstName": format!("Staff{id}"), "lastName": "Member" }),
            )
        })
        .collect();

    let category_list: Vec<Value> = (1..=categories)
        .map(|id| json!({ "id": id, "name": format!("Category {id}") }))
        .collect();

    serde_json::to_vec(&json!({
        "servicesInfo": {
            "serviceCategories": category_list,
            "servicesById": services,
            "serviceOptionGroupIdsByServiceId": group_ids,
            "serviceOptionGroupsById": groups,
            "serviceOptionsById": options
        },
        "staffInfo": {
            "staffById": staff,
            "staffIdsByServiceId": staff_ids
        }
    }))
    .unwrap_or_default()
}
