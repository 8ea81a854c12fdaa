// ABOUTME: Read-only catalog queries that join snapshot tables into response trees
// ABOUTME: Name resolution is case-insensitive and returns the first match in snapshot order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::errors::CatalogError;
use super::snapshot::{CatalogSnapshot, ServiceItem};
use super::views::{
    AddonGroupNode, AddonGroupView, AddonOptionView, CatalogTree, CategoryList, CategoryNode,
    CategoryServices, CategorySummary, ServiceAddons, ServiceNode, ServiceStaff, ServiceSummary,
    StaffRef, StaffView,
};

impl CatalogSnapshot {
    fn resolve_service(&self, name: &str) -> Result<&ServiceItem, CatalogError> {
        self.service_by_name(name)
            .ok_or_else(|| CatalogError::ServiceNotFound(name.to_owned()))
    }

    fn option_views(&self, group_id: i64) -> Vec<AddonOptionView> {
        self.options_in_group(group_id)
            .iter()
            .map(AddonOptionView::from)
            .collect()
    }

    fn staff_views(&self, service_id: i64) -> Result<Vec<StaffView>, CatalogError> {
        self.staff_ids_for(service_id)
            .iter()
            .map(|&staff_id| {
                self.staff_member(staff_id)
                    .map(StaffView::from)
                    .ok_or(CatalogError::DanglingReference {
                        table: "staff member",
                        id: staff_id,
                        service_id,
                    })
            })
            .collect()
    }

    /// All categories in snapshot order
    #[must_use]
    pub fn list_categories(&self) -> CategoryList {
        let categories: Vec<_> = self
            .categories()
            .iter()
            .map(|category| CategorySummary {
                id: category.id,
                name: category.name.clone(),
            })
            .collect();
        CategoryList {
            total: categories.len(),
            categories,
        }
    }

    /// Services of the category named `category_name`
    ///
    /// # Errors
    ///
    /// [`CatalogError::CategoryNotFound`] when no category has that name.
    pub fn services_by_category(&self, category_name: &str) -> Result<CategoryServices, CatalogError> {
        let category = self
            .category_by_name(category_name)
            .ok_or_else(|| CatalogError::CategoryNotFound(category_name.to_owned()))?;

        let services: Vec<_> = self
            .services_in_category(category.id)
            .map(ServiceSummary::from)
            .collect();

        Ok(CategoryServices {
            category: category_name.to_owned(),
            category_id: category.id,
            total: services.len(),
            services,
        })
    }

    /// Add-on groups of the service named `service_name`
    ///
    /// # Errors
    ///
    /// [`CatalogError::ServiceNotFound`] for an unknown service and
    /// [`CatalogError::DanglingReference`] when an attached group is missing.
    pub fn addons_by_service(&self, service_name: &str) -> Result<ServiceAddons, CatalogError> {
        let service = self.resolve_service(service_name)?;

        let addon_groups = self
            .addon_group_ids_for(service.id)
            .iter()
            .map(|&group_id| {
                let group = self
                    .addon_group(group_id)
                    .ok_or(CatalogError::DanglingReference {
                        table: "addon group",
                        id: group_id,
                        service_id: service.id,
                    })?;
                Ok(AddonGroupView {
                    group_id,
                    group_name: group.name.clone(),
                    prompt: group.prompt.clone(),
                    options: self.option_views(group_id),
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(ServiceAddons {
            service: service_name.to_owned(),
            service_id: service.id,
            total_groups: addon_groups.len(),
            addon_groups,
        })
    }

    /// Staff who perform the service named `service_name`
    ///
    /// # Errors
    ///
    /// [`CatalogError::ServiceNotFound`] for an unknown service and
    /// [`CatalogError::DanglingReference`] when a listed staff id is missing.
    pub fn staff_by_service(&self, service_name: &str) -> Result<ServiceStaff, CatalogError> {
        let service = self.resolve_service(service_name)?;
        let staff = self.staff_views(service.id)?;

        Ok(ServiceStaff {
            service: service_name.to_owned(),
            service_id: service.id,
            total: staff.len(),
            staff,
        })
    }

    /// Whole catalog as a category tree
    ///
    /// Services whose category does not exist are left out. Attached add-on
    /// groups missing from the group table are skipped, while missing staff
    /// records fail the whole call.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DanglingReference`] when a listed staff id is missing.
    pub fn all_data(&self) -> Result<CatalogTree, CatalogError> {
        let categories = self
            .categories()
            .iter()
            .map(|category| {
                let services = self
                    .services_in_category(category.id)
                    .map(|service| self.service_node(service))
                    .collect::<Result<Vec<_>, CatalogError>>()?;
                Ok(CategoryNode {
                    id: category.id,
                    name: category.name.clone(),
                    services,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(CatalogTree {
            total_categories: categories.len(),
            categories,
        })
    }

    fn service_node(&self, service: &ServiceItem) -> Result<ServiceNode, CatalogError> {
        let staff = self
            .staff_views(service.id)?
            .into_iter()
            .map(|view| StaffRef {
                id: view.id,
                name: view.name,
            })
            .collect();

        let addons = self
            .addon_group_ids_for(service.id)
            .iter()
            .filter_map(|&group_id| {
                self.addon_group(group_id).map(|group| AddonGroupNode {
                    group_id,
                    group_name: group.name.clone(),
                    options: self.option_views(group_id),
                })
            })
            .collect();

        Ok(ServiceNode {
            id: service.id,
            name: service.name.clone(),
            price: service.price.clone(),
            duration: service.duration_minutes,
            description: service.description.clone(),
            staff,
            addons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: &serde_json::Value) -> CatalogSnapshot {
        CatalogSnapshot::from_json(value.to_string().as_bytes()).unwrap()
    }

    fn spa() -> CatalogSnapshot {
        snapshot(&json!({
            "servicesInfo": {
                "serviceCategories": [
                    {"id": 1, "name": "Facials"},
                    {"id": 2, "name": "Massage"},
                    {"id": 3, "name": "Retired"}
                ],
                "servicesById": {
                    "10": {"name": "Deep Clean", "serviceCategoryId": 1, "defaultPrice": 150, "defaultDuration": 60},
                    "11": {"name": "Hydra Glow", "serviceCategoryId": 1, "defaultPrice": 180, "defaultDuration": 45},
                    "20": {"name": "Hot Stone", "serviceCategoryId": 2, "defaultPrice": 120, "defaultDuration": 90},
                    "99": {"name": "Orphan", "serviceCategoryId": 42, "defaultPrice": 1, "defaultDuration": 1}
                },
                "serviceOptionGroupIdsByServiceId": {"10": [7, 8], "20": [9]},
                "serviceOptionGroupsById": {"7": {"name": "Boost", "prompt": "Add a boost?"}},
                "serviceOptionsById": {"70": {"serviceOptionGroupId": 7, "name": "LED", "price": 25}}
            },
            "staffInfo": {
                "staffById": {"3": {"firstName": "Ana", "lastName": "Diaz"}, "4": {"firstName": "Kim"}},
                "staffIdsByServiceId": {"10": [3, 4], "11": [3]}
            }
        }))
    }

    #[test]
    fn test_repeated_names_resolve_to_first_in_snapshot_order() {
        let catalog = snapshot(&json!({
            "servicesInfo": {
                "serviceCategories": [
                    {"id": 1, "name": "Facials"},
                    {"id": 2, "name": "facials"}
                ],
                "servicesById": {
                    "30": {"name": "Peel", "serviceCategoryId": 1, "defaultPrice": 90, "defaultDuration": 30},
                    "10": {"name": "peel", "serviceCategoryId": 2, "defaultPrice": 60, "defaultDuration": 20}
                }
            },
            "staffInfo": {
                "staffById": {"3": {"firstName": "Ana", "lastName": "Diaz"}, "4": {"firstName": "Kim"}},
                "staffIdsByServiceId": {"30": [3], "10": [4]}
            }
        }));

        let by_category = catalog.services_by_category("FACIALS").unwrap();
        assert_eq!(by_category.category_id, 1);
        let ids: Vec<_> = by_category.services.iter().map(|s| s.id).collect();
        assert_eq!(ids, [30]);

        let staff = catalog.staff_by_service("peel").unwrap();
        assert_eq!(staff.service_id, 30);
        assert_eq!(staff.total, 1);
        assert_eq!(staff.staff[0].name, "Ana Diaz");
    }

    #[test]
    fn test_services_by_category_filters_and_counts() {
        let result = spa().services_by_category("FACIALS").unwrap();
        assert_eq!(result.category, "FACIALS");
        assert_eq!(result.category_id, 1);
        assert_eq!(result.total, result.services.len());
        let names: Vec<_> = result.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Deep Clean", "Hydra Glow"]);
    }

    #[test]
    fn test_unknown_names_are_not_found() {
        let catalog = spa();
        assert!(matches!(
            catalog.services_by_category("Nails"),
            Err(CatalogError::CategoryNotFound(_))
        ));
        assert!(matches!(catalog.addons_by_service("Nope"), Err(CatalogError::ServiceNotFound(_))));
        assert!(matches!(catalog.staff_by_service("Nope"), Err(CatalogError::ServiceNotFound(_))));
    }

    #[test]
    fn test_addons_fail_on_missing_group() {
        let error = spa().addons_by_service("Deep Clean").unwrap_err();
        assert!(matches!(
            error,
            CatalogError::DanglingReference { id: 8, service_id: 10, .. }
        ));
    }

    #[test]
    fn test_service_without_addons_is_empty() {
        let addons = spa().addons_by_service("hydra glow").unwrap();
        assert_eq!(addons.total_groups, 0);
        assert!(addons.addon_groups.is_empty());
    }

    #[test]
    fn test_staff_by_service_is_case_insensitive() {
        let catalog = spa();
        let lower = catalog.staff_by_service("deep clean").unwrap();
        let exact = catalog.staff_by_service("Deep Clean").unwrap();
        assert_eq!(lower.staff, exact.staff);
        assert_eq!(lower.staff[0].name, "Ana Diaz");
        assert_eq!(lower.staff[1].name, "Kim");
        assert_eq!(lower.staff[1].last_name, None);
    }

    #[test]
    fn test_all_data_skips_missing_groups_and_orphans() {
        let catalog = spa();
        let tree = catalog.all_data().unwrap();
        assert_eq!(tree.total_categories, 3);
        assert!(tree.categories[2].services.is_empty());

        let deep_clean = &tree.categories[0].services[0];
        assert_eq!(deep_clean.addons.len(), 1);
        assert_eq!(deep_clean.addons[0].group_name, "Boost");
        assert_eq!(deep_clean.staff.len(), 2);

        let tree_services: usize = tree.categories.iter().map(|c| c.services.len()).sum();
        assert_eq!(tree_services, 3);
    }

    #[test]
    fn test_all_data_fails_on_missing_staff() {
        let catalog = snapshot(&json!({
            "servicesInfo": {
                "serviceCategories": [{"id": 1, "name": "Facials"}],
                "servicesById": {"10": {"name": "Deep Clean", "serviceCategoryId": 1, "defaultPrice": 150, "defaultDuration": 60}}
            },
            "staffInfo": {"staffById": {}, "staffIdsByServiceId": {"10": [5]}}
        }));
        assert!(matches!(
            catalog.all_data(),
            Err(CatalogError::DanglingReference { id: 5, .. })
        ));
    }

    #[test]
    fn test_single_category_tree_is_exact() {
        let catalog = snapshot(&json!({
            "servicesInfo": {
                "serviceCategories": [{"id": 1, "name": "Facials"}],
                "servicesById": {"10": {"name": "Deep Clean", "serviceCategoryId": 1, "defaultPrice": 150, "defaultDuration": 60}}
            },
            "staffInfo": {"staffById": {}, "staffIdsByServiceId": {}}
        }));

        let tree = serde_json::to_value(catalog.all_data().unwrap()).unwrap();
        assert_eq!(
            tree,
            json!({
                "total_categories": 1,
                "categories": [{
                    "id": 1,
                    "name": "Facials",
                    "services": [{
                        "id": 10,
                        "name": "Deep Clean",
                        "price": 150,
                        "duration": 60,
                        "description": null,
                        "staff": [],
                        "addons": []
                    }]
                }]
            })
        );
    }
}
