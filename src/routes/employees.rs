// ABOUTME: Employee route handlers plus a self-describing schema endpoint for callers
// ABOUTME: The schema route documents the simplified employee shape every provider accepts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::EmployeeCreate;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// JSON schema of `EmployeeCreate`
fn employee_create_schema() -> Value {
    json!({
        "title": "EmployeeCreate",
        "type": "object",
        "properties": {
            "name": { "title": "Name", "type": "string" },
            "center_id": { "title": "Center Id", "type": "string" },
            "specialties": {
                "title": "Specialties",
                "type": "array",
                "items": { "type": "string" },
                "default": []
            },
            "phone": {
                "title": "Phone",
                "anyOf": [{ "type": "string" }, { "type": "null" }],
                "default": null
            }
        },
        "required": ["name", "center_id"]
    })
}

/// Employee routes
pub struct EmployeeRoutes;

impl EmployeeRoutes {
    /// Create all employee routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/employees",
                get(Self::handle_list_employees).post(Self::handle_create_employee),
            )
            // Static segment wins over the `:employee_id` capture
            .route("/employees/schema", get(Self::handle_schema))
            .route("/employees/:employee_id", get(Self::handle_get_employee))
            .with_state(resources)
    }

    async fn handle_create_employee(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<EmployeeCreate>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let employee = resources.provider.create_employee(request).await?;
        Ok((StatusCode::OK, Json(employee)).into_response())
    }

    async fn handle_get_employee(
        State(resources): State<Arc<ServerResources>>,
        Path(employee_id): Path<String>,
    ) -> Result<Response, AppError> {
        let employee = resources.provider.get_employee(&employee_id).await?;
        Ok((StatusCode::OK, Json(employee)).into_response())
    }

    async fn handle_list_employees(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let employees = resources.provider.list_employees().await?;
        Ok((StatusCode::OK, Json(employees)).into_response())
    }

    async fn handle_schema() -> Json<Value> {
        Json(json!({
            "description": "Simple employee interface for booking assistants",
            "schema": employee_create_schema(),
            "example": {
                "name": "Sarah Johnson",
                "center_id": "1",
                "specialties": ["Botox", "Facials"],
                "phone": "555-0123"
            },
            "note": "This interface works with every provider. The provider maps it onto its own staff schema."
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_example_parses_as_employee_create() {
        let example = json!({
            "name": "Sarah Johnson",
            "center_id": "1",
            "specialties": ["Botox", "Facials"],
            "phone": "555-0123"
        });
        let parsed: EmployeeCreate = serde_json::from_value(example).unwrap();
        assert_eq!(parsed.specialties.len(), 2);

        let schema = employee_create_schema();
        assert_eq!(schema["required"], json!(["name", "center_id"]));
    }
}
