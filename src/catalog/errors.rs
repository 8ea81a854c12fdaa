// ABOUTME: Error types for catalog loading, name resolution, and snapshot integrity
// ABOUTME: Converts into AppError so data-source failures render as HTTP 500 and misses as 404
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use std::path::PathBuf;
use thiserror::Error;

/// Catalog failures
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Snapshot file could not be read
    #[error("failed to read catalog snapshot {path}: {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Remote snapshot could not be fetched
    #[error("failed to fetch catalog snapshot from {url}: {details}")]
    Fetch {
        /// Endpoint that was called
        url: String,
        /// Transport or status detail
        details: String,
    },

    /// Snapshot content does not match the expected schema
    #[error("catalog snapshot is malformed: {0}")]
    Malformed(String),

    /// No category matched the requested name
    #[error("Service category '{0}' not found")]
    CategoryNotFound(String),

    /// No service matched the requested name
    #[error("Service '{0}' not found")]
    ServiceNotFound(String),

    /// A service references a record missing from its lookup table
    #[error("{table} {id} referenced by service {service_id} does not exist")]
    DanglingReference {
        /// Lookup table name
        table: &'static str,
        /// Missing id
        id: i64,
        /// Service holding the reference
        service_id: i64,
    },
}

impl CatalogError {
    /// Whether the error came from obtaining the snapshot rather than querying it
    #[must_use]
    pub const fn is_data_source(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Fetch { .. } | Self::Malformed(_))
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::CategoryNotFound(_) | CatalogError::ServiceNotFound(_) => {
                Self::not_found_with(error.to_string())
            }
            CatalogError::DanglingReference { .. } => Self::data_integrity(error.to_string()),
            CatalogError::Io { .. } | CatalogError::Fetch { .. } | CatalogError::Malformed(_) => {
                let message = error.to_string();
                Self::data_source(message).with_source(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_lookup_misses_are_not_found() {
        let app: AppError = CatalogError::ServiceNotFound("Peel".to_owned()).into();
        assert_eq!(app.code, ErrorCode::ResourceNotFound);
        assert_eq!(app.message, "Service 'Peel' not found");
    }

    #[test]
    fn test_source_failures_are_data_source_errors() {
        let error = CatalogError::Fetch {
            url: "http://catalog.invalid".to_owned(),
            details: "HTTP 503".to_owned(),
        };
        assert!(error.is_data_source());

        let app: AppError = error.into();
        assert_eq!(app.http_status(), 500);
        assert_eq!(app.code, ErrorCode::DataSourceError);
        assert!(app.message.contains("HTTP 503"));
    }
}
