// ABOUTME: Catalog snapshot sources: a local JSON file or a remote HTTP endpoint
// ABOUTME: Each fetch returns a fully parsed snapshot or a data-source error carrying the cause
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::errors::CatalogError;
use super::snapshot::CatalogSnapshot;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Remote snapshot endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    /// URL answering `GET` with the snapshot JSON
    pub url: String,
    /// Deadline for the whole request
    pub timeout: Duration,
}

/// Where the catalog snapshot is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// JSON file on local disk
    File(PathBuf),
    /// JSON document served over HTTP
    Remote(RemoteSource),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Remote(remote) => write!(f, "remote:{}", remote.url),
        }
    }
}

impl CatalogSource {
    /// Read and parse a snapshot
    ///
    /// # Errors
    ///
    /// Returns a data-source [`CatalogError`] for unreadable files, failed or
    /// timed out requests, non-success statuses, and malformed documents.
    pub async fn fetch(&self, http: &Client) -> Result<CatalogSnapshot, CatalogError> {
        let bytes = match self {
            Self::File(path) => {
                debug!(path = %path.display(), "Reading catalog snapshot file");
                tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                })?
            }
            Self::Remote(remote) => Self::fetch_remote(remote, http).await?,
        };
        CatalogSnapshot::from_json(&bytes)
    }

    async fn fetch_remote(remote: &RemoteSource, http: &Client) -> Result<Vec<u8>, CatalogError> {
        let fetch_error = |details: String| CatalogError::Fetch {
            url: remote.url.clone(),
            details,
        };

        debug!(url = %remote.url, timeout_secs = remote.timeout.as_secs(), "Fetching catalog snapshot");
        let response = http
            .get(&remote.url)
            .header(ACCEPT, "application/json")
            .timeout(remote.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    fetch_error(format!("timed out after {}s", remote.timeout.as_secs()))
                } else {
                    fetch_error(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/services.json"));
        let error = source.fetch(&Client::new()).await.unwrap_err();
        assert!(matches!(error, CatalogError::Io { .. }));
        assert!(error.is_data_source());
    }

    #[test]
    fn test_display_names_the_origin() {
        let file = CatalogSource::File(PathBuf::from("services.json"));
        let remote = CatalogSource::Remote(RemoteSource {
            url: "https://catalog.example.com/snapshot".to_owned(),
            timeout: Duration::from_secs(30),
        });
        assert_eq!(file.to_string(), "file:services.json");
        assert_eq!(remote.to_string(), "remote:https://catalog.example.com/snapshot");
    }
}
